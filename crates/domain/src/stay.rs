// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay periods and date arithmetic for bookings.
//!
//! A stay is a half-open date interval: the guest holds the room on
//! every night from `check_in` up to but not including `check_out`.
//! A booking checking out on the morning another checks in is a
//! same-day turnover, not a conflict.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A validated half-open stay interval.
///
/// Construction guarantees `check_out` is strictly after `check_in`,
/// so every `StayPeriod` covers at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayPeriod {
    /// First night of the stay.
    check_in: time::Date,
    /// Morning the room is vacated.
    check_out: time::Date,
}

impl StayPeriod {
    /// Creates a stay period after validating date ordering.
    ///
    /// # Arguments
    ///
    /// * `check_in` - First night of the stay
    /// * `check_out` - Morning the room is vacated
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_out` is not
    /// strictly after `check_in`.
    pub fn new(check_in: time::Date, check_out: time::Date) -> Result<Self, DomainError> {
        // Rule: check-out must be strictly after check-in
        if check_out <= check_in {
            return Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> time::Date {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> time::Date {
        self.check_out
    }

    /// Number of nights covered by the stay. Always at least 1.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }

    /// Total cost of the stay at the given nightly rate, in cents.
    ///
    /// This is computed exactly once per booking, at creation time.
    #[must_use]
    pub fn total_cost_cents(&self, price_per_night_cents: i64) -> i64 {
        self.nights() * price_per_night_cents
    }

    /// Checks whether this stay overlaps another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlaps_dates(other.check_in, other.check_out)
    }

    /// Checks whether this stay overlaps the half-open interval
    /// `[check_in, check_out)`.
    ///
    /// Touching endpoints do not overlap: an existing booking checking
    /// out on this stay's check-in date is a same-day turnover.
    #[must_use]
    pub fn overlaps_dates(&self, check_in: time::Date, check_out: time::Date) -> bool {
        self.check_in < check_out && self.check_out > check_in
    }

    /// Validates that the stay does not begin before `today`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CheckInInPast` if the check-in date is
    /// earlier than `today`.
    pub fn validate_not_in_past(&self, today: time::Date) -> Result<(), DomainError> {
        // Rule: a stay may begin today but never in the past
        if self.check_in < today {
            return Err(DomainError::CheckInInPast {
                check_in: self.check_in,
                today,
            });
        }
        Ok(())
    }
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// date in that format.
pub fn parse_date(value: &str) -> Result<time::Date, DomainError> {
    time::Date::parse(
        value,
        time::macros::format_description!("[year]-[month]-[day]"),
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(value: time::Date) -> String {
    value
        .format(time::macros::format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| value.to_string())
}
