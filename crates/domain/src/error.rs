// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Room number is empty or invalid.
    InvalidRoomNumber(String),
    /// Room type is empty or invalid.
    InvalidRoomType(String),
    /// Nightly price violates a pricing rule.
    InvalidPrice(&'static str),
    /// Maximum occupancy must be positive.
    InvalidOccupancy {
        /// The invalid occupancy value.
        occupancy: i32,
    },
    /// Guest name is empty or invalid.
    InvalidGuestName(String),
    /// Guest email is empty or malformed.
    InvalidGuestEmail(String),
    /// Guest count must be positive.
    InvalidGuestCount {
        /// The invalid guest count.
        guests: i32,
    },
    /// Guest count exceeds the room's capacity.
    GuestCountExceedsCapacity {
        /// The requested guest count.
        guests: i32,
        /// The room's maximum occupancy.
        max_occupancy: i32,
    },
    /// Check-out date is not strictly after check-in date.
    InvalidStayRange {
        /// The requested check-in date.
        check_in: time::Date,
        /// The requested check-out date.
        check_out: time::Date,
    },
    /// Check-in date lies in the past.
    CheckInInPast {
        /// The requested check-in date.
        check_in: time::Date,
        /// The reference date the request was evaluated against.
        today: time::Date,
    },
    /// Booking status string is not a recognized status.
    InvalidBookingStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Room status string is not a recognized status.
    InvalidRoomStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Requested booking status change is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is rejected.
        reason: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoomNumber(msg) => write!(f, "Invalid room number: {msg}"),
            Self::InvalidRoomType(msg) => write!(f, "Invalid room type: {msg}"),
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {msg}"),
            Self::InvalidOccupancy { occupancy } => {
                write!(
                    f,
                    "Invalid maximum occupancy: {occupancy}. Must be greater than 0"
                )
            }
            Self::InvalidGuestName(msg) => write!(f, "Invalid guest name: {msg}"),
            Self::InvalidGuestEmail(msg) => write!(f, "Invalid guest email: {msg}"),
            Self::InvalidGuestCount { guests } => {
                write!(f, "Invalid guest count: {guests}. Must be greater than 0")
            }
            Self::GuestCountExceedsCapacity {
                guests,
                max_occupancy,
            } => {
                write!(
                    f,
                    "Guest count {guests} exceeds the room's maximum occupancy of {max_occupancy}"
                )
            }
            Self::InvalidStayRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be after check-in date {check_in}"
                )
            }
            Self::CheckInInPast { check_in, today } => {
                write!(
                    f,
                    "Check-in date {check_in} is in the past (today is {today})"
                )
            }
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: '{status}'")
            }
            Self::InvalidRoomStatus { status } => {
                write!(f, "Invalid room status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(
                    f,
                    "Cannot change booking status from '{from}' to '{to}': {reason}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
