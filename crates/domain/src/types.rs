// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Operational status of a room.
///
/// This is a manual flag set by staff. It is independent of whether any
/// booking currently occupies the room; a room under maintenance is
/// simply never offered to guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Room may be offered to guests.
    #[default]
    Available,
    /// Room is out of service and excluded from availability.
    Maintenance,
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(DomainError::InvalidRoomStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RoomStatus {
    /// Converts this status to its string representation.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Maintenance => "maintenance",
        }
    }
}

/// A rentable room in the catalog.
///
/// `room_id` is the canonical internal identifier assigned by the
/// database. `room_number` is the human-facing label and must be unique
/// among existing rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Canonical numeric identifier assigned by the database.
    /// `None` indicates the room has not been persisted yet.
    pub room_id: Option<i64>,
    /// Human-facing room number (e.g. "101"). Unique per hotel.
    pub room_number: String,
    /// Free-form category tag (e.g. "single", "double", "suite").
    /// Room types are an open set; new tags require no code change.
    pub room_type: String,
    /// Nightly rate in integer cents.
    pub price_per_night_cents: i64,
    /// Largest party the room sleeps.
    pub max_occupancy: i32,
    /// Ordered amenity tags shown to guests.
    pub amenities: Vec<String>,
    /// Manual operational flag.
    pub status: RoomStatus,
}

impl Room {
    /// Creates a new `Room` without a persisted `room_id`.
    ///
    /// The `room_id` will be assigned by the persistence layer upon
    /// first save.
    ///
    /// # Arguments
    ///
    /// * `room_number` - The human-facing room number
    /// * `room_type` - The room category tag
    /// * `price_per_night_cents` - The nightly rate in cents
    /// * `max_occupancy` - The largest party the room sleeps
    /// * `amenities` - Ordered amenity tags
    /// * `status` - The operational flag
    #[must_use]
    pub const fn new(
        room_number: String,
        room_type: String,
        price_per_night_cents: i64,
        max_occupancy: i32,
        amenities: Vec<String>,
        status: RoomStatus,
    ) -> Self {
        Self {
            room_id: None,
            room_number,
            room_type,
            price_per_night_cents,
            max_occupancy,
            amenities,
            status,
        }
    }

    /// Creates a `Room` with an existing `room_id` (from persistence).
    #[must_use]
    pub const fn with_id(
        room_id: i64,
        room_number: String,
        room_type: String,
        price_per_night_cents: i64,
        max_occupancy: i32,
        amenities: Vec<String>,
        status: RoomStatus,
    ) -> Self {
        Self {
            room_id: Some(room_id),
            room_number,
            room_type,
            price_per_night_cents,
            max_occupancy,
            amenities,
            status,
        }
    }
}

/// A guest reservation against a single room.
///
/// Bookings are append-only: they are never physically deleted, and
/// cancellation is a status transition. `total_cost_cents` is computed
/// once at creation and never recomputed, so later price changes do not
/// affect existing bookings. `room_number` is a denormalized copy taken
/// when the booking was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical numeric identifier assigned by the database.
    /// `None` indicates the booking has not been persisted yet.
    pub booking_id: Option<i64>,
    /// Human-facing reference code (e.g. "BKG-7Q4RT081Z"). Unique and
    /// immutable.
    pub booking_code: String,
    /// Name of the guest the reservation is held for.
    pub guest_name: String,
    /// Contact email for the guest.
    pub guest_email: String,
    /// Optional contact phone number.
    pub guest_phone: Option<String>,
    /// The room this booking occupies.
    pub room_id: i64,
    /// Room number captured at booking time.
    pub room_number: String,
    /// First night of the stay.
    pub check_in: time::Date,
    /// Morning the room is vacated. Strictly after `check_in`.
    pub check_out: time::Date,
    /// Size of the party. Never exceeds the room's capacity at the time
    /// the booking was created.
    pub num_guests: i32,
    /// Full cost of the stay in cents, fixed at creation.
    pub total_cost_cents: i64,
    /// Lifecycle state.
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a new `Booking` without a persisted `booking_id`.
    ///
    /// New bookings always start in the `Confirmed` state.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        booking_code: String,
        guest_name: String,
        guest_email: String,
        guest_phone: Option<String>,
        room_id: i64,
        room_number: String,
        check_in: time::Date,
        check_out: time::Date,
        num_guests: i32,
        total_cost_cents: i64,
    ) -> Self {
        Self {
            booking_id: None,
            booking_code,
            guest_name,
            guest_email,
            guest_phone,
            room_id,
            room_number,
            check_in,
            check_out,
            num_guests,
            total_cost_cents,
            status: BookingStatus::Confirmed,
        }
    }

    /// Creates a `Booking` with an existing `booking_id` (from
    /// persistence).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        booking_id: i64,
        booking_code: String,
        guest_name: String,
        guest_email: String,
        guest_phone: Option<String>,
        room_id: i64,
        room_number: String,
        check_in: time::Date,
        check_out: time::Date,
        num_guests: i32,
        total_cost_cents: i64,
        status: BookingStatus,
    ) -> Self {
        Self {
            booking_id: Some(booking_id),
            booking_code,
            guest_name,
            guest_email,
            guest_phone,
            room_id,
            room_number,
            check_in,
            check_out,
            num_guests,
            total_cost_cents,
            status,
        }
    }
}
