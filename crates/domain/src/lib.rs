// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking_code;
mod booking_status;
mod error;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_code::{BOOKING_CODE_PREFIX, generate_booking_code};
pub use booking_status::BookingStatus;
pub use stay::{StayPeriod, format_date, parse_date};

// Re-export public types
pub use error::DomainError;
pub use types::{Booking, Room, RoomStatus};
pub use validation::{
    validate_guest_count, validate_guest_details, validate_max_occupancy, validate_price_update,
    validate_room_fields,
};
