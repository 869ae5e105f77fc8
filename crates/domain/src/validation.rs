// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Room;

/// Validates a room's field constraints at creation time.
///
/// This function checks field shape only. It does NOT check room number
/// uniqueness (that requires the existing catalog).
///
/// # Arguments
///
/// * `room` - The room to validate
///
/// # Returns
///
/// * `Ok(())` if the room's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The room number is blank
/// - The room type is blank
/// - The nightly price is not positive
/// - The maximum occupancy is not positive
pub fn validate_room_fields(room: &Room) -> Result<(), DomainError> {
    // Rule: room number must not be blank
    if room.room_number.trim().is_empty() {
        return Err(DomainError::InvalidRoomNumber(String::from(
            "Room number cannot be empty",
        )));
    }

    // Rule: room type must not be blank
    if room.room_type.trim().is_empty() {
        return Err(DomainError::InvalidRoomType(String::from(
            "Room type cannot be empty",
        )));
    }

    // Rule: a new room's nightly price must be positive
    if room.price_per_night_cents <= 0 {
        return Err(DomainError::InvalidPrice(
            "Price per night must be greater than 0",
        ));
    }

    validate_max_occupancy(room.max_occupancy)
}

/// Validates a nightly price supplied in a room update.
///
/// Zero is permitted on update; negative values never are. An explicit
/// zero is applied rather than skipped, so updates are never silently
/// dropped.
///
/// # Errors
///
/// Returns `DomainError::InvalidPrice` if the price is negative.
pub const fn validate_price_update(price_per_night_cents: i64) -> Result<(), DomainError> {
    // Rule: an updated price may be zero but never negative
    if price_per_night_cents < 0 {
        return Err(DomainError::InvalidPrice(
            "Price per night cannot be negative",
        ));
    }
    Ok(())
}

/// Validates a maximum occupancy value.
///
/// # Errors
///
/// Returns `DomainError::InvalidOccupancy` if the occupancy is not
/// positive.
pub const fn validate_max_occupancy(max_occupancy: i32) -> Result<(), DomainError> {
    // Rule: a room must sleep at least one guest
    if max_occupancy <= 0 {
        return Err(DomainError::InvalidOccupancy {
            occupancy: max_occupancy,
        });
    }
    Ok(())
}

/// Validates guest contact details for a new booking.
///
/// # Arguments
///
/// * `guest_name` - Name of the guest the reservation is held for
/// * `guest_email` - Contact email for the guest
///
/// # Errors
///
/// Returns an error if the name is blank, or the email is blank or not
/// minimally well-formed.
pub fn validate_guest_details(guest_name: &str, guest_email: &str) -> Result<(), DomainError> {
    // Rule: guest name must not be blank
    if guest_name.trim().is_empty() {
        return Err(DomainError::InvalidGuestName(String::from(
            "Guest name cannot be empty",
        )));
    }

    // Rule: guest email must be present and contain an '@'
    let email = guest_email.trim();
    if email.is_empty() {
        return Err(DomainError::InvalidGuestEmail(String::from(
            "Guest email cannot be empty",
        )));
    }
    if !email.contains('@') {
        return Err(DomainError::InvalidGuestEmail(format!(
            "Guest email '{email}' is not a valid address"
        )));
    }

    Ok(())
}

/// Validates a requested guest count against a room's capacity.
///
/// # Arguments
///
/// * `num_guests` - Size of the party
/// * `max_occupancy` - The room's maximum occupancy
///
/// # Errors
///
/// Returns an error if the count is not positive or exceeds the room's
/// capacity.
pub const fn validate_guest_count(num_guests: i32, max_occupancy: i32) -> Result<(), DomainError> {
    // Rule: a booking covers at least one guest
    if num_guests <= 0 {
        return Err(DomainError::InvalidGuestCount { guests: num_guests });
    }

    // Rule: the party must fit the room
    if num_guests > max_occupancy {
        return Err(DomainError::GuestCountExceedsCapacity {
            guests: num_guests,
            max_occupancy,
        });
    }

    Ok(())
}
