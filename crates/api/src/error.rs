// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use frontdesk_domain::DomainError;
use frontdesk_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract: every variant corresponds to exactly one HTTP status at
/// the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The request is well-formed but collides with current state: a taken
    /// room number, an overlapping stay, a booking past the expected
    /// status, or a deletion blocked by bookings on record.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::Conflict { message } => {
                write!(f, "Conflict: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly. Validation failures become `InvalidInput`; a rejected status
/// transition becomes `Conflict` because the request was well-formed and
/// collided with the booking's current state.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidRoomNumber(msg) => ApiError::InvalidInput {
            field: String::from("room_number"),
            message: msg,
        },
        DomainError::InvalidRoomType(msg) => ApiError::InvalidInput {
            field: String::from("room_type"),
            message: msg,
        },
        DomainError::InvalidPrice(msg) => ApiError::InvalidInput {
            field: String::from("price_per_night_cents"),
            message: msg.to_string(),
        },
        DomainError::InvalidOccupancy { occupancy } => ApiError::InvalidInput {
            field: String::from("max_occupancy"),
            message: format!("Invalid maximum occupancy: {occupancy}. Must be greater than 0"),
        },
        DomainError::InvalidGuestName(msg) => ApiError::InvalidInput {
            field: String::from("guest_name"),
            message: msg,
        },
        DomainError::InvalidGuestEmail(msg) => ApiError::InvalidInput {
            field: String::from("guest_email"),
            message: msg,
        },
        DomainError::InvalidGuestCount { guests } => ApiError::InvalidInput {
            field: String::from("num_guests"),
            message: format!("Invalid guest count: {guests}. Must be greater than 0"),
        },
        DomainError::GuestCountExceedsCapacity {
            guests,
            max_occupancy,
        } => ApiError::InvalidInput {
            field: String::from("num_guests"),
            message: format!(
                "Guest count {guests} exceeds the room's maximum occupancy of {max_occupancy}"
            ),
        },
        DomainError::InvalidStayRange {
            check_in,
            check_out,
        } => ApiError::InvalidInput {
            field: String::from("check_out"),
            message: format!("Check-out date {check_out} must be after check-in date {check_in}"),
        },
        DomainError::CheckInInPast { check_in, today } => ApiError::InvalidInput {
            field: String::from("check_in"),
            message: format!("Check-in date {check_in} is in the past (today is {today})"),
        },
        DomainError::InvalidBookingStatus { status }
        | DomainError::InvalidRoomStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a recognized status"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::Conflict {
            message: format!("Cannot change booking status from '{from}' to '{to}': {reason}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Missing rows become `ResourceNotFound`, constraint collisions (duplicate
/// room numbers, overlapping stays, lost compare-and-swap transitions,
/// guarded deletions) become `Conflict`, and everything else is reported as
/// `Internal`. The transport layer is responsible for not echoing
/// `Internal` detail to clients.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::RoomNotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: msg,
        },
        PersistenceError::BookingNotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: msg,
        },
        PersistenceError::OperatorNotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Operator"),
            message: msg,
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message: msg,
        },
        PersistenceError::DuplicateRoomNumber { room_number } => ApiError::Conflict {
            message: format!("Room number {room_number} is already in use"),
        },
        PersistenceError::RoomHasBookings {
            room_id,
            booking_count,
        } => ApiError::Conflict {
            message: format!(
                "Room {room_id} cannot be deleted: referenced by {booking_count} booking(s)"
            ),
        },
        PersistenceError::BookingOverlap { room_number } => ApiError::Conflict {
            message: format!("Room {room_number} is already booked for an overlapping stay"),
        },
        PersistenceError::BookingStateChanged {
            booking_id,
            expected,
        } => ApiError::Conflict {
            message: format!("Booking {booking_id} is no longer {expected}"),
        },
        PersistenceError::SessionNotFound(msg) | PersistenceError::SessionExpired(msg) => {
            ApiError::AuthenticationFailed { reason: msg }
        }
        _ => ApiError::Internal {
            message: format!("Storage error: {err}"),
        },
    }
}
