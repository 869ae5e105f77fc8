// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use frontdesk_domain::{
    Booking, BookingStatus, DomainError, Room, RoomStatus, StayPeriod, format_date,
    generate_booking_code, parse_date, validate_guest_count, validate_guest_details,
    validate_max_occupancy, validate_price_update, validate_room_fields,
};
use frontdesk_persistence::{
    BookingData, OperatorData, PersistenceError, RoomData, SessionData, SqlitePersistence,
    StatsData,
};
use std::collections::HashSet;
use time::OffsetDateTime;

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AvailabilityResponse, BookingInfo, CreateBookingRequest, CreateBookingResponse,
    CreateFirstAdminResponse, CreateRoomRequest, DeleteRoomResponse, ListBookingsResponse,
    ListRoomsResponse, LoginRequest, LoginResponse, RoomInfo, SearchAvailabilityRequest,
    StatsResponse, UpdateRoomRequest, WhoAmIResponse,
};

/// Login name assigned to the bootstrap admin operator.
pub const BOOTSTRAP_ADMIN_LOGIN: &str = "admin";

/// Loads a booking row or reports it missing.
fn load_booking(
    persistence: &mut SqlitePersistence,
    booking_id: i64,
) -> Result<BookingData, ApiError> {
    persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking with ID {booking_id} not found"),
        })
}

/// Parses a stored booking status.
///
/// A stored status outside the closed set means the row was edited
/// outside the application, so the failure is reported as internal
/// rather than as bad input.
fn parse_stored_status(booking_id: i64, status: &str) -> Result<BookingStatus, ApiError> {
    status.parse::<BookingStatus>().map_err(|_| {
        tracing::warn!("Booking {} has unrecognized status '{}'", booking_id, status);
        ApiError::Internal {
            message: format!("Booking {booking_id} has unrecognized status '{status}'"),
        }
    })
}

// ========================================================================
// Room Catalog Handlers
// ========================================================================

/// Lists the full room catalog in catalog order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rooms(persistence: &mut SqlitePersistence) -> Result<ListRoomsResponse, ApiError> {
    let rooms: Vec<RoomData> = persistence.list_rooms().map_err(translate_persistence_error)?;

    Ok(ListRoomsResponse {
        rooms: rooms.into_iter().map(RoomInfo::from).collect(),
    })
}

/// Retrieves a single room by ID.
///
/// # Errors
///
/// Returns an error if the room does not exist or the query fails.
pub fn get_room(persistence: &mut SqlitePersistence, room_id: i64) -> Result<RoomInfo, ApiError> {
    let room: RoomData = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room with ID {room_id} not found"),
        })?;

    Ok(RoomInfo::from(room))
}

/// Creates a new room in the catalog.
///
/// Only Admin actors may create rooms. New rooms start with status
/// "available".
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The create room request
/// * `authenticated_actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - A field fails validation
/// - The room number is already in use
/// - Database operations fail
pub fn create_room(
    persistence: &mut SqlitePersistence,
    request: CreateRoomRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<RoomInfo, ApiError> {
    AuthorizationService::authorize_create_room(authenticated_actor)?;

    let room: Room = Room::new(
        request.room_number.trim().to_string(),
        request.room_type.trim().to_string(),
        request.price_per_night_cents,
        request.max_occupancy,
        request.amenities,
        RoomStatus::Available,
    );
    validate_room_fields(&room).map_err(translate_domain_error)?;

    let room_id: i64 = persistence
        .create_room(&room)
        .map_err(translate_persistence_error)?;

    let created: RoomData = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Room not found after creation"),
        })?;

    Ok(RoomInfo::from(created))
}

/// Updates an existing room from an explicit per-field patch.
///
/// Only Admin actors may update rooms. A `None` field is left untouched
/// and a `Some` field is written: `Some(0)` sets the nightly price to
/// zero and `Some(vec![])` clears the amenity list. A changed room
/// number is re-checked for uniqueness.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `room_id` - The room to update
/// * `request` - The update room request
/// * `authenticated_actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The room does not exist
/// - A patched field fails validation
/// - The new room number is already in use
/// - Database operations fail
pub fn update_room(
    persistence: &mut SqlitePersistence,
    room_id: i64,
    request: UpdateRoomRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<RoomInfo, ApiError> {
    AuthorizationService::authorize_update_room(authenticated_actor)?;

    let existing: RoomData = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room with ID {room_id} not found"),
        })?;

    // Per-field validation happens before the merge so nothing is
    // written on a rejected patch. Zero is a valid updated price.
    if let Some(price) = request.price_per_night_cents {
        validate_price_update(price).map_err(translate_domain_error)?;
    }
    if let Some(occupancy) = request.max_occupancy {
        validate_max_occupancy(occupancy).map_err(translate_domain_error)?;
    }

    // Merge the patch over the stored row
    let status: RoomStatus = request
        .status
        .as_deref()
        .unwrap_or(existing.status.as_str())
        .parse()
        .map_err(translate_domain_error)?;
    let room_number: String = request
        .room_number
        .map_or(existing.room_number, |number| number.trim().to_string());
    let room_type: String = request
        .room_type
        .map_or(existing.room_type, |kind| kind.trim().to_string());
    let price_per_night_cents: i64 = request
        .price_per_night_cents
        .unwrap_or(existing.price_per_night_cents);
    let max_occupancy: i32 = request.max_occupancy.unwrap_or(existing.max_occupancy);
    let amenities: Vec<String> = request.amenities.unwrap_or(existing.amenities);

    // The merged labels must still be present
    if room_number.is_empty() {
        return Err(translate_domain_error(DomainError::InvalidRoomNumber(
            String::from("Room number cannot be empty"),
        )));
    }
    if room_type.is_empty() {
        return Err(translate_domain_error(DomainError::InvalidRoomType(
            String::from("Room type cannot be empty"),
        )));
    }

    let merged: Room = Room::with_id(
        room_id,
        room_number,
        room_type,
        price_per_night_cents,
        max_occupancy,
        amenities,
        status,
    );

    persistence
        .update_room(room_id, &merged)
        .map_err(translate_persistence_error)?;

    let updated: RoomData = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Room not found after update"),
        })?;

    Ok(RoomInfo::from(updated))
}

/// Deletes a room from the catalog.
///
/// Only Admin actors may delete rooms. Deletion is refused while any
/// booking references the room; bookings are never deleted, so a room
/// with history stays on record.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The room does not exist
/// - The room has bookings on record
/// - Database operations fail
pub fn delete_room(
    persistence: &mut SqlitePersistence,
    room_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<DeleteRoomResponse, ApiError> {
    AuthorizationService::authorize_delete_room(authenticated_actor)?;

    persistence
        .delete_room(room_id)
        .map_err(translate_persistence_error)?;

    Ok(DeleteRoomResponse {
        room_id,
        message: format!("Room {room_id} deleted"),
    })
}

// ========================================================================
// Availability Search
// ========================================================================

/// Finds the rooms free for a requested stay and party size.
///
/// A room qualifies when its operational status is "available", it
/// sleeps the whole party, and no active booking overlaps the requested
/// half-open window. An existing booking checking out on the requested
/// check-in date is a same-day turnover, not a conflict. Results keep
/// catalog order.
///
/// This is a read-only search: it reserves nothing, and the same overlap
/// predicate is re-run inside the booking insert transaction.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The search request
///
/// # Errors
///
/// Returns an error if:
/// - A date is malformed or the window is not strictly ordered
/// - The check-in date lies in the past
/// - The guest count is not positive
/// - Database operations fail
pub fn search_availability(
    persistence: &mut SqlitePersistence,
    request: &SearchAvailabilityRequest,
) -> Result<AvailabilityResponse, ApiError> {
    // Validate the requested window before touching storage
    let check_in: time::Date = parse_date(&request.check_in).map_err(translate_domain_error)?;
    let check_out: time::Date = parse_date(&request.check_out).map_err(translate_domain_error)?;
    let stay: StayPeriod = StayPeriod::new(check_in, check_out).map_err(translate_domain_error)?;
    stay.validate_not_in_past(OffsetDateTime::now_utc().date())
        .map_err(translate_domain_error)?;

    if request.guests <= 0 {
        return Err(translate_domain_error(DomainError::InvalidGuestCount {
            guests: request.guests,
        }));
    }

    let rooms: Vec<RoomData> = persistence.list_rooms().map_err(translate_persistence_error)?;

    // Rooms held by an active booking overlapping the window are out.
    // The window is re-serialized so the stored-text comparison always
    // sees canonical dates.
    let overlapping: Vec<BookingData> = persistence
        .list_bookings_overlapping(&format_date(stay.check_in()), &format_date(stay.check_out()))
        .map_err(translate_persistence_error)?;
    let booked_room_ids: HashSet<i64> = overlapping.iter().map(|booking| booking.room_id).collect();

    let available: Vec<RoomInfo> = rooms
        .into_iter()
        .filter(|room| {
            room.status == RoomStatus::Available.as_str()
                && room.max_occupancy >= request.guests
                && !booked_room_ids.contains(&room.room_id)
        })
        .map(RoomInfo::from)
        .collect();

    Ok(AvailabilityResponse {
        check_in: format_date(stay.check_in()),
        check_out: format_date(stay.check_out()),
        nights: stay.nights(),
        rooms: available,
    })
}

// ========================================================================
// Booking Ledger Handlers
// ========================================================================

/// Creates a new booking.
///
/// This is the public reservation path; no authentication is required.
/// All validation happens before any write: guest details, date
/// ordering, room existence and operational status, and party size
/// against the room's capacity. The total cost is `nights *
/// price_per_night_cents`, computed here once and never recomputed.
///
/// The insert itself re-checks the room's active bookings for an
/// overlapping stay inside a single database transaction, so of two
/// concurrent requests for the same window exactly one succeeds and the
/// other fails with a conflict.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The create booking request
///
/// # Errors
///
/// Returns an error if:
/// - Guest details are missing or malformed
/// - The dates are malformed, unordered, or start in the past
/// - The room does not exist or is not available
/// - The party does not fit the room
/// - The stay overlaps an active booking on the room
/// - Database operations fail
pub fn create_booking(
    persistence: &mut SqlitePersistence,
    request: CreateBookingRequest,
) -> Result<CreateBookingResponse, ApiError> {
    validate_guest_details(&request.guest_name, &request.guest_email)
        .map_err(translate_domain_error)?;

    let check_in: time::Date = parse_date(&request.check_in).map_err(translate_domain_error)?;
    let check_out: time::Date = parse_date(&request.check_out).map_err(translate_domain_error)?;
    let stay: StayPeriod = StayPeriod::new(check_in, check_out).map_err(translate_domain_error)?;
    stay.validate_not_in_past(OffsetDateTime::now_utc().date())
        .map_err(translate_domain_error)?;

    let room: RoomData = persistence
        .get_room(request.room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room with ID {} not found", request.room_id),
        })?;

    // A room pulled for maintenance takes no reservations regardless of
    // overlap
    if room.status != RoomStatus::Available.as_str() {
        return Err(ApiError::Conflict {
            message: format!("Room {} is not available for booking", room.room_number),
        });
    }

    validate_guest_count(request.num_guests, room.max_occupancy).map_err(translate_domain_error)?;

    let total_cost_cents: i64 = stay.total_cost_cents(room.price_per_night_cents);

    let booking: Booking = Booking::new(
        generate_booking_code(),
        request.guest_name.trim().to_string(),
        request.guest_email.trim().to_string(),
        request.guest_phone,
        request.room_id,
        room.room_number,
        stay.check_in(),
        stay.check_out(),
        request.num_guests,
        total_cost_cents,
    );

    let booking_id: i64 = persistence.create_booking(&booking).map_err(|e| {
        if matches!(e, PersistenceError::BookingOverlap { .. }) {
            tracing::warn!(
                "Overlapping booking rejected at commit for room {}",
                request.room_id
            );
        }
        translate_persistence_error(e)
    })?;

    let created: BookingData = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Booking not found after creation"),
        })?;

    Ok(CreateBookingResponse {
        booking: BookingInfo::from(created),
        nights: stay.nights(),
    })
}

/// Lists the booking ledger, newest first.
///
/// Requires a valid session; any operator role may view the ledger.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_bookings(
    persistence: &mut SqlitePersistence,
    _authenticated_actor: &AuthenticatedActor,
) -> Result<ListBookingsResponse, ApiError> {
    let bookings: Vec<BookingData> = persistence
        .list_bookings()
        .map_err(translate_persistence_error)?;

    Ok(ListBookingsResponse {
        bookings: bookings.into_iter().map(BookingInfo::from).collect(),
    })
}

/// Retrieves a single booking by ID.
///
/// Requires a valid session; any operator role may view a booking.
///
/// # Errors
///
/// Returns an error if the booking does not exist or the query fails.
pub fn get_booking(
    persistence: &mut SqlitePersistence,
    booking_id: i64,
    _authenticated_actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    let booking: BookingData = load_booking(persistence, booking_id)?;

    Ok(BookingInfo::from(booking))
}

/// Checks a guest in.
///
/// Requires a valid session; any operator role may check guests in.
/// The booking must currently be confirmed.
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The booking is not confirmed
/// - Database operations fail
pub fn check_in_booking(
    persistence: &mut SqlitePersistence,
    booking_id: i64,
    _authenticated_actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    let booking: BookingData = load_booking(persistence, booking_id)?;

    let current: BookingStatus = parse_stored_status(booking_id, &booking.status)?;
    current
        .validate_transition(BookingStatus::CheckedIn)
        .map_err(translate_domain_error)?;

    // The write compares-and-swaps on the stored status, so a
    // transition applied concurrently surfaces as a conflict here
    // rather than applying twice
    persistence
        .check_in_booking(booking_id)
        .map_err(translate_persistence_error)?;

    let updated: BookingData = load_booking(persistence, booking_id)?;
    Ok(BookingInfo::from(updated))
}

/// Checks a guest out.
///
/// Requires a valid session; any operator role may check guests out.
/// The booking must currently be checked in; checked-out is terminal.
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The booking is not checked in
/// - Database operations fail
pub fn check_out_booking(
    persistence: &mut SqlitePersistence,
    booking_id: i64,
    _authenticated_actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    let booking: BookingData = load_booking(persistence, booking_id)?;

    let current: BookingStatus = parse_stored_status(booking_id, &booking.status)?;
    current
        .validate_transition(BookingStatus::CheckedOut)
        .map_err(translate_domain_error)?;

    persistence
        .check_out_booking(booking_id)
        .map_err(translate_persistence_error)?;

    let updated: BookingData = load_booking(persistence, booking_id)?;
    Ok(BookingInfo::from(updated))
}

/// Cancels a booking.
///
/// Only Admin actors may cancel. The booking must still be confirmed or
/// checked in; cancellation is a status transition, never a deletion,
/// and the row stays on record.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The booking does not exist
/// - The booking already reached a terminal state
/// - Database operations fail
pub fn cancel_booking(
    persistence: &mut SqlitePersistence,
    booking_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    AuthorizationService::authorize_cancel_booking(authenticated_actor)?;

    let booking: BookingData = load_booking(persistence, booking_id)?;

    let current: BookingStatus = parse_stored_status(booking_id, &booking.status)?;
    current
        .validate_transition(BookingStatus::Cancelled)
        .map_err(translate_domain_error)?;

    persistence
        .cancel_booking(booking_id)
        .map_err(translate_persistence_error)?;

    let updated: BookingData = load_booking(persistence, booking_id)?;
    Ok(BookingInfo::from(updated))
}

// ========================================================================
// Statistics
// ========================================================================

/// Computes aggregate catalog and ledger counts.
///
/// Requires a valid session; any operator role may view stats.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_stats(
    persistence: &mut SqlitePersistence,
    _authenticated_actor: &AuthenticatedActor,
) -> Result<StatsResponse, ApiError> {
    let stats: StatsData = persistence.get_stats().map_err(translate_persistence_error)?;

    Ok(StatsResponse::from(stats))
}

// ========================================================================
// Authentication Handlers
// ========================================================================

/// Authenticates an operator and creates a session.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The login request
///
/// # Returns
///
/// * `Ok(LoginResponse)` on success with session token
/// * `Err(ApiError)` if authentication fails
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not exist or the password is wrong
/// - The operator is disabled
/// - Database operations fail
pub fn login(
    persistence: &mut SqlitePersistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, _authenticated_actor, operator): (
        String,
        AuthenticatedActor,
        OperatorData,
    ) = AuthenticationService::login(persistence, &request.login_name, &request.password)?;

    // Get session expiration from the session we just created
    let session: Option<SessionData> = persistence
        .get_session_by_token(&session_token)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to retrieve session: {e}"),
        })?;

    let expires_at: String = session
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Session not found after creation"),
        })?
        .expires_at;

    Ok(LoginResponse {
        session_token,
        login_name: operator.login_name,
        display_name: operator.display_name,
        role: operator.role,
        expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `session_token` - The session token to delete
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut SqlitePersistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Returns the operator behind the current session.
#[must_use]
pub fn whoami(operator: &OperatorData) -> WhoAmIResponse {
    WhoAmIResponse {
        login_name: operator.login_name.clone(),
        display_name: operator.display_name.clone(),
        role: operator.role.clone(),
        is_disabled: operator.is_disabled,
    }
}

/// Creates the first admin operator during bootstrap.
///
/// This function only succeeds while no operators exist. The server
/// calls it at startup when a bootstrap admin password is configured;
/// once any operator account exists it refuses, so a stale flag cannot
/// overwrite a live deployment.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `password` - The plain-text password for the new admin
///
/// # Returns
///
/// * `Ok(CreateFirstAdminResponse)` on success
/// * `Err(ApiError)` if operators already exist or creation fails
///
/// # Errors
///
/// Returns an error if:
/// - Operators already exist (not in bootstrap mode)
/// - The password is blank
/// - Database operations fail
pub fn create_first_admin(
    persistence: &mut SqlitePersistence,
    password: &str,
) -> Result<CreateFirstAdminResponse, ApiError> {
    // Check if we're in bootstrap mode
    let operator_count: i64 = persistence
        .count_operators()
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to count operators: {e}"),
        })?;

    if operator_count > 0 {
        return Err(ApiError::Unauthorized {
            action: String::from("create_first_admin"),
            required_role: String::from("Bootstrap mode (no operators exist)"),
        });
    }

    if password.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("admin_password"),
            message: String::from("Bootstrap admin password cannot be empty"),
        });
    }

    let operator_id: i64 = persistence
        .create_operator(BOOTSTRAP_ADMIN_LOGIN, "Administrator", password, "Admin")
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to create first admin: {e}"),
        })?;

    Ok(CreateFirstAdminResponse {
        operator_id,
        login_name: String::from(BOOTSTRAP_ADMIN_LOGIN),
        message: String::from("First admin operator created successfully"),
    })
}
