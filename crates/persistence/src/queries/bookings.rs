// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking ledger queries.
//!
//! This module contains backend-agnostic queries for retrieving bookings
//! and for the overlap checks the availability search and the booking
//! creation path both rely on. All queries use Diesel DSL and work across
//! all supported database backends.
//!
//! Stay dates are stored as ISO 8601 text (`YYYY-MM-DD`), so comparing the
//! columns lexicographically is the same as comparing the dates.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use frontdesk_domain::BookingStatus;
use tracing::debug;

use crate::data_models::BookingData;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Statuses that keep a booking occupying its room.
///
/// Checked-out and cancelled bookings stay on the ledger but no longer
/// block the room.
pub(crate) const ACTIVE_STATUSES: [&str; 2] = [
    BookingStatus::Confirmed.as_str(),
    BookingStatus::CheckedIn.as_str(),
];

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
struct BookingRow {
    booking_id: i64,
    booking_code: String,
    guest_name: String,
    guest_email: String,
    guest_phone: Option<String>,
    room_id: i64,
    room_number: String,
    check_in: String,
    check_out: String,
    num_guests: i32,
    total_cost_cents: i64,
    status: String,
    created_at: String,
    checked_in_at: Option<String>,
    checked_out_at: Option<String>,
    cancelled_at: Option<String>,
}

fn booking_from_row(row: BookingRow) -> BookingData {
    let BookingRow {
        booking_id,
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
        created_at,
        checked_in_at,
        checked_out_at,
        cancelled_at,
    } = row;

    BookingData {
        booking_id,
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
        created_at,
        checked_in_at,
        checked_out_at,
        cancelled_at,
    }
}

backend_fn! {
/// Retrieves a booking by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the booking is not found.
pub fn get_booking(conn: &mut _, booking_id: i64) -> Result<Option<BookingData>, PersistenceError> {
    debug!("Looking up booking by ID: {}", booking_id);

    let result: Result<BookingRow, diesel::result::Error> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(booking_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a booking by its booking code.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_code` - The booking code (e.g. `BKG-A1B2C3D4E`)
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the booking is not found.
pub fn get_booking_by_code(
    conn: &mut _,
    booking_code: &str,
) -> Result<Option<BookingData>, PersistenceError> {
    debug!("Looking up booking by code: {}", booking_code);

    let result: Result<BookingRow, diesel::result::Error> = bookings::table
        .filter(bookings::booking_code.eq(booking_code))
        .select(BookingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(booking_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all bookings, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_bookings(conn: &mut _) -> Result<Vec<BookingData>, PersistenceError> {
    debug!("Listing all bookings");

    let rows: Vec<BookingRow> = bookings::table
        .select(BookingRow::as_select())
        .order_by(bookings::booking_id.desc())
        .load(conn)?;

    Ok(rows.into_iter().map(booking_from_row).collect())
}
}

backend_fn! {
/// Lists active bookings whose stay overlaps the given window.
///
/// Stays are half-open intervals: a booking conflicts with the window
/// when its `check_in` is before the window's check-out AND its
/// `check_out` is after the window's check-in. Back-to-back stays where
/// one ends on the day the other begins do not overlap.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `check_in` - Window start, ISO 8601 (`YYYY-MM-DD`)
/// * `check_out` - Window end, ISO 8601 (`YYYY-MM-DD`)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_bookings_overlapping(
    conn: &mut _,
    check_in: &str,
    check_out: &str,
) -> Result<Vec<BookingData>, PersistenceError> {
    debug!(
        "Listing active bookings overlapping {} to {}",
        check_in, check_out
    );

    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::status.eq_any(ACTIVE_STATUSES))
        .filter(bookings::check_in.lt(check_out))
        .filter(bookings::check_out.gt(check_in))
        .select(BookingRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(booking_from_row).collect())
}
}

backend_fn! {
/// Counts active bookings for a room whose stay overlaps the given window.
///
/// This is the overlap re-check run inside the booking creation
/// transaction, after the availability search has already happened
/// outside it.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
/// * `check_in` - Window start, ISO 8601 (`YYYY-MM-DD`)
/// * `check_out` - Window end, ISO 8601 (`YYYY-MM-DD`)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_overlapping_bookings(
    conn: &mut _,
    room_id: i64,
    check_in: &str,
    check_out: &str,
) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    debug!(
        "Counting overlapping bookings for room ID {} between {} and {}",
        room_id, check_in, check_out
    );

    let count: i64 = bookings::table
        .filter(bookings::room_id.eq(room_id))
        .filter(bookings::status.eq_any(ACTIVE_STATUSES))
        .filter(bookings::check_in.lt(check_out))
        .filter(bookings::check_out.gt(check_in))
        .select(count(bookings::booking_id))
        .first(conn)?;

    Ok(count)
}
}

backend_fn! {
/// Counts active bookings that reference a room.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID to check
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_active_bookings_for_room(
    conn: &mut _,
    room_id: i64,
) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    debug!("Counting active bookings for room ID: {}", room_id);

    let count: i64 = bookings::table
        .filter(bookings::room_id.eq(room_id))
        .filter(bookings::status.eq_any(ACTIVE_STATUSES))
        .select(count(bookings::booking_id))
        .first(conn)?;

    Ok(count)
}
}

backend_fn! {
/// Counts all bookings that reference a room, regardless of status.
///
/// The booking ledger is append-only, so a room with any booking history
/// cannot be deleted without orphaning that history.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID to check
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_bookings_for_room(conn: &mut _, room_id: i64) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    debug!("Counting bookings for room ID: {}", room_id);

    let count: i64 = bookings::table
        .filter(bookings::room_id.eq(room_id))
        .select(count(bookings::booking_id))
        .first(conn)?;

    Ok(count)
}
}
