// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking ledger mutations.
//!
//! Booking creation runs inside a database transaction so the overlap
//! re-check and the insert are atomic with respect to concurrent
//! requests for the same room. Lifecycle transitions are single
//! compare-and-set UPDATE statements; the status filter in the WHERE
//! clause is what makes a repeated or racing transition fail instead of
//! being applied twice.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::{Connection, MysqlConnection, SqliteConnection};
use frontdesk_domain::{Booking, BookingStatus, format_date, generate_booking_code};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use crate::queries::bookings::{
    ACTIVE_STATUSES, count_overlapping_bookings_mysql, count_overlapping_bookings_sqlite,
};

/// Maximum number of booking codes drawn before giving up on an insert.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Creates a new booking inside a transaction (`SQLite` version).
///
/// The room's active bookings are re-checked for an overlapping stay
/// inside the transaction; the availability search the caller ran
/// happened outside it and may be stale by the time the insert executes.
/// If the booking code collides with an existing one, a fresh code is
/// drawn (the code index is the only unique constraint on the table).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking` - The validated booking to persist
///
/// # Errors
///
/// Returns [`PersistenceError::BookingOverlap`] if the room was booked
/// concurrently, [`PersistenceError::RoomNotFound`] if the room vanished,
/// [`PersistenceError::BookingCodeExhausted`] if no unique code could be
/// drawn, or another error if the insert fails.
pub fn create_booking_sqlite(
    conn: &mut SqliteConnection,
    booking: &Booking,
) -> Result<i64, PersistenceError> {
    let check_in: String = format_date(booking.check_in);
    let check_out: String = format_date(booking.check_out);

    info!(
        "Creating booking for room {} from {} to {}",
        booking.room_number, check_in, check_out
    );

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let overlapping: i64 =
            count_overlapping_bookings_sqlite(conn, booking.room_id, &check_in, &check_out)?;
        if overlapping > 0 {
            return Err(PersistenceError::BookingOverlap {
                room_number: booking.room_number.clone(),
            });
        }

        let mut booking_code: String = booking.booking_code.clone();

        for _ in 0..MAX_CODE_ATTEMPTS {
            let result: Result<usize, diesel::result::Error> =
                diesel::insert_into(bookings::table)
                    .values((
                        bookings::booking_code.eq(&booking_code),
                        bookings::guest_name.eq(&booking.guest_name),
                        bookings::guest_email.eq(&booking.guest_email),
                        bookings::guest_phone.eq(booking.guest_phone.as_deref()),
                        bookings::room_id.eq(booking.room_id),
                        bookings::room_number.eq(&booking.room_number),
                        bookings::check_in.eq(&check_in),
                        bookings::check_out.eq(&check_out),
                        bookings::num_guests.eq(booking.num_guests),
                        bookings::total_cost_cents.eq(booking.total_cost_cents),
                        bookings::status.eq(booking.status.as_str()),
                    ))
                    .execute(conn);

            match result {
                Ok(_) => {
                    let booking_id: i64 = conn.get_last_insert_rowid()?;
                    info!(booking_id, "Booking created successfully");
                    return Ok(booking_id);
                }
                Err(diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    _,
                )) => {
                    debug!("Booking code {} already taken, drawing another", booking_code);
                    booking_code = generate_booking_code();
                }
                Err(diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::ForeignKeyViolation,
                    _,
                )) => {
                    return Err(PersistenceError::RoomNotFound(format!(
                        "Room with ID {} not found",
                        booking.room_id
                    )));
                }
                Err(e) => return Err(PersistenceError::from(e)),
            }
        }

        Err(PersistenceError::BookingCodeExhausted)
    })
}

/// Creates a new booking inside a transaction (`MySQL` version).
///
/// The room's active bookings are re-checked for an overlapping stay
/// inside the transaction; the availability search the caller ran
/// happened outside it and may be stale by the time the insert executes.
/// If the booking code collides with an existing one, a fresh code is
/// drawn (the code index is the only unique constraint on the table).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking` - The validated booking to persist
///
/// # Errors
///
/// Returns [`PersistenceError::BookingOverlap`] if the room was booked
/// concurrently, [`PersistenceError::RoomNotFound`] if the room vanished,
/// [`PersistenceError::BookingCodeExhausted`] if no unique code could be
/// drawn, or another error if the insert fails.
pub fn create_booking_mysql(
    conn: &mut MysqlConnection,
    booking: &Booking,
) -> Result<i64, PersistenceError> {
    let check_in: String = format_date(booking.check_in);
    let check_out: String = format_date(booking.check_out);

    info!(
        "Creating booking for room {} from {} to {}",
        booking.room_number, check_in, check_out
    );

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let overlapping: i64 =
            count_overlapping_bookings_mysql(conn, booking.room_id, &check_in, &check_out)?;
        if overlapping > 0 {
            return Err(PersistenceError::BookingOverlap {
                room_number: booking.room_number.clone(),
            });
        }

        let mut booking_code: String = booking.booking_code.clone();

        for _ in 0..MAX_CODE_ATTEMPTS {
            let result: Result<usize, diesel::result::Error> =
                diesel::insert_into(bookings::table)
                    .values((
                        bookings::booking_code.eq(&booking_code),
                        bookings::guest_name.eq(&booking.guest_name),
                        bookings::guest_email.eq(&booking.guest_email),
                        bookings::guest_phone.eq(booking.guest_phone.as_deref()),
                        bookings::room_id.eq(booking.room_id),
                        bookings::room_number.eq(&booking.room_number),
                        bookings::check_in.eq(&check_in),
                        bookings::check_out.eq(&check_out),
                        bookings::num_guests.eq(booking.num_guests),
                        bookings::total_cost_cents.eq(booking.total_cost_cents),
                        bookings::status.eq(booking.status.as_str()),
                    ))
                    .execute(conn);

            match result {
                Ok(_) => {
                    let booking_id: i64 = conn.get_last_insert_rowid()?;
                    info!(booking_id, "Booking created successfully");
                    return Ok(booking_id);
                }
                Err(diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    _,
                )) => {
                    debug!("Booking code {} already taken, drawing another", booking_code);
                    booking_code = generate_booking_code();
                }
                Err(diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::ForeignKeyViolation,
                    _,
                )) => {
                    return Err(PersistenceError::RoomNotFound(format!(
                        "Room with ID {} not found",
                        booking.room_id
                    )));
                }
                Err(e) => return Err(PersistenceError::from(e)),
            }
        }

        Err(PersistenceError::BookingCodeExhausted)
    })
}

backend_fn! {
/// Marks a confirmed booking as checked in.
///
/// The status filter and the update run as one statement, so a racing
/// transition on the same booking cannot be applied twice. The
/// `checked_in_at` timestamp is set exactly once, by the database.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking ID
///
/// # Errors
///
/// Returns [`PersistenceError::BookingNotFound`] if the booking does not
/// exist, or [`PersistenceError::BookingStateChanged`] if it is no longer
/// confirmed.
pub fn check_in_booking(conn: &mut _, booking_id: i64) -> Result<(), PersistenceError> {
    info!("Checking in booking ID: {}", booking_id);

    let rows_affected: usize = diesel::update(bookings::table)
        .filter(bookings::booking_id.eq(booking_id))
        .filter(bookings::status.eq(BookingStatus::Confirmed.as_str()))
        .set((
            bookings::status.eq(BookingStatus::CheckedIn.as_str()),
            bookings::checked_in_at.eq(diesel::dsl::sql::<
                diesel::sql_types::Nullable<diesel::sql_types::Text>,
            >("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        let current: Option<String> = bookings::table
            .filter(bookings::booking_id.eq(booking_id))
            .select(bookings::status)
            .first(conn)
            .optional()?;

        return match current {
            None => Err(PersistenceError::BookingNotFound(format!(
                "Booking with ID {booking_id} not found"
            ))),
            Some(_) => Err(PersistenceError::BookingStateChanged {
                booking_id,
                expected: BookingStatus::Confirmed.as_str().to_string(),
            }),
        };
    }

    Ok(())
}
}

backend_fn! {
/// Marks a checked-in booking as checked out.
///
/// The status filter and the update run as one statement, so a racing
/// transition on the same booking cannot be applied twice. The
/// `checked_out_at` timestamp is set exactly once, by the database.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking ID
///
/// # Errors
///
/// Returns [`PersistenceError::BookingNotFound`] if the booking does not
/// exist, or [`PersistenceError::BookingStateChanged`] if it is no longer
/// checked in.
pub fn check_out_booking(conn: &mut _, booking_id: i64) -> Result<(), PersistenceError> {
    info!("Checking out booking ID: {}", booking_id);

    let rows_affected: usize = diesel::update(bookings::table)
        .filter(bookings::booking_id.eq(booking_id))
        .filter(bookings::status.eq(BookingStatus::CheckedIn.as_str()))
        .set((
            bookings::status.eq(BookingStatus::CheckedOut.as_str()),
            bookings::checked_out_at.eq(diesel::dsl::sql::<
                diesel::sql_types::Nullable<diesel::sql_types::Text>,
            >("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        let current: Option<String> = bookings::table
            .filter(bookings::booking_id.eq(booking_id))
            .select(bookings::status)
            .first(conn)
            .optional()?;

        return match current {
            None => Err(PersistenceError::BookingNotFound(format!(
                "Booking with ID {booking_id} not found"
            ))),
            Some(_) => Err(PersistenceError::BookingStateChanged {
                booking_id,
                expected: BookingStatus::CheckedIn.as_str().to_string(),
            }),
        };
    }

    Ok(())
}
}

backend_fn! {
/// Cancels a booking that is still confirmed or checked in.
///
/// Cancellation releases the room for the booked window; the booking row
/// itself stays on the ledger. The `cancelled_at` timestamp is set
/// exactly once, by the database.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking ID
///
/// # Errors
///
/// Returns [`PersistenceError::BookingNotFound`] if the booking does not
/// exist, or [`PersistenceError::BookingStateChanged`] if it already
/// reached a terminal state.
pub fn cancel_booking(conn: &mut _, booking_id: i64) -> Result<(), PersistenceError> {
    info!("Cancelling booking ID: {}", booking_id);

    let rows_affected: usize = diesel::update(bookings::table)
        .filter(bookings::booking_id.eq(booking_id))
        .filter(bookings::status.eq_any(ACTIVE_STATUSES))
        .set((
            bookings::status.eq(BookingStatus::Cancelled.as_str()),
            bookings::cancelled_at.eq(diesel::dsl::sql::<
                diesel::sql_types::Nullable<diesel::sql_types::Text>,
            >("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        let current: Option<String> = bookings::table
            .filter(bookings::booking_id.eq(booking_id))
            .select(bookings::status)
            .first(conn)
            .optional()?;

        return match current {
            None => Err(PersistenceError::BookingNotFound(format!(
                "Booking with ID {booking_id} not found"
            ))),
            Some(_) => Err(PersistenceError::BookingStateChanged {
                booking_id,
                expected: "active".to_string(),
            }),
        };
    }

    Ok(())
}
}
