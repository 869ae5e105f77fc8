// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room catalog mutations.
//!
//! This module contains backend-agnostic mutations for creating, updating,
//! and deleting rooms. Most mutations use Diesel DSL, with minimal
//! backend-specific helpers abstracted via the `PersistenceBackend` trait.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::{MysqlConnection, SqliteConnection};
use frontdesk_domain::Room;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;
use crate::queries::bookings::{
    count_active_bookings_for_room_mysql, count_active_bookings_for_room_sqlite,
    count_bookings_for_room_mysql, count_bookings_for_room_sqlite,
};

backend_fn! {
/// Creates a new room.
///
/// The room's amenities are serialized to a JSON array column. `created_at`
/// is assigned by the database.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room` - The validated room to persist
///
/// # Errors
///
/// Returns [`PersistenceError::DuplicateRoomNumber`] if a room with the
/// same room number already exists, or another error if the insert fails.
pub fn create_room(conn: &mut _, room: &Room) -> Result<i64, PersistenceError> {
    info!(
        "Creating room {} ({}, sleeps {})",
        room.room_number, room.room_type, room.max_occupancy
    );

    let amenities_json: String = serde_json::to_string(&room.amenities)?;

    let result: Result<usize, diesel::result::Error> = diesel::insert_into(rooms::table)
        .values((
            rooms::room_number.eq(&room.room_number),
            rooms::room_type.eq(&room.room_type),
            rooms::price_per_night_cents.eq(room.price_per_night_cents),
            rooms::max_occupancy.eq(room.max_occupancy),
            rooms::amenities.eq(&amenities_json),
            rooms::status.eq(room.status.as_str()),
        ))
        .execute(conn);

    match result {
        Ok(_) => {}
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            return Err(PersistenceError::DuplicateRoomNumber {
                room_number: room.room_number.clone(),
            });
        }
        Err(e) => return Err(PersistenceError::from(e)),
    }

    let room_id: i64 = conn.get_last_insert_rowid()?;

    info!(room_id, "Room created successfully");
    Ok(room_id)
}
}

backend_fn! {
/// Updates a room with already-merged, validated fields.
///
/// This is a full-row update of the mutable columns; the caller is
/// responsible for merging the requested changes into the current room
/// first. `room_id` and `created_at` never change.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
/// * `room` - The merged room state to persist
///
/// # Errors
///
/// Returns [`PersistenceError::RoomNotFound`] if the room does not exist,
/// [`PersistenceError::DuplicateRoomNumber`] if the new room number is
/// taken by another room, or another error if the update fails.
pub fn update_room(conn: &mut _, room_id: i64, room: &Room) -> Result<(), PersistenceError> {
    info!("Updating room ID: {}", room_id);

    let amenities_json: String = serde_json::to_string(&room.amenities)?;

    let result: Result<usize, diesel::result::Error> = diesel::update(rooms::table)
        .filter(rooms::room_id.eq(room_id))
        .set((
            rooms::room_number.eq(&room.room_number),
            rooms::room_type.eq(&room.room_type),
            rooms::price_per_night_cents.eq(room.price_per_night_cents),
            rooms::max_occupancy.eq(room.max_occupancy),
            rooms::amenities.eq(&amenities_json),
            rooms::status.eq(room.status.as_str()),
        ))
        .execute(conn);

    let rows_affected: usize = match result {
        Ok(n) => n,
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            return Err(PersistenceError::DuplicateRoomNumber {
                room_number: room.room_number.clone(),
            });
        }
        Err(e) => return Err(PersistenceError::from(e)),
    };

    if rows_affected == 0 {
        return Err(PersistenceError::RoomNotFound(format!(
            "Room with ID {room_id} not found"
        )));
    }

    debug!(room_id, "Room updated");
    Ok(())
}
}

/// Deletes a room if no bookings reference it (`SQLite` version).
///
/// Rooms with active bookings are rejected up front; rooms with only
/// historical bookings are caught by the foreign key constraint, since the
/// booking ledger is never deleted.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
///
/// # Errors
///
/// Returns an error if:
/// - The room has bookings on record
/// - The room does not exist
/// - The database operation fails
pub fn delete_room_sqlite(
    conn: &mut SqliteConnection,
    room_id: i64,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete room ID: {}", room_id);

    let active_count: i64 = count_active_bookings_for_room_sqlite(conn, room_id)?;
    if active_count > 0 {
        return Err(PersistenceError::RoomHasBookings {
            room_id,
            booking_count: active_count,
        });
    }

    let result: Result<usize, diesel::result::Error> = diesel::delete(rooms::table)
        .filter(rooms::room_id.eq(room_id))
        .execute(conn);

    match result {
        Ok(0) => Err(PersistenceError::RoomNotFound(format!(
            "Room with ID {room_id} not found"
        ))),
        Ok(_) => {
            info!("Deleted room ID: {}", room_id);
            Ok(())
        }
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => {
            let booking_count: i64 = count_bookings_for_room_sqlite(conn, room_id)?;
            Err(PersistenceError::RoomHasBookings {
                room_id,
                booking_count,
            })
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Deletes a room if no bookings reference it (`MySQL` version).
///
/// Rooms with active bookings are rejected up front; rooms with only
/// historical bookings are caught by the foreign key constraint, since the
/// booking ledger is never deleted.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
///
/// # Errors
///
/// Returns an error if:
/// - The room has bookings on record
/// - The room does not exist
/// - The database operation fails
pub fn delete_room_mysql(conn: &mut MysqlConnection, room_id: i64) -> Result<(), PersistenceError> {
    info!("Attempting to delete room ID: {}", room_id);

    let active_count: i64 = count_active_bookings_for_room_mysql(conn, room_id)?;
    if active_count > 0 {
        return Err(PersistenceError::RoomHasBookings {
            room_id,
            booking_count: active_count,
        });
    }

    let result: Result<usize, diesel::result::Error> = diesel::delete(rooms::table)
        .filter(rooms::room_id.eq(room_id))
        .execute(conn);

    match result {
        Ok(0) => Err(PersistenceError::RoomNotFound(format!(
            "Room with ID {room_id} not found"
        ))),
        Ok(_) => {
            info!("Deleted room ID: {}", room_id);
            Ok(())
        }
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => {
            let booking_count: i64 = count_bookings_for_room_mysql(conn, room_id)?;
            Err(PersistenceError::RoomHasBookings {
                room_id,
                booking_count,
            })
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
