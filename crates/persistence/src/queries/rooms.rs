// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room catalog queries.
//!
//! This module contains backend-agnostic queries for retrieving rooms.
//! All queries use Diesel DSL and work across all supported database
//! backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::RoomData;
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;

/// Diesel Queryable struct for room rows.
///
/// `amenities` is the raw JSON text column; it is deserialized when the
/// row is converted into `RoomData`.
#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
struct RoomRow {
    room_id: i64,
    room_number: String,
    room_type: String,
    price_per_night_cents: i64,
    max_occupancy: i32,
    amenities: String,
    status: String,
    created_at: String,
}

/// Converts a raw room row into `RoomData`, deserializing the amenities
/// JSON column.
fn room_from_row(row: RoomRow) -> Result<RoomData, PersistenceError> {
    let amenities: Vec<String> = serde_json::from_str(&row.amenities)?;

    Ok(RoomData {
        room_id: row.room_id,
        room_number: row.room_number,
        room_type: row.room_type,
        price_per_night_cents: row.price_per_night_cents,
        max_occupancy: row.max_occupancy,
        amenities,
        status: row.status,
        created_at: row.created_at,
    })
}

backend_fn! {
/// Retrieves a room by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room(conn: &mut _, room_id: i64) -> Result<Option<RoomData>, PersistenceError> {
    debug!("Looking up room by ID: {}", room_id);

    let result: Result<RoomRow, diesel::result::Error> = rooms::table
        .filter(rooms::room_id.eq(room_id))
        .select(RoomRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(room_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a room by its room number.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_number` - The room number to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room_by_number(
    conn: &mut _,
    room_number: &str,
) -> Result<Option<RoomData>, PersistenceError> {
    debug!("Looking up room by room_number: {}", room_number);

    let result: Result<RoomRow, diesel::result::Error> = rooms::table
        .filter(rooms::room_number.eq(room_number))
        .select(RoomRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(room_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all rooms in catalog order (ascending room number).
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rooms(conn: &mut _) -> Result<Vec<RoomData>, PersistenceError> {
    debug!("Listing all rooms");

    let rows: Vec<RoomRow> = rooms::table
        .select(RoomRow::as_select())
        .order_by(rooms::room_number.asc())
        .load(conn)?;

    rows.into_iter().map(room_from_row).collect()
}
}
