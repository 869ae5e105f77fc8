// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregate count queries for the operations dashboard.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use frontdesk_domain::RoomStatus;
use tracing::debug;

use crate::data_models::StatsData;
use crate::diesel_schema::{bookings, rooms};
use crate::error::PersistenceError;
use crate::queries::bookings::ACTIVE_STATUSES;

backend_fn! {
/// Computes aggregate counts across the room catalog and the booking
/// ledger.
///
/// Cancelled and checked-out bookings count toward the booking total but
/// not toward the active count. Rooms under maintenance count toward the
/// room total but not toward the available count.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if any of the count queries fails.
pub fn get_stats(conn: &mut _) -> Result<StatsData, PersistenceError> {
    use diesel::dsl::count;

    debug!("Computing hotel statistics");

    let total_rooms: i64 = rooms::table
        .select(count(rooms::room_id))
        .first(conn)?;

    let available_rooms: i64 = rooms::table
        .filter(rooms::status.eq(RoomStatus::Available.as_str()))
        .select(count(rooms::room_id))
        .first(conn)?;

    let total_bookings: i64 = bookings::table
        .select(count(bookings::booking_id))
        .first(conn)?;

    let active_bookings: i64 = bookings::table
        .filter(bookings::status.eq_any(ACTIVE_STATUSES))
        .select(count(bookings::booking_id))
        .first(conn)?;

    Ok(StatsData {
        total_rooms,
        available_rooms,
        total_bookings,
        active_bookings,
    })
}
}
