// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Serializable representation of a room row.
///
/// The `amenities` column is stored as a JSON array in the database and is
/// deserialized into a `Vec<String>` when the row is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomData {
    pub room_id: i64,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night_cents: i64,
    pub max_occupancy: i32,
    pub amenities: Vec<String>,
    pub status: String,
    pub created_at: String,
}

/// Serializable representation of a booking row.
///
/// Stay dates are ISO 8601 calendar dates (`YYYY-MM-DD`). The lifecycle
/// timestamps are set by the database when the matching transition happens
/// and are never overwritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingData {
    pub booking_id: i64,
    pub booking_code: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub room_id: i64,
    pub room_number: String,
    pub check_in: String,
    pub check_out: String,
    pub num_guests: i32,
    pub total_cost_cents: i64,
    pub status: String,
    pub created_at: String,
    pub checked_in_at: Option<String>,
    pub checked_out_at: Option<String>,
    pub cancelled_at: Option<String>,
}

/// Serializable representation of an operator account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorData {
    pub operator_id: i64,
    pub login_name: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
    pub is_disabled: bool,
    pub created_at: String,
    pub disabled_at: Option<String>,
    pub last_login_at: Option<String>,
}

/// Serializable representation of an authentication session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub operator_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Serializable representation of aggregate counts across the catalog and
/// the booking ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsData {
    pub total_rooms: i64,
    pub available_rooms: i64,
    pub total_bookings: i64,
    pub active_bookings: i64,
}
