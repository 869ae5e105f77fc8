// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use frontdesk_persistence::{BookingData, RoomData, StatsData};

/// API request to create a new room.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateRoomRequest {
    /// The human-facing room number (unique among existing rooms).
    pub room_number: String,
    /// The room type tag (e.g. "single", "double", "suite").
    pub room_type: String,
    /// The nightly price in cents. Must be greater than 0.
    pub price_per_night_cents: i64,
    /// The maximum number of guests the room sleeps.
    pub max_occupancy: i32,
    /// Amenity tags in display order. May be empty.
    pub amenities: Vec<String>,
}

/// API request to update an existing room.
///
/// Every field is optional: `None` leaves the stored value untouched and
/// `Some` writes it, including `Some(0)` for the price and
/// `Some(vec![])` to clear the amenity list. There is no way to express
/// "skip" with a present value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateRoomRequest {
    /// New room number, re-checked for uniqueness when present.
    pub room_number: Option<String>,
    /// New room type tag.
    pub room_type: Option<String>,
    /// New nightly price in cents. Zero is applied; negative is rejected.
    pub price_per_night_cents: Option<i64>,
    /// New maximum occupancy. Must be greater than 0 when present.
    pub max_occupancy: Option<i32>,
    /// Replacement amenity list. Replaces the stored list wholesale.
    pub amenities: Option<Vec<String>>,
    /// New operational status ("available" or "maintenance").
    pub status: Option<String>,
}

/// Room information as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoomInfo {
    /// The canonical numeric identifier.
    pub room_id: i64,
    /// The human-facing room number.
    pub room_number: String,
    /// The room type tag.
    pub room_type: String,
    /// The nightly price in cents.
    pub price_per_night_cents: i64,
    /// The maximum number of guests the room sleeps.
    pub max_occupancy: i32,
    /// Amenity tags in display order.
    pub amenities: Vec<String>,
    /// The operational status ("available" or "maintenance").
    pub status: String,
    /// When the room was created (ISO 8601).
    pub created_at: String,
}

impl From<RoomData> for RoomInfo {
    fn from(data: RoomData) -> Self {
        Self {
            room_id: data.room_id,
            room_number: data.room_number,
            room_type: data.room_type,
            price_per_night_cents: data.price_per_night_cents,
            max_occupancy: data.max_occupancy,
            amenities: data.amenities,
            status: data.status,
            created_at: data.created_at,
        }
    }
}

/// API response listing the full room catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListRoomsResponse {
    /// All rooms in catalog order (ascending room number).
    pub rooms: Vec<RoomInfo>,
}

/// API response for a successful room deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteRoomResponse {
    /// The identifier of the deleted room.
    pub room_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to search for rooms available over a stay.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchAvailabilityRequest {
    /// Requested check-in date (`YYYY-MM-DD`).
    pub check_in: String,
    /// Requested check-out date (`YYYY-MM-DD`), exclusive.
    pub check_out: String,
    /// Size of the party. Must be greater than 0.
    pub guests: i32,
}

/// API response listing the rooms free for a requested stay.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityResponse {
    /// The requested check-in date (`YYYY-MM-DD`).
    pub check_in: String,
    /// The requested check-out date (`YYYY-MM-DD`).
    pub check_out: String,
    /// Number of nights the stay covers.
    pub nights: i64,
    /// Rooms free for the whole stay, in catalog order.
    pub rooms: Vec<RoomInfo>,
}

/// API request to create a new booking.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingRequest {
    /// Name of the guest the reservation is held for.
    pub guest_name: String,
    /// Contact email for the guest.
    pub guest_email: String,
    /// Optional contact phone number.
    pub guest_phone: Option<String>,
    /// The room to book.
    pub room_id: i64,
    /// Check-in date (`YYYY-MM-DD`).
    pub check_in: String,
    /// Check-out date (`YYYY-MM-DD`), exclusive.
    pub check_out: String,
    /// Size of the party. Must fit the room.
    pub num_guests: i32,
}

/// Booking information as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The canonical numeric identifier.
    pub booking_id: i64,
    /// The human-facing booking code (`BKG-XXXXXXXXX`).
    pub booking_code: String,
    /// Name of the guest the reservation is held for.
    pub guest_name: String,
    /// Contact email for the guest.
    pub guest_email: String,
    /// Optional contact phone number.
    pub guest_phone: Option<String>,
    /// The booked room's identifier.
    pub room_id: i64,
    /// The booked room's number at booking time.
    pub room_number: String,
    /// Check-in date (`YYYY-MM-DD`).
    pub check_in: String,
    /// Check-out date (`YYYY-MM-DD`), exclusive.
    pub check_out: String,
    /// Size of the party.
    pub num_guests: i32,
    /// Total cost of the stay in cents, fixed at creation.
    pub total_cost_cents: i64,
    /// Lifecycle status ("confirmed", "checked-in", "checked-out",
    /// "cancelled").
    pub status: String,
    /// When the booking was created (ISO 8601).
    pub created_at: String,
    /// When the guest checked in, if they have.
    pub checked_in_at: Option<String>,
    /// When the guest checked out, if they have.
    pub checked_out_at: Option<String>,
    /// When the booking was cancelled, if it was.
    pub cancelled_at: Option<String>,
}

impl From<BookingData> for BookingInfo {
    fn from(data: BookingData) -> Self {
        Self {
            booking_id: data.booking_id,
            booking_code: data.booking_code,
            guest_name: data.guest_name,
            guest_email: data.guest_email,
            guest_phone: data.guest_phone,
            room_id: data.room_id,
            room_number: data.room_number,
            check_in: data.check_in,
            check_out: data.check_out,
            num_guests: data.num_guests,
            total_cost_cents: data.total_cost_cents,
            status: data.status,
            created_at: data.created_at,
            checked_in_at: data.checked_in_at,
            checked_out_at: data.checked_out_at,
            cancelled_at: data.cancelled_at,
        }
    }
}

/// API response for a successful booking creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingResponse {
    /// The created booking.
    pub booking: BookingInfo,
    /// Number of nights the stay covers.
    pub nights: i64,
}

/// API response listing the booking ledger.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListBookingsResponse {
    /// All bookings, newest first.
    pub bookings: Vec<BookingInfo>,
}

/// API response with aggregate catalog and ledger counts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatsResponse {
    /// Total number of rooms in the catalog.
    pub total_rooms: i64,
    /// Rooms whose operational status is "available".
    pub available_rooms: i64,
    /// Total number of bookings ever taken.
    pub total_bookings: i64,
    /// Bookings that still hold a room ("confirmed" or "checked-in").
    pub active_bookings: i64,
}

impl From<StatsData> for StatsResponse {
    fn from(data: StatsData) -> Self {
        Self {
            total_rooms: data.total_rooms,
            available_rooms: data.available_rooms,
            total_bookings: data.total_bookings,
            active_bookings: data.active_bookings,
        }
    }
}

/// API request to log in as an operator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// The operator login name (case-insensitive).
    pub login_name: String,
    /// The plain-text password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The opaque session token to present on subsequent requests.
    pub session_token: String,
    /// The operator's login name.
    pub login_name: String,
    /// The operator's display name.
    pub display_name: String,
    /// The operator's role ("Admin" or "Staff").
    pub role: String,
    /// When the session expires (ISO 8601).
    pub expires_at: String,
}

/// API response describing the operator behind the current session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WhoAmIResponse {
    /// The operator's login name.
    pub login_name: String,
    /// The operator's display name.
    pub display_name: String,
    /// The operator's role ("Admin" or "Staff").
    pub role: String,
    /// Whether the operator account is disabled.
    pub is_disabled: bool,
}

/// API response for a successful first-admin bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateFirstAdminResponse {
    /// The created operator's identifier.
    pub operator_id: i64,
    /// The created operator's login name.
    pub login_name: String,
    /// A success message.
    pub message: String,
}
