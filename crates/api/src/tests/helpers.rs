// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use frontdesk_domain::format_date;
use frontdesk_persistence::{OperatorData, SqlitePersistence};

use crate::{
    AuthenticatedActor, BookingInfo, CreateBookingRequest, CreateRoomRequest, Role, RoomInfo,
    create_booking, create_room,
};

pub fn setup_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("ADMIN"), Role::Admin)
}

pub fn create_test_staff() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("FRONTDESK"), Role::Staff)
}

pub fn create_test_staff_operator() -> OperatorData {
    OperatorData {
        operator_id: 2,
        login_name: String::from("FRONTDESK"),
        display_name: String::from("Front Desk"),
        password_hash: String::from("$2b$12$test-hash"),
        role: String::from("Staff"),
        is_disabled: false,
        created_at: String::from("2026-01-01T00:00:00Z"),
        disabled_at: None,
        last_login_at: Some(String::from("2026-01-01T00:00:00Z")),
    }
}

/// Formats the date `days_from_now` days away as `YYYY-MM-DD`.
///
/// Booking handlers reject stays that start in the past, so tests pin
/// stay windows relative to the day they run.
pub fn future_date(days_from_now: i64) -> String {
    format_date(time::OffsetDateTime::now_utc().date() + time::Duration::days(days_from_now))
}

pub fn create_room_request(room_number: &str) -> CreateRoomRequest {
    CreateRoomRequest {
        room_number: String::from(room_number),
        room_type: String::from("double"),
        price_per_night_cents: 15000,
        max_occupancy: 2,
        amenities: vec![String::from("WiFi"), String::from("TV")],
    }
}

pub fn seed_room(persistence: &mut SqlitePersistence, room_number: &str) -> RoomInfo {
    create_room(
        persistence,
        create_room_request(room_number),
        &create_test_admin(),
    )
    .expect("Failed to create test room")
}

pub fn create_booking_request(
    room_id: i64,
    check_in: &str,
    check_out: &str,
) -> CreateBookingRequest {
    CreateBookingRequest {
        guest_name: String::from("Alice Example"),
        guest_email: String::from("alice@example.com"),
        guest_phone: Some(String::from("+1-555-0100")),
        room_id,
        check_in: String::from(check_in),
        check_out: String::from(check_out),
        num_guests: 2,
    }
}

pub fn seed_booking(
    persistence: &mut SqlitePersistence,
    room_id: i64,
    check_in: &str,
    check_out: &str,
) -> BookingInfo {
    create_booking(
        persistence,
        create_booking_request(room_id, check_in, check_out),
    )
    .expect("Failed to create test booking")
    .booking
}
