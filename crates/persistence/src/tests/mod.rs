// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the persistence crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod booking_tests;
mod initialization_tests;
mod operator_tests;
mod room_tests;
mod stats_tests;

use frontdesk_domain::{Booking, Room, RoomStatus, generate_booking_code, parse_date};

use crate::SqlitePersistence;

pub fn create_test_room(room_number: &str) -> Room {
    Room::new(
        String::from(room_number),
        String::from("double"),
        15000,
        2,
        vec![String::from("WiFi"), String::from("TV")],
        RoomStatus::Available,
    )
}

pub fn create_test_booking(
    room_id: i64,
    room_number: &str,
    check_in: &str,
    check_out: &str,
) -> Booking {
    Booking::new(
        generate_booking_code(),
        String::from("Alice Example"),
        String::from("alice@example.com"),
        Some(String::from("+1-555-0100")),
        room_id,
        String::from(room_number),
        create_test_date(check_in),
        create_test_date(check_out),
        2,
        60000,
    )
}

/// Parses an ISO 8601 date for test fixtures.
pub fn create_test_date(iso: &str) -> time::Date {
    parse_date(iso).expect("Valid test date")
}

/// Creates an in-memory persistence instance with one room already saved.
///
/// Returns the persistence instance and the room ID of room "101".
pub fn setup_persistence_with_room() -> (SqlitePersistence, i64) {
    let mut persistence = SqlitePersistence::new_in_memory().expect("Failed to open database");
    let room_id = persistence
        .create_room(&create_test_room("101"))
        .expect("Failed to create room");
    (persistence, room_id)
}
