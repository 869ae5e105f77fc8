// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for room catalog persistence operations.

use frontdesk_domain::{Room, RoomStatus};

use crate::tests::{create_test_booking, create_test_room, setup_persistence_with_room};
use crate::{PersistenceError, SqlitePersistence};

#[test]
fn test_create_room_assigns_id_and_round_trips() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let room_id = persistence.create_room(&create_test_room("101")).unwrap();
    assert!(room_id > 0, "Room ID should be a positive rowid");

    let room = persistence.get_room(room_id).unwrap().unwrap();
    assert_eq!(room.room_id, room_id);
    assert_eq!(room.room_number, "101");
    assert_eq!(room.room_type, "double");
    assert_eq!(room.price_per_night_cents, 15000);
    assert_eq!(room.max_occupancy, 2);
    assert_eq!(room.amenities, vec!["WiFi", "TV"]);
    assert_eq!(room.status, "available");
    assert!(!room.created_at.is_empty(), "created_at is set by the database");
}

#[test]
fn test_create_room_with_duplicate_number_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    persistence.create_room(&create_test_room("101")).unwrap();

    let result = persistence.create_room(&create_test_room("101"));

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::DuplicateRoomNumber { room_number } => {
            assert_eq!(room_number, "101");
        }
        other => panic!("Expected DuplicateRoomNumber error, got: {other:?}"),
    }
}

#[test]
fn test_get_room_returns_none_for_unknown_id() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.get_room(999).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_get_room_by_number() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let room = persistence.get_room_by_number("101").unwrap().unwrap();
    assert_eq!(room.room_id, room_id);

    let missing = persistence.get_room_by_number("999").unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_list_rooms_sorted_by_room_number() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    // Insert out of order; the catalog is always listed sorted
    persistence.create_room(&create_test_room("201")).unwrap();
    persistence.create_room(&create_test_room("101")).unwrap();
    persistence.create_room(&create_test_room("102")).unwrap();

    let rooms = persistence.list_rooms().unwrap();
    let numbers: Vec<&str> = rooms.iter().map(|r| r.room_number.as_str()).collect();

    assert_eq!(numbers, vec!["101", "102", "201"]);
}

#[test]
fn test_update_room_persists_merged_fields() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let updated = Room::with_id(
        room_id,
        String::from("101"),
        String::from("suite"),
        25000,
        4,
        vec![
            String::from("WiFi"),
            String::from("Mini Bar"),
            String::from("Ocean View"),
        ],
        RoomStatus::Maintenance,
    );

    persistence.update_room(room_id, &updated).unwrap();

    let room = persistence.get_room(room_id).unwrap().unwrap();
    assert_eq!(room.room_type, "suite");
    assert_eq!(room.price_per_night_cents, 25000);
    assert_eq!(room.max_occupancy, 4);
    assert_eq!(room.amenities, vec!["WiFi", "Mini Bar", "Ocean View"]);
    assert_eq!(room.status, "maintenance");
}

#[test]
fn test_update_room_can_clear_amenities() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let updated = Room::with_id(
        room_id,
        String::from("101"),
        String::from("double"),
        15000,
        2,
        vec![],
        RoomStatus::Available,
    );

    persistence.update_room(room_id, &updated).unwrap();

    let room = persistence.get_room(room_id).unwrap().unwrap();
    assert!(room.amenities.is_empty());
}

#[test]
fn test_update_room_keeps_own_number() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    // Writing the room's own number back is not a conflict
    let mut updated = create_test_room("101");
    updated.room_id = Some(room_id);
    updated.price_per_night_cents = 18000;

    persistence.update_room(room_id, &updated).unwrap();

    let room = persistence.get_room(room_id).unwrap().unwrap();
    assert_eq!(room.price_per_night_cents, 18000);
}

#[test]
fn test_update_room_to_taken_number_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    persistence.create_room(&create_test_room("101")).unwrap();
    let second_id = persistence.create_room(&create_test_room("102")).unwrap();

    let result = persistence.update_room(second_id, &create_test_room("101"));

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::DuplicateRoomNumber { room_number } => {
            assert_eq!(room_number, "101");
        }
        other => panic!("Expected DuplicateRoomNumber error, got: {other:?}"),
    }

    // The conflicting update must not have been applied
    let room = persistence.get_room(second_id).unwrap().unwrap();
    assert_eq!(room.room_number, "102");
}

#[test]
fn test_update_nonexistent_room_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.update_room(999, &create_test_room("101"));

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::RoomNotFound(msg) => {
            assert!(msg.contains("999"));
        }
        other => panic!("Expected RoomNotFound error, got: {other:?}"),
    }
}

#[test]
fn test_delete_room_succeeds_when_no_bookings() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    persistence.delete_room(room_id).unwrap();

    assert!(persistence.get_room(room_id).unwrap().is_none());
}

#[test]
fn test_delete_nonexistent_room_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.delete_room(999);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::RoomNotFound(msg) => {
            assert!(msg.contains("999"));
        }
        other => panic!("Expected RoomNotFound error, got: {other:?}"),
    }
}

#[test]
fn test_delete_room_with_active_booking_fails() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    let result = persistence.delete_room(room_id);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::RoomHasBookings {
            room_id: id,
            booking_count,
        } => {
            assert_eq!(id, room_id);
            assert_eq!(booking_count, 1);
        }
        other => panic!("Expected RoomHasBookings error, got: {other:?}"),
    }

    // Verify room still exists
    assert!(persistence.get_room(room_id).unwrap().is_some());
}

#[test]
fn test_delete_room_with_historical_booking_fails() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    persistence.cancel_booking(booking_id).unwrap();

    // The ledger keeps the cancelled booking, so the room cannot be
    // deleted even though nothing active references it
    let result = persistence.delete_room(room_id);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::RoomHasBookings {
            room_id: id,
            booking_count,
        } => {
            assert_eq!(id, room_id);
            assert_eq!(booking_count, 1);
        }
        other => panic!("Expected RoomHasBookings error, got: {other:?}"),
    }

    assert!(persistence.get_room(room_id).unwrap().is_some());
}
