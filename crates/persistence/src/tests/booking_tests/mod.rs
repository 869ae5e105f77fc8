// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for booking ledger persistence operations.
//!
//! Covers transactional creation with the overlap re-check, the
//! compare-and-set lifecycle transitions, and the ledger queries.

use frontdesk_domain::BOOKING_CODE_PREFIX;
use std::collections::HashSet;

use crate::tests::{create_test_booking, create_test_room, setup_persistence_with_room};
use crate::{PersistenceError, SqlitePersistence};

#[test]
fn test_create_booking_assigns_id_and_round_trips() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    assert!(booking_id > 0, "Booking ID should be a positive rowid");

    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.booking_id, booking_id);
    assert!(booking.booking_code.starts_with(BOOKING_CODE_PREFIX));
    assert_eq!(booking.guest_name, "Alice Example");
    assert_eq!(booking.guest_email, "alice@example.com");
    assert_eq!(booking.guest_phone.as_deref(), Some("+1-555-0100"));
    assert_eq!(booking.room_id, room_id);
    assert_eq!(booking.room_number, "101");
    assert_eq!(booking.check_in, "2026-03-10");
    assert_eq!(booking.check_out, "2026-03-14");
    assert_eq!(booking.num_guests, 2);
    assert_eq!(booking.total_cost_cents, 60000);
    assert_eq!(booking.status, "confirmed");
    assert!(!booking.created_at.is_empty());
    assert!(booking.checked_in_at.is_none());
    assert!(booking.checked_out_at.is_none());
    assert!(booking.cancelled_at.is_none());
}

#[test]
fn test_get_booking_returns_none_for_unknown_id() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.get_booking(999).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_get_booking_by_code() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    let code = persistence
        .get_booking(booking_id)
        .unwrap()
        .unwrap()
        .booking_code;

    let found = persistence.get_booking_by_code(&code).unwrap().unwrap();
    assert_eq!(found.booking_id, booking_id);

    let missing = persistence.get_booking_by_code("BKG-000000000").unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_create_booking_for_unknown_room_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result =
        persistence.create_booking(&create_test_booking(999, "101", "2026-03-10", "2026-03-14"));

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::RoomNotFound(msg) => {
            assert!(msg.contains("999"));
        }
        other => panic!("Expected RoomNotFound error, got: {other:?}"),
    }
}

#[test]
fn test_create_booking_rejects_overlapping_stay() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    let result = persistence.create_booking(&create_test_booking(
        room_id,
        "101",
        "2026-03-12",
        "2026-03-16",
    ));

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::BookingOverlap { room_number } => {
            assert_eq!(room_number, "101");
        }
        other => panic!("Expected BookingOverlap error, got: {other:?}"),
    }
}

#[test]
fn test_create_booking_rejects_contained_and_spanning_stays() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    // Entirely inside the existing stay
    let contained = persistence.create_booking(&create_test_booking(
        room_id,
        "101",
        "2026-03-11",
        "2026-03-13",
    ));
    assert!(matches!(
        contained.unwrap_err(),
        PersistenceError::BookingOverlap { .. }
    ));

    // Entirely covering the existing stay
    let spanning = persistence.create_booking(&create_test_booking(
        room_id,
        "101",
        "2026-03-09",
        "2026-03-15",
    ));
    assert!(matches!(
        spanning.unwrap_err(),
        PersistenceError::BookingOverlap { .. }
    ));
}

#[test]
fn test_create_booking_allows_same_day_turnover() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    // Check-in on the existing check-out day is not an overlap
    let after = persistence.create_booking(&create_test_booking(
        room_id,
        "101",
        "2026-03-14",
        "2026-03-16",
    ));
    assert!(after.is_ok(), "Back-to-back stay should be allowed: {after:?}");

    // Check-out on the existing check-in day is not an overlap either
    let before = persistence.create_booking(&create_test_booking(
        room_id,
        "101",
        "2026-03-08",
        "2026-03-10",
    ));
    assert!(before.is_ok(), "Back-to-back stay should be allowed: {before:?}");
}

#[test]
fn test_create_booking_ignores_cancelled_bookings() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let first_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    persistence.cancel_booking(first_id).unwrap();

    // Cancellation released the window, so the same stay can be rebooked
    let result = persistence.create_booking(&create_test_booking(
        room_id,
        "101",
        "2026-03-10",
        "2026-03-14",
    ));
    assert!(result.is_ok(), "Cancelled stay should not block: {result:?}");
}

#[test]
fn test_create_booking_allows_other_room_same_window() {
    let (mut persistence, first_room_id) = setup_persistence_with_room();
    let second_room_id = persistence.create_room(&create_test_room("102")).unwrap();

    persistence
        .create_booking(&create_test_booking(
            first_room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    let result = persistence.create_booking(&create_test_booking(
        second_room_id,
        "102",
        "2026-03-10",
        "2026-03-14",
    ));
    assert!(result.is_ok(), "Other rooms are unaffected: {result:?}");
}

#[test]
fn test_booking_codes_are_unique() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    for month in 1..=6 {
        persistence
            .create_booking(&create_test_booking(
                room_id,
                "101",
                &format!("2026-{month:02}-01"),
                &format!("2026-{month:02}-05"),
            ))
            .unwrap();
    }

    let bookings = persistence.list_bookings().unwrap();
    let codes: HashSet<&str> = bookings.iter().map(|b| b.booking_code.as_str()).collect();

    assert_eq!(codes.len(), bookings.len(), "Every code must be distinct");
}

#[test]
fn test_list_bookings_newest_first() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let first = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-01",
            "2026-03-05",
        ))
        .unwrap();
    let second = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-05",
            "2026-03-09",
        ))
        .unwrap();
    let third = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-09",
            "2026-03-13",
        ))
        .unwrap();

    let bookings = persistence.list_bookings().unwrap();
    let ids: Vec<i64> = bookings.iter().map(|b| b.booking_id).collect();

    assert_eq!(ids, vec![third, second, first]);
}

#[test]
fn test_list_bookings_overlapping_filters_by_window_and_status() {
    let (mut persistence, first_room_id) = setup_persistence_with_room();
    let second_room_id = persistence.create_room(&create_test_room("102")).unwrap();

    // A cancelled stay on room 101, then a live one over the same window
    let cancelled_id = persistence
        .create_booking(&create_test_booking(
            first_room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    persistence.cancel_booking(cancelled_id).unwrap();

    let live_first = persistence
        .create_booking(&create_test_booking(
            first_room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    let live_second = persistence
        .create_booking(&create_test_booking(
            second_room_id,
            "102",
            "2026-03-20",
            "2026-03-24",
        ))
        .unwrap();

    let hits = persistence
        .list_bookings_overlapping("2026-03-12", "2026-03-22")
        .unwrap();
    let ids: HashSet<i64> = hits.iter().map(|b| b.booking_id).collect();

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&live_first));
    assert!(ids.contains(&live_second));
    assert!(!ids.contains(&cancelled_id), "Cancelled stays do not occupy");

    // A window that only touches the boundaries matches nothing
    let empty = persistence
        .list_bookings_overlapping("2026-03-14", "2026-03-20")
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_check_in_booking() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    persistence.check_in_booking(booking_id).unwrap();

    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.status, "checked-in");
    assert!(booking.checked_in_at.is_some());
    assert!(booking.checked_out_at.is_none());
    assert!(booking.cancelled_at.is_none());
}

#[test]
fn test_check_in_twice_fails() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    persistence.check_in_booking(booking_id).unwrap();

    let result = persistence.check_in_booking(booking_id);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::BookingStateChanged {
            booking_id: id,
            expected,
        } => {
            assert_eq!(id, booking_id);
            assert_eq!(expected, "confirmed");
        }
        other => panic!("Expected BookingStateChanged error, got: {other:?}"),
    }
}

#[test]
fn test_check_in_nonexistent_booking_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.check_in_booking(999);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::BookingNotFound(msg) => {
            assert!(msg.contains("999"));
        }
        other => panic!("Expected BookingNotFound error, got: {other:?}"),
    }
}

#[test]
fn test_check_out_booking() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    persistence.check_in_booking(booking_id).unwrap();

    persistence.check_out_booking(booking_id).unwrap();

    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.status, "checked-out");
    assert!(booking.checked_in_at.is_some(), "Earlier timestamps persist");
    assert!(booking.checked_out_at.is_some());
}

#[test]
fn test_check_out_requires_checked_in() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    // Still confirmed; guests cannot leave before they arrive
    let result = persistence.check_out_booking(booking_id);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::BookingStateChanged {
            booking_id: id,
            expected,
        } => {
            assert_eq!(id, booking_id);
            assert_eq!(expected, "checked-in");
        }
        other => panic!("Expected BookingStateChanged error, got: {other:?}"),
    }
}

#[test]
fn test_check_out_nonexistent_booking_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.check_out_booking(999);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::BookingNotFound(msg) => {
            assert!(msg.contains("999"));
        }
        other => panic!("Expected BookingNotFound error, got: {other:?}"),
    }
}

#[test]
fn test_cancel_confirmed_booking() {
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

    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.status, "cancelled");
    assert!(booking.cancelled_at.is_some());
}

#[test]
fn test_cancel_checked_in_booking() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    persistence.check_in_booking(booking_id).unwrap();

    persistence.cancel_booking(booking_id).unwrap();

    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.status, "cancelled");
    assert!(booking.cancelled_at.is_some());
}

#[test]
fn test_cancel_terminal_booking_fails() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();
    persistence.check_in_booking(booking_id).unwrap();
    persistence.check_out_booking(booking_id).unwrap();

    let result = persistence.cancel_booking(booking_id);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::BookingStateChanged {
            booking_id: id,
            expected,
        } => {
            assert_eq!(id, booking_id);
            assert_eq!(expected, "active");
        }
        other => panic!("Expected BookingStateChanged error, got: {other:?}"),
    }

    // The record is untouched
    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.status, "checked-out");
    assert!(booking.cancelled_at.is_none());
}

#[test]
fn test_cancel_twice_fails() {
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

    let result = persistence.cancel_booking(booking_id);

    assert!(matches!(
        result.unwrap_err(),
        PersistenceError::BookingStateChanged { .. }
    ));
}

#[test]
fn test_cancel_nonexistent_booking_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.cancel_booking(999);

    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::BookingNotFound(msg) => {
            assert!(msg.contains("999"));
        }
        other => panic!("Expected BookingNotFound error, got: {other:?}"),
    }
}

#[test]
fn test_booking_lifecycle_complete_flow() {
    let (mut persistence, room_id) = setup_persistence_with_room();

    let booking_id = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-10",
            "2026-03-14",
        ))
        .unwrap();

    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.status, "confirmed");

    persistence.check_in_booking(booking_id).unwrap();
    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.status, "checked-in");

    persistence.check_out_booking(booking_id).unwrap();
    let booking = persistence.get_booking(booking_id).unwrap().unwrap();
    assert_eq!(booking.status, "checked-out");

    // Checked out is terminal; nothing moves it again
    assert!(persistence.check_in_booking(booking_id).is_err());
    assert!(persistence.check_out_booking(booking_id).is_err());
    assert!(persistence.cancel_booking(booking_id).is_err());
}
