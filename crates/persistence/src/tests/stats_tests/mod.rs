// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the aggregate dashboard counts.

use frontdesk_domain::RoomStatus;

use crate::SqlitePersistence;
use crate::tests::{create_test_booking, create_test_room};

#[test]
fn test_stats_on_empty_database() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let stats = persistence.get_stats().unwrap();

    assert_eq!(stats.total_rooms, 0);
    assert_eq!(stats.available_rooms, 0);
    assert_eq!(stats.total_bookings, 0);
    assert_eq!(stats.active_bookings, 0);
}

#[test]
fn test_stats_counts_rooms_by_operational_status() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    persistence.create_room(&create_test_room("101")).unwrap();

    let mut maintenance_room = create_test_room("102");
    maintenance_room.status = RoomStatus::Maintenance;
    persistence.create_room(&maintenance_room).unwrap();

    let stats = persistence.get_stats().unwrap();

    assert_eq!(stats.total_rooms, 2);
    assert_eq!(stats.available_rooms, 1, "Maintenance rooms are excluded");
}

#[test]
fn test_stats_counts_bookings_by_lifecycle_state() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let room_id = persistence.create_room(&create_test_room("101")).unwrap();

    // One of each: confirmed, checked in, checked out, cancelled
    persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-01",
            "2026-03-05",
        ))
        .unwrap();

    let checked_in = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-05",
            "2026-03-09",
        ))
        .unwrap();
    persistence.check_in_booking(checked_in).unwrap();

    let checked_out = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-09",
            "2026-03-13",
        ))
        .unwrap();
    persistence.check_in_booking(checked_out).unwrap();
    persistence.check_out_booking(checked_out).unwrap();

    let cancelled = persistence
        .create_booking(&create_test_booking(
            room_id,
            "101",
            "2026-03-13",
            "2026-03-17",
        ))
        .unwrap();
    persistence.cancel_booking(cancelled).unwrap();

    let stats = persistence.get_stats().unwrap();

    assert_eq!(stats.total_bookings, 4, "The ledger keeps every record");
    assert_eq!(
        stats.active_bookings, 2,
        "Only confirmed and checked-in stays are active"
    );
}
