// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Backend initialization (`SQLite` in-memory, file-based, migrations, foreign
//! key enforcement) is also exercised implicitly by every persistence test
//! that calls `SqlitePersistence::new_in_memory()`. Each such test validates:
//!
//! - Connection establishment
//! - Migration application (schema must exist for tests to work)
//! - Foreign key enforcement (tests rely on referential integrity)
//! - Transaction support (tested via booking creation)
//!
//! The tests here cover the explicit initialization contract: instances are
//! isolated from each other and the schema is queryable immediately after
//! construction.

use crate::SqlitePersistence;

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, crate::error::PersistenceError> =
        SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    // Each in-memory instance should be isolated
    let mut db1 = SqlitePersistence::new_in_memory().unwrap();
    let mut db2 = SqlitePersistence::new_in_memory().unwrap();

    // Create operator in db1
    db1.create_operator("op1", "Operator One", "password", "Admin")
        .unwrap();

    // db2 should not see it
    let count1 = db1.count_operators().unwrap();
    let count2 = db2.count_operators().unwrap();

    assert_eq!(count1, 1, "db1 should have 1 operator");
    assert_eq!(count2, 0, "db2 should have 0 operators (isolated)");
}

#[test]
fn test_migrations_applied_on_initialization() {
    // If migrations didn't run, the schema wouldn't exist and this would fail
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    // Verify tables exist by querying them
    let rooms = persistence.list_rooms();
    let bookings = persistence.list_bookings();

    assert!(
        rooms.is_ok(),
        "Migrations must have applied for rooms table to exist"
    );
    assert!(
        bookings.is_ok(),
        "Migrations must have applied for bookings table to exist"
    );
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.verify_foreign_key_enforcement();
    assert!(result.is_ok(), "Foreign keys must be enforced: {result:?}");
}
