// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `rooms` — Room catalog queries
//! - `bookings` — Booking ledger and overlap queries
//! - `operators` — Operator and session queries
//! - `stats` — Aggregate count queries
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod bookings;
pub mod operators;
pub mod rooms;
pub mod stats;

// Re-export the password helper (not backend-specific)
// Used indirectly via the Persistence wrapper method in lib.rs
#[allow(unused_imports)]
pub use operators::verify_password;

// Backend-specific query re-exports
// These are used indirectly via Persistence wrapper methods in lib.rs
#[allow(unused_imports)]
pub use bookings::{
    count_active_bookings_for_room_mysql, count_active_bookings_for_room_sqlite,
    count_overlapping_bookings_mysql, count_overlapping_bookings_sqlite, get_booking_by_code_mysql,
    get_booking_by_code_sqlite, get_booking_mysql, get_booking_sqlite, list_bookings_mysql,
    list_bookings_overlapping_mysql, list_bookings_overlapping_sqlite, list_bookings_sqlite,
};
#[allow(unused_imports)]
pub use operators::{
    count_operators_mysql, count_operators_sqlite, get_operator_by_id_mysql,
    get_operator_by_id_sqlite, get_operator_by_login_mysql, get_operator_by_login_sqlite,
    get_session_by_token_mysql, get_session_by_token_sqlite,
};
#[allow(unused_imports)]
pub use rooms::{
    get_room_by_number_mysql, get_room_by_number_sqlite, get_room_mysql, get_room_sqlite,
    list_rooms_mysql, list_rooms_sqlite,
};
#[allow(unused_imports)]
pub use stats::{get_stats_mysql, get_stats_sqlite};
