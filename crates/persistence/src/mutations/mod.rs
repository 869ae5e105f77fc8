// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Most mutations use Diesel DSL and are backend-agnostic, with minimal use of
//! backend-specific helpers (e.g., `last_insert_rowid()` for `SQLite`).
//!
//! ## Module Organization
//!
//! - `rooms` — Room catalog mutations
//! - `bookings` — Booking creation and lifecycle transitions
//! - `operators` — Operator and session mutations
//!
//! ## Backend-Specific Code
//!
//! Backend-specific helpers (e.g., `get_last_insert_rowid()`) are imported from
//! the `backend` module. All other code uses Diesel DSL exclusively.

pub mod bookings;
pub mod operators;
pub mod rooms;

// Re-export backend-specific mutation functions used by lib.rs
pub use bookings::{
    cancel_booking_mysql, cancel_booking_sqlite, check_in_booking_mysql, check_in_booking_sqlite,
    check_out_booking_mysql, check_out_booking_sqlite, create_booking_mysql,
    create_booking_sqlite,
};
pub use operators::{
    create_operator_mysql, create_operator_sqlite, create_session_mysql, create_session_sqlite,
    delete_expired_sessions_mysql, delete_expired_sessions_sqlite, delete_session_mysql,
    delete_session_sqlite, update_last_login_mysql, update_last_login_sqlite,
    update_session_activity_mysql, update_session_activity_sqlite,
};
pub use rooms::{
    create_room_mysql, create_room_sqlite, delete_room_mysql, delete_room_sqlite,
    update_room_mysql, update_room_sqlite,
};
