// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested room was not found.
    RoomNotFound(String),
    /// A room with the same room number already exists.
    DuplicateRoomNumber { room_number: String },
    /// Room cannot be deleted because it has bookings on record.
    RoomHasBookings { room_id: i64, booking_count: i64 },
    /// The requested booking was not found.
    BookingNotFound(String),
    /// The room is already booked for an overlapping stay.
    BookingOverlap { room_number: String },
    /// The booking is no longer in the state the transition requires.
    BookingStateChanged { booking_id: i64, expected: String },
    /// No unique booking code could be generated.
    BookingCodeExhausted,
    /// The requested operator was not found.
    OperatorNotFound(String),
    /// The requested session was not found.
    SessionNotFound(String),
    /// Session has expired.
    SessionExpired(String),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::RoomNotFound(msg) => write!(f, "Room not found: {msg}"),
            Self::DuplicateRoomNumber { room_number } => {
                write!(f, "Room number {room_number} is already in use")
            }
            Self::RoomHasBookings {
                room_id,
                booking_count,
            } => {
                write!(
                    f,
                    "Room {room_id} cannot be deleted: referenced by {booking_count} booking(s)"
                )
            }
            Self::BookingNotFound(msg) => write!(f, "Booking not found: {msg}"),
            Self::BookingOverlap { room_number } => {
                write!(
                    f,
                    "Room {room_number} is already booked for an overlapping stay"
                )
            }
            Self::BookingStateChanged {
                booking_id,
                expected,
            } => {
                write!(f, "Booking {booking_id} is no longer {expected}")
            }
            Self::BookingCodeExhausted => {
                write!(f, "Could not generate a unique booking code")
            }
            Self::OperatorNotFound(msg) => write!(f, "Operator not found: {msg}"),
            Self::SessionNotFound(msg) => write!(f, "Session not found: {msg}"),
            Self::SessionExpired(msg) => write!(f, "Session expired: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
