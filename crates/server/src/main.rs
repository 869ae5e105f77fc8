// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;
mod seed;
mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use frontdesk_api::{
    ApiError, AvailabilityResponse, BookingInfo, CreateBookingRequest, CreateBookingResponse,
    CreateRoomRequest, DeleteRoomResponse, ListBookingsResponse, ListRoomsResponse, LoginRequest,
    LoginResponse, RoomInfo, SearchAvailabilityRequest, StatsResponse, UpdateRoomRequest,
    WhoAmIResponse, cancel_booking, check_in_booking, check_out_booking, create_booking,
    create_room, delete_room, get_booking, get_room, get_stats, list_bookings, list_rooms, login,
    logout, search_availability, translate_persistence_error, update_room, whoami,
};
use frontdesk_persistence::SqlitePersistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use crate::session::{SessionOperator, bearer_token};

/// Frontdesk Server - HTTP server for the frontdesk hotel operations service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Seed the room catalog with three sample rooms when it is empty
    #[arg(long)]
    seed_rooms: bool,

    /// Create the first admin operator with this password when none exist
    #[arg(long)]
    admin_password: Option<String>,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access, plus the broadcaster that fans successful
/// mutations out to live dashboard clients.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the room catalog and booking ledger.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// Broadcast channel for live dashboard events.
    live: LiveEventBroadcaster,
}

/// API response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
            ApiError::Conflict { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                // Storage detail stays in the log, not in the response body
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Internal server error"),
                }
            }
        }
    }
}

/// Handler for GET `/api/health` endpoint.
///
/// Public liveness probe. Confirms the persistence layer answers a
/// trivial query before reporting healthy.
async fn handle_health(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<HealthResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    persistence
        .count_operators()
        .map_err(translate_persistence_error)?;
    drop(persistence);

    Ok(Json(HealthResponse {
        status: String::from("ok"),
    }))
}

/// Handler for POST `/api/auth/login` endpoint.
///
/// Verifies operator credentials and opens a session.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(login_name = %req.login_name, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &req)?;
    drop(persistence);

    info!(login_name = %response.login_name, "Operator logged in");

    Ok(Json(response))
}

/// Handler for POST `/api/auth/logout` endpoint.
///
/// Invalidates the presented session. The extractor has already proven
/// the session is live, so the raw token is re-read from the headers
/// only to know which row to delete.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    _operator: SessionOperator,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let token: &str = bearer_token(&headers).map_err(|_| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: String::from("Missing Authorization header"),
    })?;

    let mut persistence = app_state.persistence.lock().await;
    logout(&mut persistence, token)?;
    drop(persistence);

    info!("Operator logged out");

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/api/auth/whoami` endpoint.
///
/// Returns the operator behind the presented session.
#[allow(clippy::unused_async)]
async fn handle_whoami(SessionOperator(_actor, operator): SessionOperator) -> Json<WhoAmIResponse> {
    Json(whoami(&operator))
}

/// Handler for GET `/api/rooms` endpoint.
///
/// Lists the whole room catalog. Public.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListRoomsResponse>, HttpError> {
    info!("Handling list_rooms request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListRoomsResponse = list_rooms(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/rooms/{room_id}` endpoint.
///
/// Returns a single room by its identifier. Public.
async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<RoomInfo>, HttpError> {
    info!(room_id = room_id, "Handling get_room request");

    let mut persistence = app_state.persistence.lock().await;
    let room: RoomInfo = get_room(&mut persistence, room_id)?;
    drop(persistence);

    Ok(Json(room))
}

/// Handler for POST `/api/rooms` endpoint.
///
/// Adds a room to the catalog. Admin only.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<RoomInfo>, HttpError> {
    info!(room_number = %req.room_number, "Handling create_room request");

    let mut persistence = app_state.persistence.lock().await;
    let room: RoomInfo = create_room(&mut persistence, req, &actor)?;
    drop(persistence);

    info!(
        room_id = room.room_id,
        room_number = %room.room_number,
        "Successfully created room"
    );
    app_state.live.broadcast(&LiveEvent::RoomCreated {
        room_id: room.room_id,
        room_number: room.room_number.clone(),
    });

    Ok(Json(room))
}

/// Handler for PUT `/api/rooms/{room_id}` endpoint.
///
/// Applies a partial update to a room. Admin only.
async fn handle_update_room(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(room_id): Path<i64>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<RoomInfo>, HttpError> {
    info!(room_id = room_id, "Handling update_room request");

    let mut persistence = app_state.persistence.lock().await;
    let room: RoomInfo = update_room(&mut persistence, room_id, req, &actor)?;
    drop(persistence);

    info!(
        room_id = room.room_id,
        room_number = %room.room_number,
        "Successfully updated room"
    );
    app_state.live.broadcast(&LiveEvent::RoomUpdated {
        room_id: room.room_id,
        room_number: room.room_number.clone(),
    });

    Ok(Json(room))
}

/// Handler for DELETE `/api/rooms/{room_id}` endpoint.
///
/// Removes a room without active bookings from the catalog. Admin only.
async fn handle_delete_room(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(room_id): Path<i64>,
) -> Result<Json<DeleteRoomResponse>, HttpError> {
    info!(room_id = room_id, "Handling delete_room request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteRoomResponse = delete_room(&mut persistence, room_id, &actor)?;
    drop(persistence);

    info!(room_id = room_id, "Successfully deleted room");
    app_state
        .live
        .broadcast(&LiveEvent::RoomDeleted { room_id });

    Ok(Json(response))
}

/// Handler for GET `/api/rooms/available` endpoint.
///
/// Lists rooms free for a whole requested stay. Public.
async fn handle_search_availability(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    info!(
        check_in = %query.check_in,
        check_out = %query.check_out,
        guests = query.guests,
        "Handling search_availability request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AvailabilityResponse = search_availability(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/bookings` endpoint.
///
/// Takes a reservation for a guest. Public, no session required.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, HttpError> {
    info!(
        room_id = req.room_id,
        check_in = %req.check_in,
        check_out = %req.check_out,
        "Handling create_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateBookingResponse = create_booking(&mut persistence, req)?;
    drop(persistence);

    info!(
        booking_id = response.booking.booking_id,
        booking_code = %response.booking.booking_code,
        "Successfully created booking"
    );
    app_state.live.broadcast(&LiveEvent::BookingCreated {
        booking_id: response.booking.booking_id,
        booking_code: response.booking.booking_code.clone(),
        room_number: response.booking.room_number.clone(),
    });

    Ok(Json(response))
}

/// Handler for GET `/api/bookings` endpoint.
///
/// Lists the booking ledger, newest first. Staff.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
) -> Result<Json<ListBookingsResponse>, HttpError> {
    info!("Handling list_bookings request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListBookingsResponse = list_bookings(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/bookings/{booking_id}` endpoint.
///
/// Returns a single booking by its identifier. Staff.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(booking_id = booking_id, "Handling get_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = get_booking(&mut persistence, booking_id, &actor)?;
    drop(persistence);

    Ok(Json(booking))
}

/// Handler for PUT `/api/bookings/{booking_id}/check-in` endpoint.
///
/// Marks a confirmed booking as checked in. Staff.
async fn handle_check_in_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(booking_id = booking_id, "Handling check_in request");

    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = check_in_booking(&mut persistence, booking_id, &actor)?;
    drop(persistence);

    info!(
        booking_id = booking_id,
        status = %booking.status,
        "Successfully checked in booking"
    );
    app_state.live.broadcast(&LiveEvent::BookingStatusChanged {
        booking_id,
        status: booking.status.clone(),
    });

    Ok(Json(booking))
}

/// Handler for PUT `/api/bookings/{booking_id}/check-out` endpoint.
///
/// Marks a checked-in booking as checked out. Staff.
async fn handle_check_out_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(booking_id = booking_id, "Handling check_out request");

    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = check_out_booking(&mut persistence, booking_id, &actor)?;
    drop(persistence);

    info!(
        booking_id = booking_id,
        status = %booking.status,
        "Successfully checked out booking"
    );
    app_state.live.broadcast(&LiveEvent::BookingStatusChanged {
        booking_id,
        status: booking.status.clone(),
    });

    Ok(Json(booking))
}

/// Handler for DELETE `/api/bookings/{booking_id}` endpoint.
///
/// Cancels a booking that still holds a room. Admin only.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(booking_id = booking_id, "Handling cancel_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = cancel_booking(&mut persistence, booking_id, &actor)?;
    drop(persistence);

    info!(
        booking_id = booking_id,
        status = %booking.status,
        "Successfully cancelled booking"
    );
    app_state.live.broadcast(&LiveEvent::BookingStatusChanged {
        booking_id,
        status: booking.status.clone(),
    });

    Ok(Json(booking))
}

/// Handler for GET `/api/stats` endpoint.
///
/// Returns aggregate catalog and ledger counts. Staff.
async fn handle_get_stats(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _operator): SessionOperator,
) -> Result<Json<StatsResponse>, HttpError> {
    info!("Handling get_stats request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StatsResponse = get_stats(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/auth/login", post(handle_login))
        .route("/api/auth/logout", post(handle_logout))
        .route("/api/auth/whoami", get(handle_whoami))
        .route("/api/rooms", get(handle_list_rooms))
        .route("/api/rooms", post(handle_create_room))
        .route("/api/rooms/available", get(handle_search_availability))
        .route("/api/rooms/{room_id}", get(handle_get_room))
        .route("/api/rooms/{room_id}", put(handle_update_room))
        .route("/api/rooms/{room_id}", delete(handle_delete_room))
        .route("/api/bookings", post(handle_create_booking))
        .route("/api/bookings", get(handle_list_bookings))
        .route("/api/bookings/{booking_id}", get(handle_get_booking))
        .route("/api/bookings/{booking_id}", delete(handle_cancel_booking))
        .route(
            "/api/bookings/{booking_id}/check-in",
            put(handle_check_in_booking),
        )
        .route(
            "/api/bookings/{booking_id}/check-out",
            put(handle_check_out_booking),
        )
        .route("/api/stats", get(handle_get_stats))
        .route("/ws", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Frontdesk Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    // Provision a fresh database before accepting traffic
    seed::bootstrap_admin(&mut persistence, args.admin_password.as_deref())?;
    if args.seed_rooms {
        seed::seed_sample_rooms(&mut persistence)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        live: LiveEventBroadcaster::new(),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
