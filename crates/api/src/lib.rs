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

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    BOOTSTRAP_ADMIN_LOGIN, cancel_booking, check_in_booking, check_out_booking, create_booking,
    create_first_admin, create_room, delete_room, get_booking, get_room, get_stats, list_bookings,
    list_rooms, login, logout, search_availability, update_room, whoami,
};
pub use request_response::{
    AvailabilityResponse, BookingInfo, CreateBookingRequest, CreateBookingResponse,
    CreateFirstAdminResponse, CreateRoomRequest, DeleteRoomResponse, ListBookingsResponse,
    ListRoomsResponse, LoginRequest, LoginResponse, RoomInfo, SearchAvailabilityRequest,
    StatsResponse, UpdateRoomRequest, WhoAmIResponse,
};
