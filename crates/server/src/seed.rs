// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Startup provisioning for fresh databases.
//!
//! Both helpers run once before the server starts listening and both are
//! idempotent: a populated room catalog is never reseeded and an existing
//! operator roster is never overwritten.

use frontdesk_api::{
    ApiError, AuthenticatedActor, CreateRoomRequest, Role, create_first_admin, create_room,
    translate_persistence_error,
};
use frontdesk_persistence::SqlitePersistence;
use tracing::{info, warn};

/// Actor identifier recorded for startup catalog seeding.
const SEED_ACTOR_ID: &str = "SYSTEM";

/// Seeds the room catalog with a small sample set.
///
/// Does nothing when the catalog already contains rooms, so restarting
/// with `--seed-rooms` never duplicates the sample data.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or a sample room
/// cannot be created.
pub fn seed_sample_rooms(persistence: &mut SqlitePersistence) -> Result<(), ApiError> {
    let existing = persistence
        .list_rooms()
        .map_err(translate_persistence_error)?;
    if !existing.is_empty() {
        info!(
            rooms = existing.len(),
            "Room catalog already populated, skipping seed"
        );
        return Ok(());
    }

    let actor: AuthenticatedActor =
        AuthenticatedActor::new(String::from(SEED_ACTOR_ID), Role::Admin);

    for request in sample_rooms() {
        let room_number: String = request.room_number.clone();
        create_room(persistence, request, &actor)?;
        info!(room_number = %room_number, "Seeded sample room");
    }

    Ok(())
}

/// Ensures an admin operator exists when a bootstrap password was given.
///
/// With a password this goes through the regular bootstrap operation,
/// so an already-populated roster is logged and left alone. Without
/// one, an empty roster only earns a warning: the public endpoints
/// still work, but no session can ever be opened.
///
/// # Errors
///
/// Returns an error if the operator roster cannot be read or the
/// bootstrap password is rejected.
pub fn bootstrap_admin(
    persistence: &mut SqlitePersistence,
    admin_password: Option<&str>,
) -> Result<(), ApiError> {
    if let Some(password) = admin_password {
        return match create_first_admin(persistence, password) {
            Ok(response) => {
                info!(login_name = %response.login_name, "Bootstrap admin operator created");
                Ok(())
            }
            Err(ApiError::Unauthorized { .. }) => {
                info!("Operators already exist, ignoring --admin-password");
                Ok(())
            }
            Err(e) => Err(e),
        };
    }

    let operator_count: i64 = persistence
        .count_operators()
        .map_err(translate_persistence_error)?;
    if operator_count == 0 {
        warn!(
            "No operators exist and no --admin-password was given, \
             staff endpoints will reject every request"
        );
    }

    Ok(())
}

/// The three sample rooms installed by `--seed-rooms`.
fn sample_rooms() -> Vec<CreateRoomRequest> {
    vec![
        CreateRoomRequest {
            room_number: String::from("101"),
            room_type: String::from("single"),
            price_per_night_cents: 10_000,
            max_occupancy: 1,
            amenities: vec![String::from("WiFi"), String::from("TV")],
        },
        CreateRoomRequest {
            room_number: String::from("102"),
            room_type: String::from("double"),
            price_per_night_cents: 15_000,
            max_occupancy: 2,
            amenities: vec![
                String::from("WiFi"),
                String::from("TV"),
                String::from("Air Conditioning"),
            ],
        },
        CreateRoomRequest {
            room_number: String::from("201"),
            room_type: String::from("suite"),
            price_per_night_cents: 25_000,
            max_occupancy: 4,
            amenities: vec![
                String::from("WiFi"),
                String::from("TV"),
                String::from("Air Conditioning"),
                String::from("Mini Bar"),
                String::from("Ocean View"),
            ],
        },
    ]
}
