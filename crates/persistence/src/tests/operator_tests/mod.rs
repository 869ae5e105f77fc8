// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for operator account and session persistence operations.

use crate::SqlitePersistence;

#[test]
fn test_create_operator_succeeds() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let operator_id = persistence
        .create_operator("admin", "Front Desk Admin", "password", "Admin")
        .unwrap();
    assert!(operator_id > 0);

    let operator = persistence
        .get_operator_by_id(operator_id)
        .unwrap()
        .unwrap();
    assert_eq!(operator.login_name, "ADMIN", "Login names are normalized");
    assert_eq!(operator.display_name, "Front Desk Admin");
    assert_eq!(operator.role, "Admin");
    assert!(!operator.is_disabled);
    assert!(operator.last_login_at.is_none());
    assert!(
        operator.password_hash.starts_with("$2"),
        "Password must be stored as a bcrypt hash"
    );
    assert_ne!(operator.password_hash, "password");
}

#[test]
fn test_create_operator_with_duplicate_login_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    persistence
        .create_operator("admin", "First", "password", "Admin")
        .unwrap();

    // Normalization makes "ADMIN" collide with "admin"
    let result = persistence.create_operator("ADMIN", "Second", "password", "Staff");
    assert!(result.is_err());
}

#[test]
fn test_get_operator_by_login_is_case_insensitive() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let operator_id = persistence
        .create_operator("frontdesk", "Front Desk", "password", "Staff")
        .unwrap();

    for login in ["frontdesk", "FRONTDESK", "FrontDesk"] {
        let operator = persistence.get_operator_by_login(login).unwrap();
        assert_eq!(
            operator.map(|o| o.operator_id),
            Some(operator_id),
            "Lookup with {login:?} should find the operator"
        );
    }

    assert!(persistence.get_operator_by_login("other").unwrap().is_none());
}

#[test]
fn test_verify_password() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    persistence
        .create_operator("admin", "Admin", "correct horse", "Admin")
        .unwrap();

    let operator = persistence
        .get_operator_by_login("admin")
        .unwrap()
        .unwrap();

    assert!(
        persistence
            .verify_password("correct horse", &operator.password_hash)
            .unwrap()
    );
    assert!(
        !persistence
            .verify_password("battery staple", &operator.password_hash)
            .unwrap()
    );
}

#[test]
fn test_update_last_login() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let operator_id = persistence
        .create_operator("admin", "Admin", "password", "Admin")
        .unwrap();

    persistence.update_last_login(operator_id).unwrap();

    let operator = persistence
        .get_operator_by_id(operator_id)
        .unwrap()
        .unwrap();
    assert!(operator.last_login_at.is_some());
}

#[test]
fn test_count_operators() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    assert_eq!(persistence.count_operators().unwrap(), 0);

    persistence
        .create_operator("admin", "Admin", "password", "Admin")
        .unwrap();
    persistence
        .create_operator("staff", "Staff", "password", "Staff")
        .unwrap();

    assert_eq!(persistence.count_operators().unwrap(), 2);
}

#[test]
fn test_create_session_and_get_by_token() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let operator_id = persistence
        .create_operator("admin", "Admin", "password", "Admin")
        .unwrap();

    let session_id = persistence
        .create_session("session_test_token", operator_id, "2099-01-01T00:00:00Z")
        .unwrap();
    assert!(session_id > 0);

    let session = persistence
        .get_session_by_token("session_test_token")
        .unwrap()
        .unwrap();
    assert_eq!(session.session_id, session_id);
    assert_eq!(session.session_token, "session_test_token");
    assert_eq!(session.operator_id, operator_id);
    assert_eq!(session.expires_at, "2099-01-01T00:00:00Z");
    assert!(!session.created_at.is_empty());
    assert!(!session.last_activity_at.is_empty());
}

#[test]
fn test_get_session_by_token_returns_none_for_unknown() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.get_session_by_token("no_such_token").unwrap();
    assert!(result.is_none());
}

#[test]
fn test_create_session_requires_existing_operator() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    // No operator 999; the foreign key must reject this
    let result = persistence.create_session("orphan_token", 999, "2099-01-01T00:00:00Z");
    assert!(result.is_err());
}

#[test]
fn test_session_tokens_are_unique() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let operator_id = persistence
        .create_operator("admin", "Admin", "password", "Admin")
        .unwrap();

    persistence
        .create_session("dup_token", operator_id, "2099-01-01T00:00:00Z")
        .unwrap();

    let result = persistence.create_session("dup_token", operator_id, "2099-01-01T00:00:00Z");
    assert!(result.is_err());
}

#[test]
fn test_update_session_activity() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let operator_id = persistence
        .create_operator("admin", "Admin", "password", "Admin")
        .unwrap();
    let session_id = persistence
        .create_session("activity_token", operator_id, "2099-01-01T00:00:00Z")
        .unwrap();

    let result = persistence.update_session_activity(session_id);
    assert!(result.is_ok());

    // The session is still retrievable afterwards
    assert!(
        persistence
            .get_session_by_token("activity_token")
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_delete_session() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let operator_id = persistence
        .create_operator("admin", "Admin", "password", "Admin")
        .unwrap();
    persistence
        .create_session("logout_token", operator_id, "2099-01-01T00:00:00Z")
        .unwrap();

    persistence.delete_session("logout_token").unwrap();

    assert!(
        persistence
            .get_session_by_token("logout_token")
            .unwrap()
            .is_none()
    );

    // Deleting an already-deleted token is a no-op
    assert!(persistence.delete_session("logout_token").is_ok());
}

#[test]
fn test_delete_expired_sessions() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let operator_id = persistence
        .create_operator("admin", "Admin", "password", "Admin")
        .unwrap();

    persistence
        .create_session("expired_token", operator_id, "2020-01-01T00:00:00Z")
        .unwrap();
    persistence
        .create_session("live_token", operator_id, "2099-01-01T00:00:00Z")
        .unwrap();

    let removed = persistence.delete_expired_sessions().unwrap();
    assert_eq!(removed, 1);

    assert!(
        persistence
            .get_session_by_token("expired_token")
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .get_session_by_token("live_token")
            .unwrap()
            .is_some()
    );
}
