//! Integration tests for registration and login against the real store.
//!
//! These tests require:
//! - A running `PostgreSQL` database, named by `DATABASE_URL`
//!
//! Run with: cargo test -p stockroom-integration-tests -- --ignored

use stockroom_integration_tests::{connect_pool, unique_suffix};
use stockroom_server::services::{AuthError, AuthService};

// ============================================================================
// Email Uniqueness Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_duplicate_registration_is_rejected() {
    let pool = connect_pool().await;
    let auth = AuthService::new(&pool);
    let email = format!("dup-{}@example.com", unique_suffix());

    auth.register(&email, "first password", "First")
        .await
        .expect("Failed to register first user");

    // The unique index on app_user.email rejects the second insert; there is
    // no pre-check that a concurrent writer could slip past.
    let err = auth
        .register(&email, "second password", "Second")
        .await
        .expect_err("Second registration with the same email must fail");
    assert!(matches!(err, AuthError::EmailTaken), "got {err:?}");
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_registration_is_case_insensitive_on_email() {
    let pool = connect_pool().await;
    let auth = AuthService::new(&pool);
    let suffix = unique_suffix();

    auth.register(
        &format!("case-{suffix}@example.com"),
        "first password",
        "First",
    )
    .await
    .expect("Failed to register first user");

    // Addresses are lowercased on parse, so a re-registration that differs
    // only in case lands on the same index entry.
    let err = auth
        .register(
            &format!("CASE-{suffix}@EXAMPLE.COM"),
            "second password",
            "Second",
        )
        .await
        .expect_err("Case-variant registration must fail");
    assert!(matches!(err, AuthError::EmailTaken), "got {err:?}");
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_login_round_trip() {
    let pool = connect_pool().await;
    let auth = AuthService::new(&pool);
    let email = format!("login-{}@example.com", unique_suffix());

    let registered = auth
        .register(&email, "correct password", "Login User")
        .await
        .expect("Failed to register user");

    let logged_in = auth
        .login(&email, "correct password")
        .await
        .expect("Login with the registered password must succeed");
    assert_eq!(logged_in.id, registered.id);

    let err = auth
        .login(&email, "wrong password")
        .await
        .expect_err("Login with the wrong password must fail");
    assert!(matches!(err, AuthError::InvalidCredentials), "got {err:?}");

    // Unknown email gets the same generic rejection as a wrong password.
    let err = auth
        .login(
            &format!("nobody-{}@example.com", unique_suffix()),
            "correct password",
        )
        .await
        .expect_err("Login with an unknown email must fail");
    assert!(matches!(err, AuthError::InvalidCredentials), "got {err:?}");
}
