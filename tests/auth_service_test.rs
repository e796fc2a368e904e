//! Authentication service unit tests.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use staffhub::domain::{Password, User};
use staffhub::errors::AppError;
use staffhub::infra::MockUserRepository;
use staffhub::services::{AuthService, Authenticator};

fn stored_user(password: &str) -> User {
    User {
        id: Uuid::new_v4(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn signup_hashes_password_and_lowercases_email() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|data| {
            data.username == "ada"
                && data.email == "ada@example.com"
                && data.password_hash != "secret123"
                && data.password_hash.starts_with("$argon2")
        })
        .returning(|data| {
            Ok(User {
                id: Uuid::new_v4(),
                username: data.username,
                email: data.email,
                password_hash: data.password_hash,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

    let service = Authenticator::new(Arc::new(repo));
    let user = service
        .signup(
            "  ada  ".to_string(),
            " Ada@Example.COM ".to_string(),
            "secret123".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert!(Password::from_hash(user.password_hash).verify("secret123"));
}

#[tokio::test]
async fn signup_surfaces_duplicate_username() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .returning(|_| Err(AppError::Conflict("username".to_string())));

    let service = Authenticator::new(Arc::new(repo));
    let result = service
        .signup(
            "ada".to_string(),
            "ada@example.com".to_string(),
            "secret123".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(field) if field == "username"));
}

#[tokio::test]
async fn login_with_correct_password_returns_the_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_identifier()
        .withf(|identifier| identifier == "ada")
        .returning(|_| Ok(Some(stored_user("secret123"))));

    let service = Authenticator::new(Arc::new(repo));
    let user = service
        .login("  ada  ".to_string(), "secret123".to_string())
        .await
        .unwrap();

    assert_eq!(user.username, "ada");
}

#[tokio::test]
async fn login_with_unknown_identifier_fails() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_identifier().returning(|_| Ok(None));

    let service = Authenticator::new(Arc::new(repo));
    let result = service
        .login("nobody".to_string(), "secret123".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::UserNotFound));
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_identifier()
        .returning(|_| Ok(Some(stored_user("secret123"))));

    let service = Authenticator::new(Arc::new(repo));
    let result = service
        .login("ada".to_string(), "wrong-password".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidPassword));
}
