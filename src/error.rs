//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, providing a consistent way to
//! represent every failure the services can surface, from domain conflicts to
//! database connectivity problems.
//!
//! `AppError` implements `actix_web::error::ResponseError` to convert
//! application errors into HTTP responses with JSON bodies of the form
//! `{"detail": "<message>"}`. It also provides `From` implementations for the
//! error types of the underlying drivers and libraries, allowing conversion
//! with the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
///
/// Domain and configuration errors carry fixed, caller-facing messages;
/// wrapped infrastructure errors keep the underlying detail.
#[derive(Debug)]
pub enum AppError {
    /// A sign-up used an email that is already registered (HTTP 409).
    UserAlreadyExists,
    /// A sign-in failed, either because no user matched the email or because
    /// the password did not verify (HTTP 401). The two cases deliberately
    /// share one message so the response does not reveal which part was wrong.
    SignInWrongCredentials,
    /// An access token failed verification: bad signature, malformed, or
    /// expired (HTTP 401).
    TokenVerification,
    /// A protected route was called without a bearer token (HTTP 401).
    MissingToken,
    /// The token-signing secret is not set in the environment (HTTP 401).
    /// Kept distinct from `TokenVerification`: a missing secret is a
    /// configuration problem, not a property of the presented token.
    SecretNotProvided,
    /// No user matched the given email (HTTP 404).
    UserNotFound,
    /// The user already has a task with the given title (HTTP 409).
    TaskAlreadyExists,
    /// The database connection string is not set in the environment (HTTP 500).
    ConnectionString,
    /// Building or configuring the database client failed (HTTP 500).
    DatabaseConnection,
    /// The liveness probe against the database failed (HTTP 500).
    DatabaseResponse,
    /// A database operation failed after a connection was established
    /// (HTTP 500). Wraps errors from the `mongodb` driver.
    Database(String),
    /// An unexpected server-side error, e.g. password hashing or token
    /// encoding failures (HTTP 500).
    Internal(String),
    /// Request payload validation failed (HTTP 422 Unprocessable Entity).
    /// Wraps errors from the `validator` crate.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::UserAlreadyExists => write!(f, "User already exists"),
            AppError::SignInWrongCredentials => write!(f, "Incorrect email or password"),
            AppError::TokenVerification => write!(f, "Token verification failed"),
            AppError::MissingToken => write!(f, "Not authenticated"),
            AppError::SecretNotProvided => write!(f, "Secret not provided"),
            AppError::UserNotFound => write!(f, "User not found"),
            AppError::TaskAlreadyExists => write!(f, "Task already exists"),
            AppError::ConnectionString => write!(f, "Connection string not provided"),
            AppError::DatabaseConnection => write!(f, "Error connecting to database"),
            AppError::DatabaseResponse => write!(f, "Error in database response"),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal server error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This implementation lets Actix Web translate `AppError` results from
/// handlers into the correct HTTP status codes and JSON error bodies.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({ "detail": self.to_string() });
        match self {
            AppError::UserAlreadyExists | AppError::TaskAlreadyExists => {
                HttpResponse::Conflict().json(body)
            }
            AppError::SignInWrongCredentials
            | AppError::TokenVerification
            | AppError::MissingToken
            | AppError::SecretNotProvided => HttpResponse::Unauthorized().json(body),
            AppError::UserNotFound => HttpResponse::NotFound().json(body),
            AppError::Validation(_) => HttpResponse::UnprocessableEntity().json(body),
            AppError::ConnectionString
            | AppError::DatabaseConnection
            | AppError::DatabaseResponse
            | AppError::Database(_)
            | AppError::Internal(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}

/// Converts `mongodb::error::Error` into `AppError::Database`.
///
/// Covers collection operations performed after a connection has been
/// established; connection and liveness failures use their own variants.
impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> AppError {
        AppError::Database(error.to_string())
    }
}

/// Converts BSON serialization failures into `AppError::Internal`.
impl From<mongodb::bson::ser::Error> for AppError {
    fn from(error: mongodb::bson::ser::Error) -> AppError {
        AppError::Internal(error.to_string())
    }
}

/// Converts `validator::ValidationErrors` into `AppError::Validation`.
///
/// The detailed validation messages are preserved.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::TokenVerification`.
///
/// Used on the decode path; the caller-facing message stays fixed, so the
/// underlying reason is only logged.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        log::debug!("token verification failed: {}", error);
        AppError::TokenVerification
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Internal`.
///
/// This handles errors during password hashing or verification.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
