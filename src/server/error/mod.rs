//! Error types for the Holonet server application.
//!
//! This module provides the error handling for the API: a `ResourceError` for
//! lookups that come up empty, a `ConfigError` for startup configuration
//! problems, and a unified `Error` aggregating them with database failures.
//! All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions.

pub mod config;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError},
};

/// Main error type for the Holonet server application.
///
/// Aggregates the domain-specific error types and external library errors into
/// a single unified error type, using `thiserror`'s `#[from]` attribute to
/// enable automatic conversion via the `?` operator. The `IntoResponse`
/// implementation maps errors to HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Resource errors (user/planet/person/favorite lookups that found nothing)
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Resource lookup error (requested entity does not exist).
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing users, planets, people, or favorites
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Test-only bridge so the `?` operator can lift a service [`Error`] into the
/// shared [`holonet_test_utils::TestError`] inside the crate's async tests. The
/// message is preserved; this only fires when a test hits an unexpected error.
#[cfg(test)]
impl From<Error> for holonet_test_utils::TestError {
    fn from(err: Error) -> Self {
        holonet_test_utils::TestError::DbErr(sea_orm::DbErr::Custom(err.to_string()))
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
