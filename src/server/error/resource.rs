use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResourceError {
    #[error("User ID {0:?} not found")]
    UserNotFound(i32),
    #[error("Planet ID {0:?} not found")]
    PlanetNotFound(i32),
    #[error("Person ID {0:?} not found")]
    PersonNotFound(i32),
    #[error("No favorite matching the requested target found for user ID {0:?}")]
    FavoriteNotFound(i32),
}

impl ResourceError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => Self::not_found("User not found"),
            Self::PlanetNotFound(_) => Self::not_found("Planet not found"),
            Self::PersonNotFound(_) => Self::not_found("Person not found"),
            Self::FavoriteNotFound(_) => Self::not_found("No favorite found"),
        }
    }
}
