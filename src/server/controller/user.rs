use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto, user::UserDto},
    server::{
        data::user::UserRepository, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static USER_TAG: &str = "user";

/// Get all users
///
/// Only the ID and email address of each user is exposed.
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let users = user_repository.get_all().await?;

    let user_dtos: Vec<UserDto> = users
        .into_iter()
        .map(|u| UserDto {
            id: u.id,
            email: u.email,
        })
        .collect();

    Ok((StatusCode::OK, axum::Json(user_dtos)).into_response())
}

/// Get all favorites belonging to a user
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Success when retrieving the user's favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite_dtos = favorite_service.get_user_favorites(user_id).await?;

    Ok((StatusCode::OK, axum::Json(favorite_dtos)).into_response())
}
