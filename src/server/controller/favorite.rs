use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{error::Error, model::app::AppState, service::favorite::FavoriteService},
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet to favorite")
    ),
    responses(
        (status = 200, description = "Favorite planet added", body = MessageDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_planet_favorite(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Favorite planet added".to_string(),
        }),
    )
        .into_response())
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the favorited planet")
    ),
    responses(
        (status = 200, description = "Favorite planet removed", body = MessageDto),
        (status = 404, description = "No matching favorite found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_planet_favorite(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Favorite planet removed".to_string(),
        }),
    )
        .into_response())
}

/// Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("people_id" = i32, Path, description = "ID of the person to favorite")
    ),
    responses(
        (status = 200, description = "Favorite person added", body = MessageDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_people_favorite(user_id, people_id)
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Favorite person added".to_string(),
        }),
    )
        .into_response())
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("people_id" = i32, Path, description = "ID of the favorited person")
    ),
    responses(
        (status = 200, description = "Favorite person removed", body = MessageDto),
        (status = 404, description = "No matching favorite found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_people(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_people_favorite(user_id, people_id)
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Favorite person removed".to_string(),
        }),
    )
        .into_response())
}
