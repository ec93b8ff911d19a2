//! Tests for user controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{
    model::{favorite::FavoriteDto, user::UserDto},
    server::controller::user::{get_user_favorites, get_users},
};
use holonet_test_utils::prelude::*;

/// Expect 200 OK with an array matching the stored row count,
/// exposing only ID and email
#[tokio::test]
async fn lists_users_matching_row_count() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    test.insert_user("luke@rebellion.example").await?;
    test.insert_user("leia@rebellion.example").await?;

    let result = get_users(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let users: Vec<UserDto> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(users.len(), 2);

    Ok(())
}

/// Expect 200 OK with exactly the favorites belonging to the requested user
#[tokio::test]
async fn lists_favorites_for_user() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user = test.insert_user("luke@rebellion.example").await?;
    let other_user = test.insert_user("leia@rebellion.example").await?;
    let planet = test.insert_planet("Tatooine", "desert", 200_000).await?;

    test.insert_planet_favorite(user.id, planet.id).await?;
    test.insert_planet_favorite(other_user.id, planet.id).await?;

    let result = get_user_favorites(State(test.app_state()), Path(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let favorites: Vec<FavoriteDto> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].user_id, user.id);
    assert_eq!(favorites[0].planet_id, Some(planet.id));

    Ok(())
}

/// Expect 404 Not Found when listing favorites for a nonexistent user
#[tokio::test]
async fn responds_not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let nonexistent_user_id = 1;
    let result = get_user_favorites(State(test.app_state()), Path(nonexistent_user_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
