//! Tests for favorite controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{
    model::api::ErrorDto,
    server::controller::favorite::{
        add_favorite_people, add_favorite_planet, remove_favorite_people, remove_favorite_planet,
    },
};
use holonet_test_utils::prelude::*;

/// Expect 200 OK when favoriting an existing planet for an existing user
#[tokio::test]
async fn adds_favorite_planet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user = test.insert_user("luke@rebellion.example").await?;
    let planet = test.insert_planet("Tatooine", "desert", 200_000).await?;

    let result = add_favorite_planet(State(test.app_state()), Path((user.id, planet.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 OK when favoriting an existing person for an existing user
#[tokio::test]
async fn adds_favorite_person() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user = test.insert_user("luke@rebellion.example").await?;
    let person = test.insert_person("Han Solo", "male", "brown").await?;

    let result = add_favorite_people(State(test.app_state()), Path((user.id, person.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when favoriting a planet for a nonexistent user
#[tokio::test]
async fn responds_not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let planet = test.insert_planet("Tatooine", "desert", 200_000).await?;

    let nonexistent_user_id = 1;
    let result = add_favorite_planet(
        State(test.app_state()),
        Path((nonexistent_user_id, planet.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect deleting a favorite that does not exist to respond 404 with a
/// structured JSON message
#[tokio::test]
async fn responds_structured_not_found_for_missing_favorite() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user = test.insert_user("luke@rebellion.example").await?;

    let nonexistent_planet_id = 999;
    let result = remove_favorite_planet(
        State(test.app_state()),
        Path((user.id, nonexistent_planet_id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ErrorDto = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(error.error, "No favorite found");

    Ok(())
}

/// Expect the second identical DELETE to respond 404, not a repeated 200
#[tokio::test]
async fn second_removal_responds_not_found() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user = test.insert_user("luke@rebellion.example").await?;
    let planet = test.insert_planet("Tatooine", "desert", 200_000).await?;
    test.insert_planet_favorite(user.id, planet.id).await?;

    let first = remove_favorite_planet(State(test.app_state()), Path((user.id, planet.id))).await;

    assert!(first.is_ok());
    let resp = first.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let second = remove_favorite_planet(State(test.app_state()), Path((user.id, planet.id))).await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK when removing an existing person favorite
#[tokio::test]
async fn removes_favorite_person() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user = test.insert_user("luke@rebellion.example").await?;
    let person = test.insert_person("Han Solo", "male", "brown").await?;
    test.insert_people_favorite(user.id, person.id).await?;

    let result = remove_favorite_people(State(test.app_state()), Path((user.id, person.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
