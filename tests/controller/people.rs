//! Tests for people controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::people::{CreatePeopleDto, PeopleDto},
    server::controller::people::{create_person, get_people, get_person},
};
use holonet_test_utils::prelude::*;

/// Expect 200 OK with an array matching the stored row count
#[tokio::test]
async fn lists_people_matching_row_count() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    test.insert_person("Luke Skywalker", "male", "blond").await?;
    test.insert_person("Leia Organa", "female", "brown").await?;
    test.insert_person("Han Solo", "male", "brown").await?;

    let result = get_people(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let people: Vec<PeopleDto> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(people.len(), 3);

    Ok(())
}

/// Expect 200 OK when retrieving an existing person
#[tokio::test]
async fn gets_existing_person() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let person = test.insert_person("Han Solo", "male", "brown").await?;

    let result = get_person(State(test.app_state()), Path(person.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a nonexistent person
#[tokio::test]
async fn responds_not_found_for_nonexistent_person() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let nonexistent_people_id = 999;
    let result = get_person(State(test.app_state()), Path(nonexistent_people_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with the serialized person when creating one
#[tokio::test]
async fn creates_person() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let body = CreatePeopleDto {
        name: "Luke Skywalker".to_string(),
        description: "Jedi knight".to_string(),
        gender: "male".to_string(),
        hair_color: "blond".to_string(),
    };
    let result = create_person(State(test.app_state()), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let created: PeopleDto = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(created.name, "Luke Skywalker");
    assert_eq!(created.hair_color, "blond");

    Ok(())
}
