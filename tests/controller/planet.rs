//! Tests for planet controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::controller::planet::{create_planet, get_planet, get_planets},
};
use holonet_test_utils::prelude::*;

/// Expect 200 OK with an array matching the stored row count
#[tokio::test]
async fn lists_planets_matching_row_count() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    test.insert_planet("Tatooine", "desert", 200_000).await?;
    test.insert_planet("Hoth", "ice", 0).await?;

    let result = get_planets(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let planets: Vec<PlanetDto> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(planets.len(), 2);

    Ok(())
}

/// Expect 200 OK when retrieving an existing planet
#[tokio::test]
async fn gets_existing_planet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let planet = test.insert_planet("Tatooine", "desert", 200_000).await?;

    let result = get_planet(State(test.app_state()), Path(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a nonexistent planet, without panicking
#[tokio::test]
async fn responds_not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let nonexistent_planet_id = 999;
    let result = get_planet(State(test.app_state()), Path(nonexistent_planet_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a created planet to round-trip through the single-planet endpoint
/// with the same field values
#[tokio::test]
async fn created_planet_round_trips() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let body = CreatePlanetDto {
        name: "Tatooine".to_string(),
        description: "desert".to_string(),
        population: 200_000,
    };
    let result = create_planet(State(test.app_state()), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let created: PlanetDto = serde_json::from_slice(&bytes).unwrap();

    let result = get_planet(State(test.app_state()), Path(created.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let fetched: PlanetDto = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Tatooine");
    assert_eq!(fetched.description, "desert");
    assert_eq!(fetched.population, 200_000);

    Ok(())
}
