use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        data::planet::PlanetRepository,
        error::{resource::ResourceError, Error},
        model::app::AppState,
    },
};

pub static PLANET_TAG: &str = "planet";

/// Get all planets
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planets = planet_repository.get_all().await?;

    let planet_dtos: Vec<PlanetDto> = planets
        .into_iter()
        .map(|p| PlanetDto {
            id: p.id,
            name: p.name,
            description: p.description,
            population: p.population,
        })
        .collect();

    Ok((StatusCode::OK, Json(planet_dtos)).into_response())
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planet = match planet_repository.get(planet_id).await? {
        Some(planet) => planet,
        None => return Err(ResourceError::PlanetNotFound(planet_id).into()),
    };

    let planet_dto = PlanetDto {
        id: planet.id,
        name: planet.name,
        description: planet.description,
        population: planet.population,
    };

    Ok((StatusCode::OK, Json(planet_dto)).into_response())
}

/// Create a new planet
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Success when creating the planet", body = PlanetDto),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(body): Json<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planet = planet_repository
        .create(body.name, body.description, body.population)
        .await?;

    let planet_dto = PlanetDto {
        id: planet.id,
        name: planet.name,
        description: planet.description,
        population: planet.population,
    };

    Ok((StatusCode::OK, Json(planet_dto)).into_response())
}
