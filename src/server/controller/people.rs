use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        people::{CreatePeopleDto, PeopleDto},
    },
    server::{
        data::people::PeopleRepository,
        error::{resource::ResourceError, Error},
        model::app::AppState,
    },
};

pub static PEOPLE_TAG: &str = "people";

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving people", body = Vec<PeopleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people_repository = PeopleRepository::new(&state.db);

    let people = people_repository.get_all().await?;

    let people_dtos: Vec<PeopleDto> = people
        .into_iter()
        .map(|p| PeopleDto {
            id: p.id,
            name: p.name,
            description: p.description,
            gender: p.gender,
            hair_color: p.hair_color,
        })
        .collect();

    Ok((StatusCode::OK, Json(people_dtos)).into_response())
}

/// Get a single person
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PeopleDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let people_repository = PeopleRepository::new(&state.db);

    let person = match people_repository.get(people_id).await? {
        Some(person) => person,
        None => return Err(ResourceError::PersonNotFound(people_id).into()),
    };

    let people_dto = PeopleDto {
        id: person.id,
        name: person.name,
        description: person.description,
        gender: person.gender,
        hair_color: person.hair_color,
    };

    Ok((StatusCode::OK, Json(people_dto)).into_response())
}

/// Create a new person
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreatePeopleDto,
    responses(
        (status = 200, description = "Success when creating the person", body = PeopleDto),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(body): Json<CreatePeopleDto>,
) -> Result<impl IntoResponse, Error> {
    let people_repository = PeopleRepository::new(&state.db);

    let person = people_repository
        .create(body.name, body.description, body.gender, body.hair_color)
        .await?;

    let people_dto = PeopleDto {
        id: person.id,
        name: person.name,
        description: person.description,
        gender: person.gender,
        hair_color: person.hair_color,
    };

    Ok((StatusCode::OK, Json(people_dto)).into_response())
}
