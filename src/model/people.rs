use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PeopleDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub gender: String,
    pub hair_color: String,
}

/// Request body for creating a person
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePeopleDto {
    pub name: String,
    pub description: String,
    pub gender: String,
    pub hair_color: String,
}
