use serde::{Deserialize, Serialize};

/// A user's favorite, referencing the user and exactly one of a planet or a person
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}
