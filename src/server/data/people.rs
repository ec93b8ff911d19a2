use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new person
    pub async fn create(
        &self,
        name: String,
        description: String,
        gender: String,
        hair_color: String,
    ) -> Result<entity::people::Model, DbErr> {
        let person = entity::people::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            gender: ActiveValue::Set(gender),
            hair_color: ActiveValue::Set(hair_color),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    /// Gets a person by ID
    pub async fn get(&self, people_id: i32) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find_by_id(people_id)
            .one(self.db)
            .await
    }

    /// Gets all people
    pub async fn get_all(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find().all(self.db).await
    }
}
