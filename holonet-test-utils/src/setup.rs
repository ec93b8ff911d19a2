//! Shared test environment over an in-memory SQLite database.
//!
//! Tests construct a [`TestSetup`] (usually through the `test_setup_with_tables!`
//! or `test_setup_with_app_tables!` macros), seed rows with the insert helpers,
//! and run repository or service code against `state.db`.

use chrono::Utc;
use sea_orm::{
    sea_query::TableCreateStatement, ActiveModelTrait, ActiveValue, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    /// Convert the test database connection into any state type that can be
    /// constructed from it. This allows conversion to the application's
    /// `AppState` without creating a circular dependency on the main crate.
    pub fn app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Inserts a user row for tests
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.state.db).await?)
    }

    /// Inserts a planet row for tests
    pub async fn insert_planet(
        &self,
        name: &str,
        description: &str,
        population: i64,
    ) -> Result<entity::planet::Model, TestError> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            population: ActiveValue::Set(population),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(planet.insert(&self.state.db).await?)
    }

    /// Inserts a person row for tests
    pub async fn insert_person(
        &self,
        name: &str,
        gender: &str,
        hair_color: &str,
    ) -> Result<entity::people::Model, TestError> {
        let person = entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("Archive entry for {}", name)),
            gender: ActiveValue::Set(gender.to_string()),
            hair_color: ActiveValue::Set(hair_color.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(person.insert(&self.state.db).await?)
    }

    /// Inserts a favorite row referencing a planet
    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(Some(planet_id)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(&self.state.db).await?)
    }

    /// Inserts a favorite row referencing a person
    pub async fn insert_people_favorite(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            people_id: ActiveValue::Set(Some(people_id)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(&self.state.db).await?)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_app_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(setup)
        }.await
    }};
}
