//! Favorite service layer.
//!
//! Contains the business logic for the favorites relationship: listing a
//! user's favorites and linking or unlinking planets and people. The service
//! validates that referenced rows exist before touching the join table, so a
//! favorite can never point at a missing user, planet, or person.


use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
            user::UserRepository,
        },
        error::{resource::ResourceError, Error},
    },
};

/// Service for managing a user's favorites.
///
/// A favorite references exactly one of a planet or a person; the service only
/// exposes per-target operations, so mixed references cannot be produced.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all favorites belonging to a user.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - The user's favorites, one entry per join row
    /// - `Err(Error::ResourceError(ResourceError::UserNotFound))` - User does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let user_repository = UserRepository::new(self.db);
        let favorite_repository = FavoriteRepository::new(self.db);

        if user_repository.get(user_id).await?.is_none() {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        let favorites = favorite_repository.get_many_by_user_id(user_id).await?;

        let favorite_dtos = favorites
            .into_iter()
            .map(|f| FavoriteDto {
                id: f.id,
                user_id: f.user_id,
                planet_id: f.planet_id,
                people_id: f.people_id,
            })
            .collect();

        Ok(favorite_dtos)
    }

    /// Adds a planet to a user's favorites.
    ///
    /// Both the user and the planet must exist before the join row is created.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite created
    /// - `Err(Error::ResourceError)` - User or planet does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_planet_favorite(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);
        let planet_repository = PlanetRepository::new(self.db);
        let favorite_repository = FavoriteRepository::new(self.db);

        if user_repository.get(user_id).await?.is_none() {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        if planet_repository.get(planet_id).await?.is_none() {
            return Err(ResourceError::PlanetNotFound(planet_id).into());
        }

        favorite_repository
            .create_planet_favorite(user_id, planet_id)
            .await?;

        Ok(())
    }

    /// Adds a person to a user's favorites.
    ///
    /// Both the user and the person must exist before the join row is created.
    pub async fn add_people_favorite(&self, user_id: i32, people_id: i32) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);
        let people_repository = PeopleRepository::new(self.db);
        let favorite_repository = FavoriteRepository::new(self.db);

        if user_repository.get(user_id).await?.is_none() {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        if people_repository.get(people_id).await?.is_none() {
            return Err(ResourceError::PersonNotFound(people_id).into());
        }

        favorite_repository
            .create_people_favorite(user_id, people_id)
            .await?;

        Ok(())
    }

    /// Removes the favorite linking a user to a planet.
    ///
    /// # Returns
    /// - `Ok(())` - Matching favorite deleted
    /// - `Err(Error::ResourceError(ResourceError::FavoriteNotFound))` - No matching favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_planet_favorite(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        let favorite = match favorite_repository
            .get_by_user_and_planet(user_id, planet_id)
            .await?
        {
            Some(favorite) => favorite,
            None => return Err(ResourceError::FavoriteNotFound(user_id).into()),
        };

        favorite_repository.delete(favorite.id).await?;

        Ok(())
    }

    /// Removes the favorite linking a user to a person.
    pub async fn remove_people_favorite(&self, user_id: i32, people_id: i32) -> Result<(), Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        let favorite = match favorite_repository
            .get_by_user_and_people(user_id, people_id)
            .await?
        {
            Some(favorite) => favorite,
            None => return Err(ResourceError::FavoriteNotFound(user_id).into()),
        };

        favorite_repository.delete(favorite.id).await?;

        Ok(())
    }
}
