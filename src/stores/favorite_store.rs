use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::{favorite_person, favorite_planet};

/// Repository for both favorite join tables.
///
/// Inserts do not check that the referenced user or target exists, and
/// duplicates are accepted; the schema carries no constraints beyond the
/// primary key.
pub struct FavoriteStore {
    db: DatabaseConnection,
}

impl FavoriteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch all favorite-person rows
    pub async fn list_people(&self) -> Result<Vec<favorite_person::Model>, InternalError> {
        favorite_person::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_favorite_people", e))
    }

    /// Fetch all favorite-planet rows
    pub async fn list_planets(&self) -> Result<Vec<favorite_planet::Model>, InternalError> {
        favorite_planet::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_favorite_planets", e))
    }

    /// Insert a favorite-person row
    pub async fn add_person(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<favorite_person::Model, InternalError> {
        let favorite = favorite_person::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            people_id: Set(people_id),
        };

        favorite
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("add_favorite_person", e))
    }

    /// Insert a favorite-planet row
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<favorite_planet::Model, InternalError> {
        let favorite = favorite_planet::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            planet_id: Set(planet_id),
        };

        favorite
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("add_favorite_planet", e))
    }

    /// Delete the oldest favorite-person row for the given person
    ///
    /// Rows are matched on people_id, not on the favorite row id. When
    /// duplicates exist only the lowest-id row goes; returns false when no
    /// row matches.
    pub async fn remove_first_person(&self, people_id: i32) -> Result<bool, InternalError> {
        let favorite = favorite_person::Entity::find()
            .filter(favorite_person::Column::PeopleId.eq(people_id))
            .order_by_asc(favorite_person::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_favorite_person", e))?;

        match favorite {
            Some(favorite) => {
                favorite
                    .delete(&self.db)
                    .await
                    .map_err(|e| InternalError::database("remove_favorite_person", e))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete the oldest favorite-planet row for the given planet
    pub async fn remove_first_planet(&self, planet_id: i32) -> Result<bool, InternalError> {
        let favorite = favorite_planet::Entity::find()
            .filter(favorite_planet::Column::PlanetId.eq(planet_id))
            .order_by_asc(favorite_planet::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_favorite_planet", e))?;

        match favorite {
            Some(favorite) => {
                favorite
                    .delete(&self.db)
                    .await
                    .map_err(|e| InternalError::database("remove_favorite_planet", e))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
