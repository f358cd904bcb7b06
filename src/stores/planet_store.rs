use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::InternalError;
use crate::types::db::planet;

/// Repository for planet rows, read-only like the people catalog.
pub struct PlanetStore {
    db: DatabaseConnection,
}

impl PlanetStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<planet::Model>, InternalError> {
        planet::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_planets", e))
    }

    pub async fn get(&self, id: i32) -> Result<Option<planet::Model>, InternalError> {
        planet::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_planet", e))
    }
}
