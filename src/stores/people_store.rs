use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::InternalError;
use crate::types::db::person;

/// Repository for person rows. The catalog is read-only over HTTP, so
/// there are no mutation methods here.
pub struct PeopleStore {
    db: DatabaseConnection,
}

impl PeopleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch all people
    pub async fn list(&self) -> Result<Vec<person::Model>, InternalError> {
        person::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_people", e))
    }

    /// Fetch one person by id, None when absent
    pub async fn get(&self, id: i32) -> Result<Option<person::Model>, InternalError> {
        person::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_person", e))
    }
}
