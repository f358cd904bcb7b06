use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};

use crate::errors::InternalError;
use crate::types::db::user;

/// Repository for user rows
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new UserStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch all users
    pub async fn list(&self) -> Result<Vec<user::Model>, InternalError> {
        user::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_users", e))
    }

    /// Insert a user and return the persisted row
    ///
    /// Uniqueness of the email column is enforced by the schema, not here;
    /// a duplicate surfaces as a database error.
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> Result<user::Model, InternalError> {
        let new_user = user::ActiveModel {
            id: NotSet, // Let auto-increment handle this
            first_name: Set(Some(first_name)),
            last_name: Set(Some(last_name)),
            email: Set(email),
            password: Set(password),
            is_active: Set(false),
        };

        new_user
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_user", e))
    }

    /// Delete a user by id
    ///
    /// Returns false when no user with that id exists. Favorite rows
    /// referencing the user are left untouched.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, InternalError> {
        let user = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user", e))?;

        match user {
            Some(user) => {
                user.delete(&self.db)
                    .await
                    .map_err(|e| InternalError::database("delete_user", e))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
