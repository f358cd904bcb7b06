use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::stores::UserStore;
use crate::types::dto::users::{CreateUserRequest, UserResponse};

/// User API endpoints
pub struct UserApi {
    user_store: Arc<UserStore>,
}

impl UserApi {
    /// Create a new UserApi with the given UserStore
    pub fn new(user_store: Arc<UserStore>) -> Self {
        Self { user_store }
    }
}

/// API tags for user endpoints
#[derive(Tags)]
enum UserTags {
    /// User endpoints
    Users,
}

#[OpenApi]
impl UserApi {
    /// List all registered users
    #[oai(path = "/user", method = "get", tag = "UserTags::Users")]
    async fn list_users(&self) -> Result<Json<Vec<UserResponse>>, ApiError> {
        let users = self.user_store.list().await?;

        Ok(Json(users.into_iter().map(UserResponse::from).collect()))
    }

    /// Create a user
    ///
    /// Echoes the submitted body back to the caller; the generated id is
    /// not part of the response.
    #[oai(path = "/user", method = "post", tag = "UserTags::Users")]
    async fn create_user(
        &self,
        body: Json<CreateUserRequest>,
    ) -> Result<Json<CreateUserRequest>, ApiError> {
        self.user_store
            .create(
                body.first_name.clone(),
                body.last_name.clone(),
                body.email.clone(),
                body.password.clone(),
            )
            .await?;

        Ok(Json(body.0))
    }

    /// Delete a user by id
    #[oai(path = "/user/:user_id", method = "delete", tag = "UserTags::Users")]
    async fn delete_user(&self, user_id: Path<i32>) -> Result<Json<String>, ApiError> {
        let deleted = self.user_store.delete_by_id(user_id.0).await?;

        if !deleted {
            return Err(ApiError::not_found("User not found"));
        }

        Ok(Json("ok".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection, EntityTrait};

    use crate::types::db::user;

    async fn setup_test_db() -> (DatabaseConnection, UserApi) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let api = UserApi::new(Arc::new(UserStore::new(db.clone())));

        (db, api)
    }

    fn luke_request() -> Json<CreateUserRequest> {
        Json(CreateUserRequest {
            first_name: "Luke".to_string(),
            last_name: "Skywalker".to_string(),
            email: "luke@rebellion.org".to_string(),
            password: "red5standingby".to_string(),
        })
    }

    #[tokio::test]
    async fn test_list_users_starts_empty() {
        let (_db, api) = setup_test_db().await;

        let result = api.list_users().await.unwrap();

        assert!(result.0.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_echoes_request_body() {
        let (_db, api) = setup_test_db().await;

        let result = api.create_user(luke_request()).await.unwrap();

        assert_eq!(result.0.first_name, "Luke");
        assert_eq!(result.0.last_name, "Skywalker");
        assert_eq!(result.0.email, "luke@rebellion.org");
        assert_eq!(result.0.password, "red5standingby");
    }

    #[tokio::test]
    async fn test_create_then_list_contains_email_once() {
        let (_db, api) = setup_test_db().await;

        api.create_user(luke_request()).await.unwrap();

        let users = api.list_users().await.unwrap().0;
        let matching = users
            .iter()
            .filter(|u| u.email == "luke@rebellion.org")
            .count();

        assert_eq!(matching, 1);
    }

    #[tokio::test]
    async fn test_created_user_is_persisted_inactive() {
        let (db, api) = setup_test_db().await;

        api.create_user(luke_request()).await.unwrap();

        let stored = user::Entity::find()
            .one(&db)
            .await
            .expect("Failed to query user")
            .expect("User row missing");

        assert_eq!(stored.email, "luke@rebellion.org");
        assert_eq!(stored.first_name.as_deref(), Some("Luke"));
        assert!(!stored.is_active);
    }

    #[tokio::test]
    async fn test_delete_user_returns_ok_and_removes_row() {
        let (db, api) = setup_test_db().await;

        api.create_user(luke_request()).await.unwrap();

        let stored = user::Entity::find()
            .one(&db)
            .await
            .expect("Failed to query user")
            .expect("User row missing");

        let result = api.delete_user(Path(stored.id)).await.unwrap();
        assert_eq!(result.0, "ok");

        let remaining = user::Entity::find()
            .all(&db)
            .await
            .expect("Failed to query users");
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_user_returns_404() {
        let (_db, api) = setup_test_db().await;

        let result = api.delete_user(Path(42)).await;

        match result {
            Err(ApiError::NotFound(json)) => {
                assert_eq!(json.0.message, "User not found");
            }
            _ => panic!("Expected NotFound error"),
        }
    }
}
