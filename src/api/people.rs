use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::stores::PeopleStore;
use crate::types::dto::people::PersonResponse;

/// People catalog endpoints, read-only
pub struct PeopleApi {
    people_store: Arc<PeopleStore>,
}

impl PeopleApi {
    pub fn new(people_store: Arc<PeopleStore>) -> Self {
        Self { people_store }
    }
}

#[derive(Tags)]
enum PeopleTags {
    /// People catalog endpoints
    People,
}

#[OpenApi]
impl PeopleApi {
    /// List all people
    #[oai(path = "/people", method = "get", tag = "PeopleTags::People")]
    async fn list_people(&self) -> Result<Json<Vec<PersonResponse>>, ApiError> {
        let people = self.people_store.list().await?;

        Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
    }

    /// Get one person by id
    #[oai(path = "/people/:people_id", method = "get", tag = "PeopleTags::People")]
    async fn get_person(&self, people_id: Path<i32>) -> Result<Json<PersonResponse>, ApiError> {
        match self.people_store.get(people_id.0).await? {
            Some(person) => Ok(Json(person.into())),
            None => Err(ApiError::not_found("Person not found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::ActiveValue::NotSet;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

    use crate::types::db::person;

    async fn setup_test_db() -> (DatabaseConnection, PeopleApi) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let api = PeopleApi::new(Arc::new(PeopleStore::new(db.clone())));

        (db, api)
    }

    async fn seed_person(db: &DatabaseConnection, name: &str) -> person::Model {
        person::ActiveModel {
            id: NotSet,
            name: Set(Some(name.to_string())),
            birth_year: Set(Some("19BBY".to_string())),
            eye_color: Set(Some("blue".to_string())),
            hair_color: Set(Some("blond".to_string())),
            height: Set(Some("172".to_string())),
            mass: Set(Some("77".to_string())),
            skin_color: Set(Some("fair".to_string())),
        }
        .insert(db)
        .await
        .expect("Failed to seed person")
    }

    #[tokio::test]
    async fn test_list_people_returns_seeded_rows() {
        let (db, api) = setup_test_db().await;

        seed_person(&db, "Luke Skywalker").await;
        seed_person(&db, "Leia Organa").await;

        let people = api.list_people().await.unwrap().0;

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name.as_deref(), Some("Luke Skywalker"));
        assert_eq!(people[1].name.as_deref(), Some("Leia Organa"));
    }

    #[tokio::test]
    async fn test_get_person_returns_full_record() {
        let (db, api) = setup_test_db().await;

        let seeded = seed_person(&db, "Luke Skywalker").await;

        let person = api.get_person(Path(seeded.id)).await.unwrap().0;

        assert_eq!(person.id, seeded.id);
        assert_eq!(person.name.as_deref(), Some("Luke Skywalker"));
        assert_eq!(person.birth_year.as_deref(), Some("19BBY"));
        assert_eq!(person.eye_color.as_deref(), Some("blue"));
    }

    #[tokio::test]
    async fn test_get_missing_person_returns_404() {
        let (_db, api) = setup_test_db().await;

        let result = api.get_person(Path(99)).await;

        match result {
            Err(ApiError::NotFound(json)) => {
                assert_eq!(json.0.message, "Person not found");
            }
            _ => panic!("Expected NotFound error"),
        }
    }
}
