mod common;

use common::setup_test_db;
use holocron_backend::stores::{FavoriteStore, PeopleStore, UserStore};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};

use holocron_backend::types::db::person;

#[tokio::test]
async fn deleting_a_user_leaves_favorite_rows_behind() {
    let db = setup_test_db().await;
    let user_store = UserStore::new(db.clone());
    let favorite_store = FavoriteStore::new(db.clone());

    let user = user_store
        .create(
            "Han".to_string(),
            "Solo".to_string(),
            "han@falcon.net".to_string(),
            "nevertellmetheodds".to_string(),
        )
        .await
        .expect("Failed to create user");

    favorite_store
        .add_person(user.id, 1)
        .await
        .expect("Failed to add favorite");
    favorite_store
        .add_planet(user.id, 4)
        .await
        .expect("Failed to add favorite");

    let deleted = user_store
        .delete_by_id(user.id)
        .await
        .expect("Failed to delete user");
    assert!(deleted);

    // No cascade: the join rows now dangle.
    let people = favorite_store.list_people().await.unwrap();
    let planets = favorite_store.list_planets().await.unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(planets.len(), 1);
    assert_eq!(people[0].user_id, user.id);
}

#[tokio::test]
async fn duplicate_favorites_are_stored_as_distinct_rows() {
    let db = setup_test_db().await;
    let favorite_store = FavoriteStore::new(db.clone());

    let first = favorite_store.add_person(1, 2).await.unwrap();
    let second = favorite_store.add_person(1, 2).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(favorite_store.list_people().await.unwrap().len(), 2);

    // Removing twice drains both duplicates, in id order.
    assert!(favorite_store.remove_first_person(2).await.unwrap());
    let remaining = favorite_store.list_people().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    assert!(favorite_store.remove_first_person(2).await.unwrap());
    assert!(!favorite_store.remove_first_person(2).await.unwrap());
}

#[tokio::test]
async fn people_catalog_reads_round_trip() {
    let db = setup_test_db().await;
    let people_store = PeopleStore::new(db.clone());

    let seeded = person::ActiveModel {
        id: NotSet,
        name: Set(Some("Obi-Wan Kenobi".to_string())),
        birth_year: Set(Some("57BBY".to_string())),
        eye_color: Set(Some("blue-gray".to_string())),
        hair_color: Set(Some("auburn".to_string())),
        height: Set(Some("182".to_string())),
        mass: Set(Some("77".to_string())),
        skin_color: Set(Some("fair".to_string())),
    }
    .insert(&db)
    .await
    .expect("Failed to seed person");

    let fetched = people_store
        .get(seeded.id)
        .await
        .unwrap()
        .expect("Person should exist");
    assert_eq!(fetched.name.as_deref(), Some("Obi-Wan Kenobi"));

    assert!(people_store.get(seeded.id + 1).await.unwrap().is_none());
    assert_eq!(people_store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_email_is_rejected_by_the_schema() {
    let db = setup_test_db().await;
    let user_store = UserStore::new(db.clone());

    user_store
        .create(
            "Luke".to_string(),
            "Skywalker".to_string(),
            "luke@rebellion.org".to_string(),
            "red5standingby".to_string(),
        )
        .await
        .expect("Failed to create user");

    let result = user_store
        .create(
            "Another".to_string(),
            "Luke".to_string(),
            "luke@rebellion.org".to_string(),
            "different".to_string(),
        )
        .await;

    assert!(result.is_err());
}
