use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::stores::FavoriteStore;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::favorites::{
    CreateFavoritePersonRequest, CreateFavoritePlanetRequest, FavoritePersonResponse,
    FavoritePlanetResponse, FavoritesResponse,
};

/// Favorites API endpoints
///
/// Favorites are bare join rows. Inserts accept ids that reference nothing
/// and pairs that already exist; deletes key on the target id and remove
/// the oldest matching row.
pub struct FavoriteApi {
    favorite_store: Arc<FavoriteStore>,
}

impl FavoriteApi {
    /// Create a new FavoriteApi with the given FavoriteStore
    pub fn new(favorite_store: Arc<FavoriteStore>) -> Self {
        Self { favorite_store }
    }
}

/// API tags for favorites endpoints
#[derive(Tags)]
enum FavoriteTags {
    /// Favorites endpoints
    Favorites,
}

#[OpenApi]
impl FavoriteApi {
    /// List all favorites, planets and people side by side
    #[oai(path = "/favorite", method = "get", tag = "FavoriteTags::Favorites")]
    async fn list_favorites(&self) -> Result<Json<FavoritesResponse>, ApiError> {
        let planets = self.favorite_store.list_planets().await?;
        let people = self.favorite_store.list_people().await?;

        Ok(Json(FavoritesResponse {
            planets: planets.into_iter().map(FavoritePlanetResponse::from).collect(),
            people: people.into_iter().map(FavoritePersonResponse::from).collect(),
        }))
    }

    /// List favorite-person rows
    #[oai(path = "/favorite/people", method = "get", tag = "FavoriteTags::Favorites")]
    async fn list_favorite_people(&self) -> Result<Json<Vec<FavoritePersonResponse>>, ApiError> {
        let favorites = self.favorite_store.list_people().await?;

        Ok(Json(
            favorites.into_iter().map(FavoritePersonResponse::from).collect(),
        ))
    }

    /// Mark a person as a user's favorite
    #[oai(path = "/favorite/people", method = "post", tag = "FavoriteTags::Favorites")]
    async fn add_favorite_person(
        &self,
        body: Json<CreateFavoritePersonRequest>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.favorite_store
            .add_person(body.user_id, body.people_id)
            .await?;

        Ok(Json(MessageResponse {
            msg: "Its OK".to_string(),
        }))
    }

    /// Remove the first favorite row for a person
    #[oai(
        path = "/favorite/people/:people_id",
        method = "delete",
        tag = "FavoriteTags::Favorites"
    )]
    async fn delete_favorite_person(
        &self,
        people_id: Path<i32>,
    ) -> Result<Json<String>, ApiError> {
        let removed = self.favorite_store.remove_first_person(people_id.0).await?;

        if !removed {
            return Err(ApiError::not_found("Favorite character not found"));
        }

        Ok(Json("Favorite character deletion successful".to_string()))
    }

    /// List favorite-planet rows
    #[oai(path = "/favorite/planet", method = "get", tag = "FavoriteTags::Favorites")]
    async fn list_favorite_planets(&self) -> Result<Json<Vec<FavoritePlanetResponse>>, ApiError> {
        let favorites = self.favorite_store.list_planets().await?;

        Ok(Json(
            favorites.into_iter().map(FavoritePlanetResponse::from).collect(),
        ))
    }

    /// Mark a planet as a user's favorite
    #[oai(path = "/favorite/planet", method = "post", tag = "FavoriteTags::Favorites")]
    async fn add_favorite_planet(
        &self,
        body: Json<CreateFavoritePlanetRequest>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.favorite_store
            .add_planet(body.user_id, body.planet_id)
            .await?;

        Ok(Json(MessageResponse {
            msg: "Its OK".to_string(),
        }))
    }

    /// Remove the first favorite row for a planet
    #[oai(
        path = "/favorite/planet/:planet_id",
        method = "delete",
        tag = "FavoriteTags::Favorites"
    )]
    async fn delete_favorite_planet(
        &self,
        planet_id: Path<i32>,
    ) -> Result<Json<String>, ApiError> {
        let removed = self.favorite_store.remove_first_planet(planet_id.0).await?;

        if !removed {
            return Err(ApiError::not_found("Favorite planet not found"));
        }

        Ok(Json("Favorite planet deletion successful".to_string()))
    }
}
