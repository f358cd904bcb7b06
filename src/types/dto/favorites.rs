use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::{favorite_person, favorite_planet};

/// Body accepted by POST /favorite/people
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct CreateFavoritePersonRequest {
    pub user_id: i32,
    pub people_id: i32,
}

/// Body accepted by POST /favorite/planet
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct CreateFavoritePlanetRequest {
    pub user_id: i32,
    pub planet_id: i32,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct FavoritePersonResponse {
    pub id: i32,
    pub user_id: i32,
    pub people_id: i32,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct FavoritePlanetResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

/// Combined favorites listing: planet rows and person rows side by side.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub planets: Vec<FavoritePlanetResponse>,
    pub people: Vec<FavoritePersonResponse>,
}

impl From<favorite_person::Model> for FavoritePersonResponse {
    fn from(f: favorite_person::Model) -> Self {
        Self {
            id: f.id,
            user_id: f.user_id,
            people_id: f.people_id,
        }
    }
}

impl From<favorite_planet::Model> for FavoritePlanetResponse {
    fn from(f: favorite_planet::Model) -> Self {
        Self {
            id: f.id,
            user_id: f.user_id,
            planet_id: f.planet_id,
        }
    }
}
