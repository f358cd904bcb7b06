use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::stores::PlanetStore;
use crate::types::dto::planets::PlanetResponse;

/// Planet catalog endpoints, read-only
pub struct PlanetApi {
    planet_store: Arc<PlanetStore>,
}

impl PlanetApi {
    pub fn new(planet_store: Arc<PlanetStore>) -> Self {
        Self { planet_store }
    }
}

#[derive(Tags)]
enum PlanetTags {
    /// Planet catalog endpoints
    Planets,
}

#[OpenApi]
impl PlanetApi {
    /// List all planets
    #[oai(path = "/planet", method = "get", tag = "PlanetTags::Planets")]
    async fn list_planets(&self) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
        let planets = self.planet_store.list().await?;

        Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
    }

    /// Get one planet by id
    #[oai(path = "/planet/:planet_id", method = "get", tag = "PlanetTags::Planets")]
    async fn get_planet(&self, planet_id: Path<i32>) -> Result<Json<PlanetResponse>, ApiError> {
        match self.planet_store.get(planet_id.0).await? {
            Some(planet) => Ok(Json(planet.into())),
            None => Err(ApiError::not_found("Planet not found")),
        }
    }
}
