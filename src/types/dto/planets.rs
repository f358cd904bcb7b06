use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::planet;

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: Option<String>,
    pub climate: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
}

impl From<planet::Model> for PlanetResponse {
    fn from(p: planet::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
            climate: p.climate,
            diameter: p.diameter,
            gravity: p.gravity,
            terrain: p.terrain,
        }
    }
}
