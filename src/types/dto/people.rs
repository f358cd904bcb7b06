use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::person;

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
}

impl From<person::Model> for PersonResponse {
    fn from(p: person::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
            birth_year: p.birth_year,
            eye_color: p.eye_color,
            hair_color: p.hair_color,
            height: p.height,
            mass: p.mass,
            skin_color: p.skin_color,
        }
    }
}
