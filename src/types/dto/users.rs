use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::user;

/// Body accepted by POST /user. The create endpoint echoes this exact
/// shape back to the caller instead of the persisted row.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Serialized user as returned by the listing endpoint. Password and the
/// is_active flag are never exposed.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
        }
    }
}
