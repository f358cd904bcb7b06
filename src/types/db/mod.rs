// Database entities - SeaORM models
pub mod favorite_person;
pub mod favorite_planet;
pub mod person;
pub mod planet;
pub mod user;
