// API layer - HTTP endpoints
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod users;

pub use favorites::FavoriteApi;
pub use health::HealthApi;
pub use people::PeopleApi;
pub use planets::PlanetApi;
pub use users::UserApi;
