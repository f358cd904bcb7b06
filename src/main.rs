mod api;
mod config;
mod errors;
mod stores;
mod types;

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::middleware::{Cors, NormalizePath, TrailingSlash};
use poem::{listener::TcpListener, EndpointExt, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use api::{FavoriteApi, HealthApi, PeopleApi, PlanetApi, UserApi};
use config::{init_logging, Settings};
use stores::{FavoriteStore, PeopleStore, PlanetStore, UserStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = Settings::from_env().expect("Invalid configuration");

    let db: DatabaseConnection = Database::connect(settings.database_url())
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", settings.database_url());

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database schema is up to date");

    let user_api = UserApi::new(Arc::new(UserStore::new(db.clone())));
    let people_api = PeopleApi::new(Arc::new(PeopleStore::new(db.clone())));
    let planet_api = PlanetApi::new(Arc::new(PlanetStore::new(db.clone())));
    let favorite_api = FavoriteApi::new(Arc::new(FavoriteStore::new(db.clone())));

    // Create OpenAPI service with all resource APIs
    let api_service = OpenApiService::new(
        (HealthApi, user_api, people_api, planet_api, favorite_api),
        "Holocron Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", settings.server_address()));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Trailing slashes are trimmed so /favorite/ and /favorite are the
    // same route, and CORS is open to any origin.
    let app = Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(NormalizePath::new(TrailingSlash::Trim))
        .with(Cors::new());

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!(
        "Swagger UI available at http://{}/swagger",
        settings.server_address()
    );

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await
}
