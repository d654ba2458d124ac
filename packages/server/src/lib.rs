#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web dashboard server for the fire map application.
//!
//! Loads the fire statistics CSV and the province-boundary `GeoJSON` once
//! at startup, then serves the JSON API under `/api` and the static
//! dashboard page from `www/`. Every request recomputes its aggregation
//! synchronously over the shared read-only record table; there is no
//! background work and no mutable state after startup.

mod handlers;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use fire_map_fire_models::FireRecord;
use fire_map_geography::ProvinceAtlas;

/// Directory the static dashboard page is served from.
const WWW_DIR: &str = "www";

/// Shared application state, read-only after startup.
pub struct AppState {
    /// The cleaned fire record table.
    pub records: Vec<FireRecord>,
    /// First year with records.
    pub year_min: i32,
    /// Last year with records.
    pub year_max: i32,
    /// Province boundary layer, pre-serialized to `GeoJSON`.
    pub provinces_geojson: String,
    /// Dissolved community boundary layer, pre-serialized to `GeoJSON`.
    pub communities_geojson: String,
}

impl AppState {
    /// Builds the shared state from the loaded dataset and atlas.
    ///
    /// # Panics
    ///
    /// Panics if the record table is empty or a boundary layer cannot be
    /// serialized.
    #[must_use]
    pub fn new(records: Vec<FireRecord>, atlas: &ProvinceAtlas) -> Self {
        let year_min = records
            .iter()
            .map(|r| r.year)
            .min()
            .expect("Fire dataset is empty");
        let year_max = records
            .iter()
            .map(|r| r.year)
            .max()
            .expect("Fire dataset is empty");

        let provinces_geojson = serde_json::to_string(&atlas.provinces_feature_collection())
            .expect("Failed to serialize province boundaries");
        let communities_geojson = serde_json::to_string(&atlas.communities_feature_collection())
            .expect("Failed to serialize community boundaries");

        Self {
            records,
            year_min,
            year_max,
            provinces_geojson,
            communities_geojson,
        }
    }
}

/// Starts the fire map dashboard server.
///
/// Loads the input files, builds the shared state, and starts the
/// Actix-Web HTTP server. This is a regular async function — the caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the fire statistics CSV or the province-boundary `GeoJSON`
/// cannot be loaded.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let csv_path = fire_map_dataset::paths::fires_csv_path();
    log::info!("Loading fire records from {}...", csv_path.display());
    let (records, _) =
        fire_map_dataset::load_fire_records(&csv_path).expect("Failed to load fire records");

    let geojson_path = fire_map_dataset::paths::provinces_geojson_path();
    log::info!("Loading province boundaries from {}...", geojson_path.display());
    let atlas = fire_map_geography::load_province_atlas(&geojson_path)
        .expect("Failed to load province boundaries");

    let state = web::Data::new(AppState::new(records, &atlas));
    log::info!(
        "Serving {} fire records ({}-{})",
        state.records.len(),
        state.year_min,
        state.year_max,
    );

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/meta", web::get().to(handlers::meta))
                    .route("/summary", web::get().to(handlers::summary))
                    .route("/choropleth", web::get().to(handlers::choropleth))
                    .route("/ranking", web::get().to(handlers::ranking))
                    .route("/causes", web::get().to(handlers::causes))
                    .route("/seasonality", web::get().to(handlers::seasonality))
                    .route("/fires/major", web::get().to(handlers::major_fires))
                    .route("/geo/provinces", web::get().to(handlers::geo_provinces))
                    .route("/geo/communities", web::get().to(handlers::geo_communities)),
            )
            // Serve the dashboard page
            .service(Files::new("/", WWW_DIR).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
