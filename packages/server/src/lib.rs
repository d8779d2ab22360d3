#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the `EnviroSense` application.
//!
//! Serves the REST API (plant recommendations, solar feasibility, mock air
//! quality, garden impact, Green Credit content, and the chat assistant)
//! and, when present, the built frontend. All data is either compiled in or
//! computed per request; nothing is persisted.

mod handlers;
pub mod interactive;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, error, middleware, web};
use enviro_sense_ai::{AssistantConfig, ChatAssistant};
use enviro_sense_content::{DailyTips, GreenCreditsGuide};
use enviro_sense_plants::PlantCatalog;
use enviro_sense_server_models::ApiError;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;
/// Default directory of the built frontend.
pub const DEFAULT_STATIC_DIR: &str = "app/dist";

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    /// Plant catalog, built once at startup.
    pub catalog: PlantCatalog,
    /// Green Credit Programme content.
    pub guide: GreenCreditsGuide,
    /// Daily tip rotation.
    pub tips: DailyTips,
    /// Chat assistant, `None` when no provider credentials are configured.
    pub assistant: Option<ChatAssistant>,
}

impl AppState {
    /// Builds the state from the embedded data sets and an optional
    /// assistant.
    #[must_use]
    pub fn new(assistant: Option<ChatAssistant>) -> Self {
        Self {
            catalog: PlantCatalog::seeded(),
            guide: GreenCreditsGuide::embedded(),
            tips: DailyTips::embedded(),
            assistant,
        }
    }
}

/// Listener and static file settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`).
    pub bind_addr: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Built frontend directory (`STATIC_DIR`). Not served if missing.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `PORT`, and `STATIC_DIR` from the process
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`. Missing or unparsable values
    /// fall back to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
        }
    }
}

/// Responds `400 {"message": "Invalid Input"}` for any extractor failure.
fn invalid_input<E>(err: E, req: &HttpRequest) -> error::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    log::debug!("Rejected {} {}: {err}", req.method(), req.path());
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiError::invalid_input()),
    )
    .into()
}

/// Registers the `/api` routes and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(invalid_input))
        .app_data(web::QueryConfig::default().error_handler(invalid_input))
        .app_data(web::PathConfig::default().error_handler(invalid_input))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health))
                .route("/plants", web::get().to(handlers::list_plants))
                .route(
                    "/plants/recommend",
                    web::post().to(handlers::recommend_plants),
                )
                .route("/plants/{id}", web::get().to(handlers::get_plant))
                .route("/solar", web::post().to(handlers::solar))
                .route("/solar/calculate", web::post().to(handlers::solar))
                .route("/aqi/{zip}", web::get().to(handlers::aqi))
                .route("/environment/{zip}", web::get().to(handlers::environment))
                .route("/garden/impact", web::post().to(handlers::garden_impact))
                .route("/green-credits", web::get().to(handlers::green_credits))
                .route("/tips/daily", web::get().to(handlers::daily_tip))
                .route("/chat/status", web::get().to(handlers::chat_status))
                .route("/chat", web::post().to(handlers::chat)),
        );
}

/// Starts the `EnviroSense` API server.
///
/// Initializes logging, builds the plant catalog and content, configures
/// the chat assistant from the environment, and starts the Actix-Web HTTP
/// server. This is a regular async function; the caller is responsible for
/// providing the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the chat assistant configuration
/// is invalid, or if the HTTP server fails to bind or encounters a runtime
/// error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Configuring chat assistant...");
    let assistant =
        ChatAssistant::from_config(&AssistantConfig::from_env()).map_err(std::io::Error::other)?;

    log::info!("Loading plant catalog and content...");
    let state = web::Data::new(AppState::new(assistant));
    log::info!("Plant catalog ready with {} plants", state.catalog.len());

    let static_dir = Some(config.static_dir.clone()).filter(|dir| dir.is_dir());
    match &static_dir {
        Some(dir) => log::info!("Serving frontend from {}", dir.display()),
        None => log::warn!(
            "Static directory {} not found; serving the API only",
            config.static_dir.display()
        ),
    }

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();
        let static_dir = static_dir.clone();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
            // Serve frontend static files (production)
            .configure(move |cfg| {
                if let Some(dir) = static_dir {
                    cfg.service(Files::new("/", dir).index_file("index.html"));
                }
            })
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().port, 8080);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("BIND_ADDR", "0.0.0.0"),
            ("PORT", "3000"),
            ("STATIC_DIR", "public"),
        ]);
        assert_eq!(cfg.bind_addr, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(config(&[("PORT", "http")]).port, DEFAULT_PORT);
    }
}
