use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use tutor_discovery::config::Settings;
use tutor_discovery::core::EnvelopeChain;
use tutor_discovery::models::ErrorResponse;
use tutor_discovery::routes::{self, discovery::AppState};
use tutor_discovery::services::{CatalogClient, SessionStore};

/// JSON error wrapper for payload errors
#[derive(Debug)]
pub struct JsonError(ErrorResponse);

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError(ErrorResponse::new("invalid_json", format!("Invalid JSON: {}", err), 400)).into()
}

/// Handle path parameter errors, e.g. a malformed session id
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError(ErrorResponse::new("invalid_path", format!("Invalid path: {}", err), 404)).into()
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging("info", "compact");
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting tutor discovery service...");

    // Initialize catalog client
    let envelope = EnvelopeChain::new(&settings.catalog.envelope_paths);
    let timeout = Duration::from_secs(settings.catalog.timeout_secs.unwrap_or(30));

    let catalog = CatalogClient::new(settings.catalog.endpoint.clone(), timeout, envelope)
        .map_err(|e| {
            error!("Failed to create catalog client: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;

    info!("Catalog client initialized for {}", catalog.endpoint());

    // Initialize session store
    let max_sessions = settings.sessions.max_sessions.unwrap_or(10_000);
    let session_ttl = settings.sessions.ttl_secs.unwrap_or(1800);

    let sessions = SessionStore::new(
        max_sessions,
        session_ttl,
        settings.discovery.revert_draft_on_dismiss,
    );

    info!("Session store initialized (max: {} sessions, TTL: {}s)", max_sessions, session_ttl);

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        sessions: Arc::new(sessions),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
