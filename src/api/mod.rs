pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::auth::{seed_users, SessionManager};
use crate::config::OstrichConfig;
use crate::db::Database;
use crate::errors::OstrichError;
use crate::tools::{SecurityTools, SimulatedTools};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub sessions: Arc<SessionManager>,
    pub tools: Arc<dyn SecurityTools>,
}

impl AppState {
    pub fn new(db: Database, sessions: SessionManager, tools: Arc<dyn SecurityTools>) -> Self {
        Self {
            db,
            sessions: Arc::new(sessions),
            tools,
        }
    }
}

/// Open the store, create seed accounts and wire the simulated tooling.
pub async fn create_app_state(config: &OstrichConfig) -> Result<AppState, OstrichError> {
    let db = Database::new(&config.database.path)?;
    seed_users(&db, &config.auth.seed_users, config.auth.bcrypt_cost).await?;

    let sessions = SessionManager::from_config(&config.auth);
    let tools: Arc<dyn SecurityTools> = Arc::new(SimulatedTools::new(config.simulation.clone()));
    info!(db = %config.database.path, engine = tools.engine_name(), "Application state ready");

    Ok(AppState::new(db, sessions, tools))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/logout", post(routes::auth::logout))
        .route("/api/auth/user", get(routes::auth::current_user))
        .route("/api/scan/network", post(routes::scans::scan_network))
        .route("/api/scan/ports", post(routes::scans::scan_ports))
        .route("/api/scan/vulnerabilities", post(routes::scans::scan_vulnerabilities))
        .route("/api/scan/webapp", post(routes::scans::scan_webapp))
        .route("/api/osint/domain", post(routes::osint::collect_domain))
        .route("/api/history", get(routes::history::list_history))
        .route("/api/vulnerabilities", get(routes::history::list_vulnerabilities))
        .route("/api/vulnerabilities/:id", patch(routes::history::update_vulnerability_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
