//! HTTP API Layer
//!
//! This crate provides the REST API for the insurance dashboard using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for records, risk analysis and reports
//! - **Middleware**: Tracing and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let store = RecordStore::open(Box::new(JsonFileBackend::new(&config.data_dir)) as Box<dyn StorageBackend>);
//! let app = create_router(AppState::new(store, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, put},
    middleware as axum_middleware,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use core_kernel::{Clock, SystemClock};
use infra_store::{RecordStore, StorageBackend};

use crate::config::AppConfig;
use crate::middleware::request_log_middleware;
use crate::handlers::{claims, health, policyholders, reports, risk};

/// Record store behind the API, shared by all requests
pub type SharedStore = Arc<RwLock<RecordStore<Box<dyn StorageBackend>>>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates state reading the system clock
    pub fn new(store: RecordStore<Box<dyn StorageBackend>>, config: AppConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            clock: Arc::new(SystemClock),
            config: Arc::new(config),
        }
    }

    /// Replaces the clock used for timestamps and trailing-year counts
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared store, clock and configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    // Policyholder routes
    let policyholder_routes = Router::new()
        .route("/", get(policyholders::list_policyholders).post(policyholders::create_policyholder))
        .route("/:id", get(policyholders::get_policyholder))
        .route("/:id/claims", get(policyholders::list_policyholder_claims))
        .route("/:id/claim-frequency", get(policyholders::claim_frequency));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/:id", get(claims::get_claim))
        .route("/:id/status", put(claims::update_status));

    // Risk routes
    let risk_routes = Router::new()
        .route("/high-risk", get(risk::high_risk))
        .route("/by-policy-type", get(risk::by_policy_type_stats));

    // Report routes
    let report_routes = Router::new()
        .route("/monthly", get(reports::monthly))
        .route("/average-by-policy", get(reports::average_by_policy))
        .route("/highest-claim", get(reports::highest_claim))
        .route("/pending", get(reports::pending))
        .route("/dashboard", get(reports::dashboard));

    let api_routes = Router::new()
        .nest("/policyholders", policyholder_routes)
        .nest("/claims", claims_routes)
        .nest("/risk", risk_routes)
        .nest("/reports", report_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
