//! Inbound Orders API Library
//!
//! Records warehouse inbound orders and lists them back over HTTP.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Wire the default service stack on top of `db`.
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Versioned API routes, mounted under `/api/v1`.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(handlers::inbound_orders::inbound_order_routes())
}

/// Full application router: versioned API, health probes and the OpenAPI
/// document, wrapped in timeout, HTTP tracing and request-id layers.
pub fn app(state: AppState) -> Router {
    let db = state.db.clone();
    let request_timeout = std::time::Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .nest("/api/v1", api_v1_routes())
        .with_state(state)
        .merge(health::health_routes(db))
        .merge(openapi::openapi_routes())
        .layer(axum::middleware::from_fn_with_state(
            request_timeout,
            middleware_helpers::request_timeout_middleware,
        ))
        .layer(crate::tracing::configure_http_tracing())
        // Outermost so the trace span can pick up the id
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
}
