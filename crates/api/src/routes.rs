// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration and handlers for the launcher
//! backend server.

pub mod handlers;

use axum::{Router, middleware, routing::get};
use handlers::{featured_games_handler, health_handler, hot_catalogue_handler, root_handler};

use crate::{
    metrics::metrics_handler,
    middleware::{RateLimiter, rate_limiting_middleware},
    openapi::{openapi_spec, swagger_ui},
    state::ServerState,
};

/// Create application routes with conditional rate limiting
#[allow(clippy::needless_pass_by_value)] // We need to clone the rate limiter for middleware
pub fn create_routes(rate_limiter: RateLimiter) -> Router<ServerState> {
    // Monitoring endpoints are not rate limited
    let monitoring_routes = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler));

    // Documentation endpoints are not rate limited
    let docs_routes = Router::new()
        .route("/api-doc/openapi.json", get(openapi_spec))
        .route("/swagger-ui", get(swagger_ui));

    // Catalogue endpoints - conditionally apply rate limiting
    let mut catalogue_routes = Router::new()
        .route("/catalogue/hot", get(hot_catalogue_handler))
        .route("/games/featured", get(featured_games_handler));

    // Only apply rate limiting middleware if enabled
    if rate_limiter.is_enabled() {
        catalogue_routes = catalogue_routes.layer(middleware::from_fn_with_state(
            rate_limiter.clone(),
            rate_limiting_middleware,
        ));
    }

    Router::new()
        .merge(monitoring_routes)
        .merge(docs_routes)
        .merge(catalogue_routes)
}
