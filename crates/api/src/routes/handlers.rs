// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! This module provides HTTP request handlers for the launcher backend
//! server: the root banner, the two catalogue endpoints, and the health
//! check. Catalogue handlers are thin adapters over the generator crate —
//! parameter extraction and metrics on this side, generation on the other.

use axum::{Json, extract::State};
use catalogue::{FeaturedGames, HotCatalogue, PageRequest};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    extractors::QueryExtractor,
    metrics,
    state::{HealthCheck, ServerState},
};

/// Root banner message, kept byte-compatible with the launcher frontend.
pub const ROOT_MESSAGE: &str = "Neo Launcher Backend is running!";

/// Response body for the root endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RootMessage {
    /// Fixed service banner
    #[schema(example = "Neo Launcher Backend is running!")]
    pub message: String,
}

/// Root endpoint handler
///
/// External monitoring uses this banner to confirm the service process is up.
#[utoipa::path(
    get,
    path = "/",
    tag = "monitoring",
    summary = "Service banner",
    description = "Returns a fixed banner message confirming the service process is running.",
    responses(
        (status = 200, description = "Service is running", body = RootMessage)
    )
)]
pub async fn root_handler() -> Json<RootMessage> {
    metrics::inc_requests("root");
    Json(RootMessage {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// Hot catalogue endpoint handler
///
/// Generates a deterministic page of placeholder game records plus the fixed
/// developer list. `take` and `skip` are accepted as signed integers and
/// normalized: negatives clamp to 0, `take` is capped at 500.
#[utoipa::path(
    get,
    path = "/catalogue/hot",
    tag = "catalogue",
    summary = "Paginated hot catalogue",
    description = "Returns a deterministically generated page of game records with ids skip+1..=skip+take, together with a fixed list of five developer records. Negative parameters clamp to 0; take is capped at 500.",
    params(
        ("take" = Option<i64>, Query, description = "Number of records to generate (default 12, capped at 500)"),
        ("skip" = Option<i64>, Query, description = "Offset into the synthetic id space (default 0)")
    ),
    responses(
        (status = 200, description = "Generated catalogue page", body = HotCatalogue),
        (status = 400, description = "Malformed take/skip parameters", body = String)
    )
)]
pub async fn hot_catalogue_handler(
    QueryExtractor(page): QueryExtractor<PageRequest>,
) -> Json<HotCatalogue> {
    metrics::inc_requests("catalogue_hot");
    metrics::observe_page_size(page.take());
    Json(catalogue::hot_catalogue(page))
}

/// Featured games endpoint handler
#[utoipa::path(
    get,
    path = "/games/featured",
    tag = "catalogue",
    summary = "Featured games list",
    description = "Returns the fixed list of four featured game records with ids 1..=4.",
    responses(
        (status = 200, description = "Featured games list", body = FeaturedGames)
    )
)]
pub async fn featured_games_handler() -> Json<FeaturedGames> {
    metrics::inc_requests("games_featured");
    Json(catalogue::featured_games())
}

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "monitoring",
    summary = "Health check endpoint",
    description = "Returns the current health status of the service including version and environment information.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck)
    )
)]
pub async fn health_handler(State(state): State<ServerState>) -> Json<HealthCheck> {
    Json(state.health_check())
}
