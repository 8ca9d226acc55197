// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` document definition
//!
//! Aggregates the annotated handlers and schemas into the service's
//! `OpenAPI` specification.

use utoipa::OpenApi;

use crate::{routes::handlers, state};

/// `OpenAPI` documentation for the launcher backend API
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Neo Launcher Backend API",
        description = "Backend API service for the Neo game launcher: deterministic catalogue generation plus monitoring endpoints."
    ),
    paths(
        handlers::root_handler,
        handlers::hot_catalogue_handler,
        handlers::featured_games_handler,
        handlers::health_handler,
    ),
    components(schemas(
        catalogue::GameRecord,
        catalogue::DeveloperRecord,
        catalogue::HotCatalogue,
        catalogue::FeaturedGames,
        handlers::RootMessage,
        state::HealthCheck,
        state::HealthStatus,
    )),
    tags(
        (name = "catalogue", description = "Deterministic catalogue generation endpoints"),
        (name = "monitoring", description = "Service banner and health endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_all_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/catalogue/hot", "/games/featured", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
