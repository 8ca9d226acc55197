// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Launcher Backend Server Implementation
//!
//! This crate provides the main HTTP server for the Neo launcher backend,
//! built with Axum and designed for production use with comprehensive
//! configuration, middleware, and graceful shutdown capabilities. The
//! catalogue semantics live in the `catalogue` crate; this crate is the
//! HTTP wiring around them.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration and environment management with hierarchical loading
//! - [`docs`]: Aggregated `OpenAPI` document definition for the service
//! - [`error`]: Error types and HTTP response handling with proper status codes
//! - [`extractors`]: Query extraction with detailed 400 responses for malformed parameters
//! - [`state`]: Shared application state management with cancellation token support
//! - [`server`]: Main server implementation, lifecycle, and coordinated shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//! - [`middleware`]: Rate limiting and cross-cutting concerns
//! - [`metrics`]: Prometheus metrics and the text-format exporter endpoint
//! - [`openapi`]: `OpenAPI` specification and Swagger UI endpoints for API documentation
//!
//! # Key Features
//!
//! - **Deterministic Catalogue**: Pure request-scoped generation, no data source
//! - **Graceful Shutdown**: Coordinated termination using `CancellationToken` with timeouts
//! - **Rate Limiting**: IP-based request limiting with configurable requests per minute
//! - **Wide-Open CORS**: The launcher frontend is served from arbitrary origins
//! - **Comprehensive Middleware**: Request tracing, timeouts, and error handling

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod metrics;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Environment, RateLimitingConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{Server, ShutdownConfig};
pub use state::{HealthCheck, ServerState};
