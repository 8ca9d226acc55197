// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! This module provides shared application state for the launcher backend
//! server, including configuration and coordinated cancellation. The
//! catalogue generator is stateless, so the state carries no data source —
//! only what the HTTP layer needs.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use utoipa::ToSchema;

use crate::config::{Environment, ServerConfig};

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    config: ServerConfig,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `cancellation_token` - Token for coordinated cancellation
    pub fn new(config: ServerConfig, cancellation_token: CancellationToken) -> Self {
        Self {
            config,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Produce the current health check document
    ///
    /// The service has no external dependencies, so a responding process is
    /// a healthy process.
    pub fn health_check(&self) -> HealthCheck {
        HealthCheck {
            status: HealthStatus::Up,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Health status of the service
#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
pub enum HealthStatus {
    /// Service is operational and responding normally
    Up,
}

/// Health check status
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
}
