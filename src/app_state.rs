//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::domain::ConnectionRegistry;
use crate::service::MatchmakingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Matchmaking service for player submissions.
    pub matchmaking: Arc<MatchmakingService>,
    /// Live WebSocket connections keyed by player identity.
    pub connections: Arc<ConnectionRegistry>,
    /// Capacity of each new connection's outbound queue.
    pub connection_buffer: usize,
}

impl AppState {
    /// Builds the pool, registry and service described by `config`.
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        let connections = Arc::new(ConnectionRegistry::new());
        let matchmaking = Arc::new(MatchmakingService::new(
            config.batch_size,
            Arc::clone(&connections),
        ));
        Self {
            matchmaking,
            connections,
            connection_buffer: config.connection_buffer,
        }
    }
}
