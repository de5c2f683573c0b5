//! Player submission and queue status DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Player, PlayerId};
use crate::error::GatewayError;

/// Request body for `POST /player`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitPlayerRequest {
    /// Player identity. Must not be empty.
    pub id: String,
    /// Skill rating. Any integer is accepted.
    pub rating: i64,
    /// Optional role tag. Defaults to the empty string.
    #[serde(default)]
    pub role: String,
}

impl TryFrom<SubmitPlayerRequest> for Player {
    type Error = GatewayError;

    fn try_from(req: SubmitPlayerRequest) -> Result<Self, Self::Error> {
        let id = PlayerId::new(req.id);
        if id.is_blank() {
            return Err(GatewayError::MissingIdentity);
        }
        Ok(Self {
            id,
            rating: req.rating,
            role: req.role,
        })
    }
}

/// Response body for `POST /player` while the pool is still filling.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WaitingResponse {
    /// Always `"waiting"`.
    pub status: String,
    /// Identity of the queued player.
    pub id: PlayerId,
    /// Human-readable status line.
    pub message: String,
}

impl WaitingResponse {
    /// Builds the waiting response for `id`.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        let message = format!("Player {id} added to the pool. Waiting for more players...");
        Self {
            status: "waiting".to_string(),
            id,
            message,
        }
    }
}

/// Response body for `GET /queue`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueueStatusResponse {
    /// Players currently waiting for a match.
    pub waiting: usize,
    /// Players consumed per match.
    pub batch_size: usize,
    /// Open WebSocket connections.
    pub connected: usize,
}
