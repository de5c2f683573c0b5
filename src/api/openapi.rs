//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{QueueStatusResponse, SubmitPlayerRequest, WaitingResponse};
use crate::api::handlers::{matchmaking, system};
use crate::domain::{Match, Player, PlayerId};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "matchmaking-gateway",
        description = "Queue players, form rating-balanced teams, push matches over WebSocket."
    ),
    paths(
        matchmaking::submit_player,
        matchmaking::queue_status,
        system::health_handler,
    ),
    components(schemas(
        SubmitPlayerRequest,
        WaitingResponse,
        QueueStatusResponse,
        Match,
        Player,
        PlayerId,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Matchmaking", description = "Player submission and queue status"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
