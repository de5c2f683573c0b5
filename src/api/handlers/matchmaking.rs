//! Player submission and queue status handlers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{QueueStatusResponse, SubmitPlayerRequest, WaitingResponse};
use crate::app_state::AppState;
use crate::domain::{Match, MatchOutcome, Player};
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/v1/player` — Submit a player for matchmaking.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed JSON, a missing or non-integer
/// rating, or an empty identity.
#[utoipa::path(
    post,
    path = "/api/v1/player",
    tag = "Matchmaking",
    summary = "Submit a player",
    description = "Queues the player. The submission that completes a batch receives the formed match; every other submission is told to wait. Connected participants are also notified over WebSocket.",
    request_body = SubmitPlayerRequest,
    responses(
        (status = 200, description = "Match formed", body = Match),
        (status = 202, description = "Player queued, waiting for more players", body = WaitingResponse),
        (status = 400, description = "Malformed submission", body = ErrorResponse),
    )
)]
pub async fn submit_player(
    State(state): State<AppState>,
    payload: Result<Json<SubmitPlayerRequest>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(req) = payload?;
    let player = Player::try_from(req)?;
    let id = player.id.clone();

    let response = match state.matchmaking.submit(player).await {
        MatchOutcome::Formed(formed) => (StatusCode::OK, Json(formed)).into_response(),
        MatchOutcome::Waiting => {
            (StatusCode::ACCEPTED, Json(WaitingResponse::new(id))).into_response()
        }
    };
    Ok(response)
}

/// `GET /api/v1/queue` — Current pool and connection counts.
#[utoipa::path(
    get,
    path = "/api/v1/queue",
    tag = "Matchmaking",
    summary = "Queue status",
    description = "Returns how many players are waiting, the batch size, and how many WebSocket connections are open.",
    responses(
        (status = 200, description = "Queue status", body = QueueStatusResponse),
    )
)]
pub async fn queue_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(QueueStatusResponse {
        waiting: state.matchmaking.waiting().await,
        batch_size: state.matchmaking.batch_size().get(),
        connected: state.connections.len().await,
    })
}

/// Matchmaking routes, mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/player", post(submit_player))
        .route("/queue", get(queue_status))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use super::*;
    use crate::config::GatewayConfig;
    use crate::domain::BatchSize;

    fn app(batch: usize) -> Router {
        let Some(batch_size) = BatchSize::new(batch) else {
            panic!("valid batch size");
        };
        let config = GatewayConfig {
            batch_size,
            ..GatewayConfig::default()
        };
        crate::api::build_router().with_state(AppState::from_config(&config))
    }

    async fn post_json(app: &Router, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/player")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()));
        let Ok(request) = request else {
            panic!("request build failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("router failed");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn waiting_then_formed() {
        let app = app(2);
        let (status, body) = post_json(&app, r#"{"id":"p0","rating":10,"role":"tank"}"#).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["status"], "waiting");
        assert_eq!(body["id"], "p0");

        let (status, body) = post_json(&app, r#"{"id":"p1","rating":20,"role":"dps"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["team1"][0]["id"], "p1");
        assert_eq!(body["team2"][0]["id"], "p0");
        assert_eq!(body["team2"][0]["role"], "tank");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) = post_json(&app(2), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1001);
    }

    #[tokio::test]
    async fn missing_rating_is_bad_request() {
        let (status, body) = post_json(&app(2), r#"{"id":"p0"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1001);
    }

    #[tokio::test]
    async fn empty_identity_is_bad_request_and_not_queued() {
        let app = app(2);
        let (status, body) = post_json(&app, r#"{"id":"","rating":5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1002);

        let (status, _) = post_json(&app, r#"{"id":"p0","rating":5}"#).await;
        assert_eq!(status, StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn queue_status_reports_waiting_players() {
        let app = app(3);
        let _ = post_json(&app, r#"{"id":"p0","rating":5}"#).await;

        let Ok(request) = Request::builder().uri("/api/v1/queue").body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("router failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(status) = serde_json::from_slice::<QueueStatusResponse>(&bytes) else {
            panic!("unexpected body");
        };
        assert_eq!(status.waiting, 1);
        assert_eq!(status.batch_size, 3);
        assert_eq!(status.connected, 0);
    }
}
