//! Axum WebSocket upgrade handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::ws::{WebSocketUpgrade, rejection::WebSocketUpgradeRejection};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::connection::run_connection;
use crate::app_state::AppState;
use crate::domain::PlayerId;
use crate::error::GatewayError;

/// Query parameters accepted by `GET /ws`.
#[derive(Debug, Deserialize)]
pub struct ConnectParams {
    /// Identity this connection receives matches for.
    #[serde(default)]
    pub id: Option<String>,
}

/// `GET /ws?id=<player>` — Upgrade HTTP connection to WebSocket.
///
/// The identity is validated before the upgrade is inspected, so a bad
/// query always gets the JSON error body.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] if the query string does not
/// parse and [`GatewayError::MissingIdentity`] if `id` is absent or blank.
pub async fn ws_handler(
    State(state): State<AppState>,
    params: Result<Query<ConnectParams>, QueryRejection>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Result<Response, GatewayError> {
    let Query(params) = params?;
    let player = params
        .id
        .map(PlayerId::new)
        .filter(|id| !id.is_blank())
        .ok_or(GatewayError::MissingIdentity)?;

    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    let registry = std::sync::Arc::clone(&state.connections);
    let buffer = state.connection_buffer;
    Ok(ws
        .on_upgrade(move |socket| run_connection(socket, player, registry, buffer))
        .into_response())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    use super::*;
    use crate::config::GatewayConfig;

    fn app() -> Router {
        Router::new()
            .route("/ws", get(ws_handler))
            .with_state(AppState::from_config(&GatewayConfig::default()))
    }

    async fn get_ws(uri: &str) -> (StatusCode, serde_json::Value) {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = app().oneshot(request).await else {
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
    async fn malformed_query_gets_json_error() {
        let (status, body) = get_ws("/ws?id=a&id=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1001);
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn missing_or_blank_identity_gets_json_error() {
        for uri in ["/ws", "/ws?id=", "/ws?id=%20%20"] {
            let (status, body) = get_ws(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"]["code"], 1002, "{uri}");
        }
    }

    #[tokio::test]
    async fn plain_request_with_identity_is_not_upgraded() {
        let Ok(request) = Request::builder().uri("/ws?id=p1").body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router failed");
        };
        assert!(response.status().is_client_error());
        assert_ne!(response.status(), StatusCode::SWITCHING_PROTOCOLS);
    }
}
