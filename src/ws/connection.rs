//! Per-connection task.
//!
//! Each upgraded socket gets one task that owns both halves of the socket.
//! It registers the connection, writes queued match frames, and watches the
//! read side only to detect closure. On exit it unregisters itself.

use std::sync::Arc;

use axum::extract::ws::{CloseFrame, Message, WebSocket, close_code};
use futures_util::{SinkExt, StreamExt};

use crate::domain::{ConnectionHandle, ConnectionRegistry, Outbound, PlayerId};

/// Runs a registered WebSocket connection until it closes.
///
/// - Inbound frames are ignored; a close frame, read error or end of
///   stream ends the task.
/// - [`Outbound::Text`] frames are written in queue order.
/// - [`Outbound::Superseded`] sends a close frame and ends the task.
pub async fn run_connection(
    socket: WebSocket,
    player: PlayerId,
    registry: Arc<ConnectionRegistry>,
    buffer: usize,
) {
    let (handle, mut outbound) = ConnectionHandle::channel(buffer);
    let connection_id = handle.id();
    if let Some(previous) = registry.register(handle, player.clone()).await {
        previous.supersede();
    }

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Incoming frame from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(%player, error = %err, "ws read failed");
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
            // Frame queued by the notifier
            frame = outbound.recv() => {
                match frame {
                    Some(Outbound::Text(text)) => {
                        if ws_tx.send(Message::text(text.to_string())).await.is_err() {
                            break;
                        }
                    }
                    Some(Outbound::Superseded) => {
                        let close = CloseFrame {
                            code: close_code::POLICY,
                            reason: String::from("superseded by a newer connection").into(),
                        };
                        let _ = ws_tx.send(Message::Close(Some(close))).await;
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    registry.unregister(connection_id).await;
    tracing::debug!(%player, connection = %connection_id, "ws connection closed");
}
