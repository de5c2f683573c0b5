//! Handle to a live WebSocket connection.
//!
//! A [`ConnectionHandle`] pairs a [`ConnectionId`] with the sending half of
//! the bounded queue drained by that connection's task. The task is the
//! only writer on its socket, so frames sent through one handle are never
//! interleaved.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;

/// Unique identifier for one WebSocket connection.
///
/// Wraps a UUID v4 generated when the socket is upgraded. A reconnecting
/// player gets a new id, which is what lets the registry tell a stale
/// connection apart from its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(uuid::Uuid);

impl ConnectionId {
    /// Creates a new random `ConnectionId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frames queued for a connection task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Serialized JSON text frame.
    Text(Arc<str>),
    /// A newer connection took over this identity; close the socket.
    Superseded,
}

/// Why a frame could not be queued for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The connection task has exited.
    #[error("connection closed")]
    Closed,
    /// The connection's outbound queue is full.
    #[error("connection queue full")]
    Full,
}

impl<T> From<mpsc::error::TrySendError<T>> for DeliveryError {
    fn from(err: mpsc::error::TrySendError<T>) -> Self {
        match err {
            mpsc::error::TrySendError::Full(_) => Self::Full,
            mpsc::error::TrySendError::Closed(_) => Self::Closed,
        }
    }
}

/// Cloneable sender for one live connection.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    id: ConnectionId,
    tx: mpsc::Sender<Outbound>,
}

impl ConnectionHandle {
    /// Wraps the sending half of a connection's outbound queue.
    #[must_use]
    pub fn new(tx: mpsc::Sender<Outbound>) -> Self {
        Self {
            id: ConnectionId::new(),
            tx,
        }
    }

    /// Creates a handle together with the receiver its task should drain.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Outbound>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }

    /// Returns the connection identifier.
    #[must_use]
    pub const fn id(&self) -> ConnectionId {
        self.id
    }

    /// Queues a text frame without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Closed`] if the connection task is gone and
    /// [`DeliveryError::Full`] if its queue has no free slot.
    pub fn send(&self, payload: Arc<str>) -> Result<(), DeliveryError> {
        self.tx.try_send(Outbound::Text(payload))?;
        Ok(())
    }

    /// Asks the connection task to close because a newer connection
    /// replaced it. Best effort: a full or closed queue is ignored.
    pub fn supersede(&self) {
        let _ = self.tx.try_send(Outbound::Superseded);
    }
}
