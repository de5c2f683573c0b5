//! WebSocket layer: connection registration and match delivery.
//!
//! The endpoint at `/ws?id=<player>` registers a persistent connection for
//! a player identity. Formed matches are pushed to it as JSON text frames.

pub mod connection;
pub mod handler;
