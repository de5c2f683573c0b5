//! # matchmaking-gateway
//!
//! Real-time matchmaking service. Players are submitted over HTTP and
//! queued in a shared pool; every time a full batch is waiting, the batch
//! is split into two rating-balanced teams and the match is pushed to each
//! participant's WebSocket connection.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)  ──── POST /api/v1/player
//!     ├── WS Handler (ws/)      ──── GET  /ws?id=<player>
//!     │
//!     ├── MatchmakingService (service/)
//!     │
//!     ├── PlayerPool ── balancer::split (domain/)
//!     └── MatchNotifier ── ConnectionRegistry (domain/)
//! ```
//!
//! The pool and the registry are separate locks and no code path holds
//! both. Notification happens after the pool lock is released.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod server;
pub mod service;
pub mod ws;
