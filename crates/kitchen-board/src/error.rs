//! # Error Types
//!
//! Centralized error definitions for the board. Service errors cover the
//! three failure classes the synchronizer tolerates (transport, HTTP status,
//! payload); board errors cover loss of the actor itself.

/// Failures talking to the Order Service.
///
/// The synchronizer catches all of these at the call site, logs them, and
/// keeps the previous snapshot; none of them propagate to the operator.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("order service returned HTTP {0}")]
    Status(u16),
    #[error("unexpected payload: {0}")]
    Payload(String),
    #[error("no auth token available")]
    NoToken,
}

/// Failures communicating with the board actor.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board actor closed")]
    ActorClosed,
    #[error("board actor dropped response channel")]
    ActorDropped,
}
