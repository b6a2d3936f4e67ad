//! # Kitchen Board
//!
//! A near-real-time, stage-partitioned view of today's orders for a kitchen
//! display, fed by a remote Order Service REST API.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Pure data** ([`model`], [`normalize`], [`board`], [`render`]) —
//!    canonical records, the mapping from the service's inconsistent rows
//!    into them, partitioning into the four stage columns, and text output.
//! 2. **Service client** ([`service`]) — the [`OrderApi`] seam plus a
//!    reqwest implementation; credentials come from an injected
//!    [`TokenProvider`].
//! 3. **Synchronizer** ([`sync`]) — a single tokio actor owning the board
//!    snapshot, refreshed on a fixed-period timer and on demand, published to
//!    subscribers over a watch channel.
//!
//! ## Reconciliation Contract
//!
//! Every successful refresh replaces the whole snapshot; the board holds no
//! authoritative state and never merges across refreshes. A failed refresh
//! changes nothing — on a kitchen display a stale board beats an error
//! dialog, and the timer is the retry mechanism.
//!
//! ## Concurrency Model
//!
//! The snapshot has exactly one writer: the [`BoardActor`] task. Requests
//! (manual refresh, stage advance, snapshot read) are messages processed
//! sequentially, so overlapping fetches and last-writer-wins races are
//! impossible by construction. Clients are cheap to clone and shut the actor
//! down by dropping every handle.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kitchen_board::{BoardActor, BoardConfig, HttpOrderApi, StaticToken};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = BoardConfig::default();
//!     let api = HttpOrderApi::new(&config.base_url, Arc::new(StaticToken::new("token")));
//!     let (actor, client) = BoardActor::new(api, &config);
//!     tokio::spawn(actor.run());
//!
//!     let mut snapshots = client.subscribe();
//!     while snapshots.changed().await.is_ok() {
//!         println!("{}", kitchen_board::render(&snapshots.borrow_and_update()));
//!     }
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockOrderApi`] scripts service responses in memory, so the
//! synchronizer's behavior (including failure paths) is testable without an
//! HTTP server. See `tests/board_actor_test.rs` for the patterns.

pub mod board;
pub mod config;
pub mod error;
pub mod mock;
pub mod model;
pub mod normalize;
pub mod render;
pub mod service;
pub mod sync;
pub mod tracing;

// Re-export core types for convenience
pub use board::{bucket, BoardSnapshot, StageColumns};
pub use config::BoardConfig;
pub use error::{BoardError, ServiceError};
pub use model::{LineItem, OrderKind, OrderRecord, Stage};
pub use normalize::{normalize_row, normalize_rows, RawOrder};
pub use render::render;
pub use service::{HttpOrderApi, OrderApi, StaticToken, TokenProvider};
pub use sync::{BoardActor, BoardClient, BoardRequest};
