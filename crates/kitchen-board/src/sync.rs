//! # Order Board Synchronizer
//!
//! The board is a single tokio task that owns the current [`BoardSnapshot`]
//! and keeps it reconciled with the Order Service. It is the "server" half of
//! the actor pattern: requests arrive over an mpsc channel and are processed
//! one at a time, so the snapshot has exactly one writer and no locks.
//!
//! # Scheduling
//! A `tokio::time::interval` inside the run loop drives a refresh on every
//! tick (the first tick fires immediately, so the board is never blank longer
//! than one round trip). Manual refreshes and stage advances arrive as
//! messages on the same loop. Because every refresh executes to completion
//! inside the actor before the next message is taken, two fetches can never
//! be in flight at once and a stale response can never overwrite a fresher
//! one.
//!
//! # Failure semantics
//! Every service error is caught here, logged, and swallowed. A failed
//! refresh leaves the previous snapshot untouched; the next tick is the retry
//! mechanism. The operator sees a stale board, never an error dialog — on a
//! kitchen display, availability of a slightly old view beats surfacing every
//! transient network blip.

use crate::board::{bucket, BoardSnapshot};
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::model::Stage;
use crate::normalize::normalize_rows;
use crate::service::OrderApi;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Requests the [`BoardClient`] sends to the actor.
#[derive(Debug)]
pub enum BoardRequest {
    /// Re-fetch today's orders now; completes once the snapshot is settled.
    Refresh { respond_to: oneshot::Sender<()> },
    /// Write `target` as the order's stage, then refresh exactly once
    /// regardless of whether the write succeeded.
    Advance {
        id: String,
        target: Stage,
        respond_to: oneshot::Sender<()>,
    },
    /// Read the current snapshot.
    Snapshot {
        respond_to: oneshot::Sender<BoardSnapshot>,
    },
}

/// The synchronizer actor. Owns the snapshot and the Order Service client.
pub struct BoardActor<A: OrderApi> {
    receiver: mpsc::Receiver<BoardRequest>,
    api: A,
    image_base_url: String,
    poll_interval: std::time::Duration,
    snapshot: BoardSnapshot,
    publish: watch::Sender<BoardSnapshot>,
}

impl<A: OrderApi> BoardActor<A> {
    /// Creates the actor and its client handle.
    pub fn new(api: A, config: &BoardConfig) -> (Self, BoardClient) {
        let (sender, receiver) = mpsc::channel(config.channel_capacity);
        let (publish, snapshots) = watch::channel(BoardSnapshot::default());
        let actor = Self {
            receiver,
            api,
            image_base_url: config.image_base_url.clone(),
            poll_interval: config.poll_interval,
            snapshot: BoardSnapshot::default(),
            publish,
        };
        let client = BoardClient { sender, snapshots };
        (actor, client)
    }

    /// Runs the actor's event loop until every client handle is dropped.
    pub async fn run(mut self) {
        info!(poll_interval = ?self.poll_interval, "Board synchronizer started");

        let mut tick = tokio::time::interval(self.poll_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // Biased so the immediate first tick always runs before any
            // queued request, giving a deterministic startup refresh.
            tokio::select! {
                biased;
                _ = tick.tick() => {
                    self.refresh().await;
                }
                msg = self.receiver.recv() => match msg {
                    Some(BoardRequest::Refresh { respond_to }) => {
                        self.refresh().await;
                        let _ = respond_to.send(());
                    }
                    Some(BoardRequest::Advance { id, target, respond_to }) => {
                        debug!(order_id = %id, %target, "Advance");
                        if let Err(e) = self.api.set_stage(&id, target).await {
                            warn!(order_id = %id, %target, error = %e, "Stage write failed");
                        }
                        // Reconcile with server truth either way; the write
                        // is never applied optimistically to local state.
                        self.refresh().await;
                        let _ = respond_to.send(());
                    }
                    Some(BoardRequest::Snapshot { respond_to }) => {
                        let _ = respond_to.send(self.snapshot.clone());
                    }
                    None => break,
                }
            }
        }

        info!(generation = self.snapshot.generation, "Board synchronizer shutdown");
    }

    /// One read request, full replacement on success, no-op on failure.
    async fn refresh(&mut self) {
        match self.api.fetch_today().await {
            Ok(rows) => {
                let records = normalize_rows(rows, &self.image_base_url);
                let columns = bucket(records);
                self.snapshot = BoardSnapshot {
                    columns,
                    generation: self.snapshot.generation + 1,
                };
                debug!(
                    generation = self.snapshot.generation,
                    orders = self.snapshot.columns.total(),
                    "Snapshot replaced"
                );
                self.publish.send_replace(self.snapshot.clone());
            }
            Err(e) => {
                warn!(error = %e, "Refresh failed, keeping previous snapshot");
            }
        }
    }
}

/// Cloneable handle for talking to a running [`BoardActor`].
#[derive(Clone)]
pub struct BoardClient {
    sender: mpsc::Sender<BoardRequest>,
    snapshots: watch::Receiver<BoardSnapshot>,
}

impl BoardClient {
    /// Forces a refresh now, resolving once the snapshot is settled.
    pub async fn refresh(&self) -> Result<(), BoardError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BoardRequest::Refresh { respond_to })
            .await
            .map_err(|_| BoardError::ActorClosed)?;
        response.await.map_err(|_| BoardError::ActorDropped)
    }

    /// Advances one order into `target`. The caller computes `target` from
    /// the column the order currently occupies (see [`Stage::next`]); the
    /// board trusts it. Resolves after the follow-up refresh completes,
    /// whether or not the write succeeded.
    pub async fn advance(&self, id: impl Into<String>, target: Stage) -> Result<(), BoardError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BoardRequest::Advance {
                id: id.into(),
                target,
                respond_to,
            })
            .await
            .map_err(|_| BoardError::ActorClosed)?;
        response.await.map_err(|_| BoardError::ActorDropped)
    }

    /// Reads the current snapshot from the actor.
    pub async fn snapshot(&self) -> Result<BoardSnapshot, BoardError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BoardRequest::Snapshot { respond_to })
            .await
            .map_err(|_| BoardError::ActorClosed)?;
        response.await.map_err(|_| BoardError::ActorDropped)
    }

    /// Subscribes to snapshot replacements. Each successful refresh publishes
    /// the whole new snapshot; there are no incremental updates.
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.snapshots.clone()
    }
}
