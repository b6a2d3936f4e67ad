//! # Mock Order Service
//!
//! [`MockOrderApi`] implements [`OrderApi`] entirely in memory: tests script
//! a FIFO queue of responses and assert on the exact sequence of calls the
//! synchronizer made. No HTTP server is involved, so tests are instant and
//! deterministic, and failure injection (a scripted `ServiceError`) is as
//! easy as success.
//!
//! ```ignore
//! let mock = MockOrderApi::new();
//! mock.push_fetch(Ok(rows));                          // startup refresh
//! mock.push_set_stage(Err(ServiceError::Status(500)));
//! mock.push_fetch(Ok(rows2));                         // post-advance refresh
//! // ... drive the board, then:
//! assert_eq!(mock.calls()[1], MockCall::SetStage { .. });
//! mock.verify();
//! ```
//!
//! An unscripted call returns `ServiceError::Network("no scripted response")`
//! rather than panicking, so a stray poll tick degrades into the board's
//! normal failure path instead of killing the test task.

use crate::error::ServiceError;
use crate::model::Stage;
use crate::normalize::RawOrder;
use crate::service::OrderApi;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One recorded call against the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    FetchToday,
    SetStage { id: String, stage: Stage },
}

#[derive(Default)]
struct Inner {
    fetch_responses: VecDeque<Result<Vec<RawOrder>, ServiceError>>,
    stage_responses: VecDeque<Result<(), ServiceError>>,
    calls: Vec<MockCall>,
}

/// Scripted, in-memory stand-in for the Order Service.
#[derive(Clone, Default)]
pub struct MockOrderApi {
    inner: Arc<Mutex<Inner>>,
}

impl MockOrderApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response for the next `fetch_today` call.
    pub fn push_fetch(&self, response: Result<Vec<RawOrder>, ServiceError>) {
        self.lock().fetch_responses.push_back(response);
    }

    /// Queues the response for the next `set_stage` call.
    pub fn push_set_stage(&self, response: Result<(), ServiceError>) {
        self.lock().stage_responses.push_back(response);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    /// Number of `fetch_today` calls made so far.
    pub fn fetch_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, MockCall::FetchToday))
            .count()
    }

    /// Panics if any scripted response was left unconsumed.
    pub fn verify(&self) {
        let inner = self.lock();
        assert!(
            inner.fetch_responses.is_empty(),
            "unconsumed fetch responses: {}",
            inner.fetch_responses.len()
        );
        assert!(
            inner.stage_responses.is_empty(),
            "unconsumed set_stage responses: {}",
            inner.stage_responses.len()
        );
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock lock poisoned")
    }
}

#[async_trait]
impl OrderApi for MockOrderApi {
    async fn fetch_today(&self) -> Result<Vec<RawOrder>, ServiceError> {
        let mut inner = self.lock();
        inner.calls.push(MockCall::FetchToday);
        inner
            .fetch_responses
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Network("no scripted response".to_string())))
    }

    async fn set_stage(&self, id: &str, stage: Stage) -> Result<(), ServiceError> {
        let mut inner = self.lock();
        inner.calls.push(MockCall::SetStage {
            id: id.to_string(),
            stage,
        });
        inner
            .stage_responses
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Network("no scripted response".to_string())))
    }
}
