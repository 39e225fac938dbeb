//! Worker-side relay between the message port and the computation unit.
//!
//! The relay lives inside the worker context and owns the unit's lifecycle:
//!
//! - **Loading** — the external module is still being resolved. Messages
//!   received now are queued in arrival order.
//! - **Ready** — each message is answered by invoking the unit synchronously
//!   and producing exactly one [`RelayReply`].
//! - **Failed** — the module never became usable. Every message, queued or
//!   future, is answered with an `error` reply so the caller never hangs.
//!
//! There is no terminal state; the relay lives for the worker session. The
//! settings payload is passed through to the unit unvalidated — only JSON
//! well-formedness is checked at the boundary, by the caller of
//! [`Relay::on_message`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

/// Failure raised by the computation unit for one invocation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ComputeError(pub String);

/// The opaque seed generator hosted by the worker.
///
/// Construction and loading are the host's concern; the relay only invokes
/// it. The settings value is forwarded verbatim.
pub trait ComputationUnit {
    fn compute(&mut self, settings: &Value) -> Result<Value, ComputeError>;
}

impl<F> ComputationUnit for F
where
    F: FnMut(&Value) -> Result<Value, ComputeError>,
{
    fn compute(&mut self, settings: &Value) -> Result<Value, ComputeError> {
        self(settings)
    }
}

/// Reply envelope posted back to the main thread, one per received message.
///
/// Serialized as `{"status":"done","data":…}` or
/// `{"status":"error","error":…}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RelayReply {
    Done { data: Value },
    Error { error: String },
}

impl RelayReply {
    fn from_result(result: Result<Value, ComputeError>) -> Self {
        match result {
            Ok(data) => Self::Done { data },
            Err(err) => Self::Error { error: err.to_string() },
        }
    }
}

enum RelayState<C> {
    Loading { queued: Vec<Value> },
    Ready(C),
    Failed(String),
}

/// Relay state machine. Generic over the unit so it tests without a browser.
pub struct Relay<C: ComputationUnit> {
    state: RelayState<C>,
}

impl<C: ComputationUnit> Default for Relay<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ComputationUnit> Relay<C> {
    /// A relay waiting for its computation unit.
    #[must_use]
    pub fn new() -> Self {
        Self { state: RelayState::Loading { queued: Vec::new() } }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, RelayState::Ready(_))
    }

    /// The module finished loading. Drains any queued messages through the
    /// unit, returning their replies in arrival order.
    pub fn module_loaded(&mut self, mut unit: C) -> Vec<RelayReply> {
        let queued = match &mut self.state {
            RelayState::Loading { queued } => std::mem::take(queued),
            // A duplicate load notification replaces the unit; nothing queued.
            RelayState::Ready(_) | RelayState::Failed(_) => Vec::new(),
        };
        log::debug!("computation unit loaded, draining {} queued message(s)", queued.len());
        let replies = queued
            .iter()
            .map(|settings| RelayReply::from_result(unit.compute(settings)))
            .collect();
        self.state = RelayState::Ready(unit);
        replies
    }

    /// The module failed to load. Queued messages are answered with `error`
    /// replies, and so is everything received afterwards.
    pub fn module_failed(&mut self, error: impl Into<String>) -> Vec<RelayReply> {
        let error = error.into();
        let queued = match &mut self.state {
            RelayState::Loading { queued } => std::mem::take(queued),
            RelayState::Ready(_) | RelayState::Failed(_) => Vec::new(),
        };
        log::warn!("computation unit failed to load: {error}");
        let replies = queued
            .iter()
            .map(|_| RelayReply::Error { error: error.clone() })
            .collect();
        self.state = RelayState::Failed(error);
        replies
    }

    /// Handle one inbound settings payload.
    ///
    /// Returns `None` while loading (the message is queued) and exactly one
    /// reply otherwise. Over a full relay lifecycle every received message
    /// produces exactly one reply.
    pub fn on_message(&mut self, settings: Value) -> Option<RelayReply> {
        match &mut self.state {
            RelayState::Loading { queued } => {
                queued.push(settings);
                None
            }
            RelayState::Ready(unit) => Some(RelayReply::from_result(unit.compute(&settings))),
            RelayState::Failed(error) => Some(RelayReply::Error { error: error.clone() }),
        }
    }
}
