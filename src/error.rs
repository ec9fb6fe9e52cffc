//! Error taxonomy for the simulation core.
//!
//! Three classes cross the component boundary: malformed requests, operations
//! against an incompatible elevator state, and Event Sink notification
//! failures. None of them are retried automatically; the Control Surface
//! decides whether to retry a whole call.

use thiserror::Error;

use crate::sink::{JourneyId, RestingId};

/// Errors surfaced by the simulation core to the Control Surface.
#[derive(Debug, Error)]
pub enum SimError {
    /// Malformed request: equal floors, out-of-range floor, or invalid fleet
    /// parameters. Surfaced directly to the caller.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An operation was invoked against an elevator in an incompatible state,
    /// e.g. starting a journey while one is already open.
    #[error("invalid elevator state: {0}")]
    InvalidState(String),

    /// An Event Sink notification failed. The in-memory fleet state remains
    /// the source of truth; the failure is surfaced, not masked.
    #[error("event sink unavailable: {0}")]
    SinkUnavailable(#[from] SinkError),
}

/// Errors reported by an [crate::sink::EventSink] implementation.
///
/// Duration calculations that depend on a missing open/close pair must be
/// treated as unavailable, never defaulted to zero, so closing an unknown
/// handle is an error rather than a silent no-op.
#[derive(Debug, Error)]
pub enum SinkError {
    /// A journey handle did not refer to an open journey.
    #[error("unknown journey handle {0}")]
    UnknownJourney(JourneyId),

    /// A resting-period handle did not refer to an open resting period.
    #[error("unknown resting period handle {0}")]
    UnknownRestingPeriod(RestingId),

    /// The sink could not service the notification at all.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}
