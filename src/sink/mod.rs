//! The Event Sink notification contract.
//!
//! The core records every state change through this trait: status updates,
//! demand records, and journey/resting-period open/close pairs. What backs
//! the sink is entirely its own concern — relational, log file, or the
//! in-memory reference implementation in [memory] — the core never depends
//! on the storage technology.

pub mod memory;

use std::time::SystemTime;

use crate::error::SinkError;
use crate::fleet::ElevatorStatus;

/// Opaque handle to a recorded demand.
pub type DemandId = u64;

/// Opaque handle to an open journey.
pub type JourneyId = u64;

/// Opaque handle to an open resting period.
pub type RestingId = u64;

/// Receiver of state-change notifications from the core.
///
/// Implementations must treat every notification as one logical transaction:
/// concurrent calls from different elevators may interleave, but a single
/// notification must never be half-applied. For any one elevator the core
/// guarantees strict chronological call order, so downstream duration
/// calculations can rely on ordered open/close pairs.
pub trait EventSink: Send + Sync {
    /// Records an elevator's committed floor and status.
    ///
    /// The timestamp is supplied by the core at the instant the transition
    /// was committed in memory.
    fn record_status(
        &self,
        elevator_id: u8,
        floor: u8,
        status: ElevatorStatus,
        timestamp: SystemTime,
    ) -> Result<(), SinkError>;

    /// Records a passenger demand and the elevator assigned to it.
    ///
    /// `estimated_wait` is the pickup-distance stand-in expressed in simulated
    /// seconds, not a measured queueing delay. Callers that need real waiting
    /// times must derive them from the journey records instead.
    fn record_demand(
        &self,
        origin_floor: u8,
        destination_floor: u8,
        elevator_id: u8,
        estimated_wait: f64,
    ) -> Result<DemandId, SinkError>;

    /// Opens a journey record for an elevator and returns its handle.
    fn open_journey(
        &self,
        elevator_id: u8,
        start_floor: u8,
        passenger_count: u8,
    ) -> Result<JourneyId, SinkError>;

    /// Closes an open journey at its end floor.
    ///
    /// A handle that does not refer to an open journey is an error.
    fn close_journey(&self, journey: JourneyId, end_floor: u8) -> Result<(), SinkError>;

    /// Opens a resting period for an idle elevator and returns its handle.
    fn open_resting_period(&self, elevator_id: u8, floor: u8) -> Result<RestingId, SinkError>;

    /// Closes an open resting period and returns its measured duration in
    /// seconds.
    ///
    /// A handle that does not refer to an open resting period is an error,
    /// never a zero duration.
    fn close_resting_period(&self, resting: RestingId) -> Result<f64, SinkError>;

    /// Clears all prior interval/demand history and seeds `num_elevators`
    /// elevator rows at floor 0, Idle.
    fn reset_fleet(&self, num_elevators: u8, num_floors: u8) -> Result<(), SinkError>;
}
