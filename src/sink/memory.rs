//! In-memory reference implementation of the [EventSink] contract.
//!
//! Used by the demo binary and the tests. All records live behind one mutex,
//! so every notification is one logical transaction; the read-side queries
//! hand out clones and never block the core for long.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Instant, SystemTime};

use serde::Serialize;

use crate::error::SinkError;
use crate::fleet::ElevatorStatus;
use crate::sink::{DemandId, EventSink, JourneyId, RestingId};

/// One committed status update, append-only.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRecord {
    /// The elevator the update belongs to.
    pub elevator_id: u8,
    /// Floor of the committed transition.
    pub floor: u8,
    /// Status of the committed transition.
    pub status: ElevatorStatus,
    /// Core-supplied commit timestamp.
    pub timestamp: SystemTime,
}

/// One recorded passenger demand.
#[derive(Debug, Clone, Serialize)]
pub struct DemandRecord {
    /// When the demand was recorded.
    pub timestamp: SystemTime,
    /// Floor the passenger called from.
    pub origin_floor: u8,
    /// Floor the passenger asked for.
    pub destination_floor: u8,
    /// The elevator the dispatcher assigned.
    pub elevator_id: u8,
    /// Pickup-distance stand-in in simulated seconds (not a queueing delay).
    pub estimated_wait: f64,
}

/// One journey interval; open while `end_floor` is `None`.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyRecord {
    /// The elevator serving the journey.
    pub elevator_id: u8,
    /// Floor the elevator was at when the journey opened.
    pub start_floor: u8,
    /// Destination floor, set when the journey closes.
    pub end_floor: Option<u8>,
    /// Passengers carried, as reported by the dispatcher.
    pub passenger_count: u8,
    /// When the journey opened.
    pub start_time: SystemTime,
    /// When the journey closed.
    pub end_time: Option<SystemTime>,
}

/// One resting interval; open while `end_time` is `None`.
#[derive(Debug, Clone, Serialize)]
pub struct RestingRecord {
    /// The elevator resting.
    pub elevator_id: u8,
    /// Floor the elevator rests at.
    pub floor: u8,
    /// When the elevator became idle here.
    pub start_time: SystemTime,
    /// When the elevator left, set on close.
    pub end_time: Option<SystemTime>,
    /// Measured length of the interval, set on close.
    pub duration_seconds: Option<f64>,
}

#[derive(Default)]
struct SinkState {
    next_id: u64,
    dimensions: Option<(u8, u8)>,
    status_log: Vec<StatusRecord>,
    demands: Vec<DemandRecord>,
    journeys: HashMap<JourneyId, JourneyRecord>,
    resting_periods: HashMap<RestingId, RestingRecord>,
    // Monotonic open instants, kept outside the serializable records
    resting_started: HashMap<RestingId, Instant>,
}

impl SinkState {
    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory Event Sink.
///
/// ## Example
/// ```
/// use liftsim::sink::EventSink;
/// use liftsim::sink::memory::MemoryEventSink;
///
/// let sink = MemoryEventSink::new();
/// sink.reset_fleet(2, 10).unwrap();
/// assert_eq!(sink.dimensions(), Some((2, 10)));
/// ```
#[derive(Default)]
pub struct MemoryEventSink {
    inner: Mutex<SinkState>,
}

impl MemoryEventSink {
    /// Creates an empty sink with no fleet seeded.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, SinkState>, SinkError> {
        self.inner
            .lock()
            .map_err(|_| SinkError::Unavailable("sink state lock poisoned".to_string()))
    }

    /// Fleet dimensions `(num_elevators, num_floors)` from the last
    /// [EventSink::reset_fleet], if any.
    pub fn dimensions(&self) -> Option<(u8, u8)> {
        self.inner.lock().ok().and_then(|state| state.dimensions)
    }

    /// All committed status updates, in notification order.
    pub fn status_records(&self) -> Vec<StatusRecord> {
        self.inner
            .lock()
            .map(|state| state.status_log.clone())
            .unwrap_or_default()
    }

    /// The latest committed status of one elevator, if it has reported any.
    pub fn last_status(&self, elevator_id: u8) -> Option<StatusRecord> {
        self.inner.lock().ok().and_then(|state| {
            state
                .status_log
                .iter()
                .rev()
                .find(|record| record.elevator_id == elevator_id)
                .cloned()
        })
    }

    /// All recorded demands, in notification order.
    pub fn demands(&self) -> Vec<DemandRecord> {
        self.inner
            .lock()
            .map(|state| state.demands.clone())
            .unwrap_or_default()
    }

    /// All journey records, keyed by handle.
    pub fn journeys(&self) -> HashMap<JourneyId, JourneyRecord> {
        self.inner
            .lock()
            .map(|state| state.journeys.clone())
            .unwrap_or_default()
    }

    /// Number of journeys that are open (no end floor yet).
    pub fn open_journey_count(&self) -> usize {
        self.inner
            .lock()
            .map(|state| {
                state
                    .journeys
                    .values()
                    .filter(|journey| journey.end_floor.is_none())
                    .count()
            })
            .unwrap_or(0)
    }

    /// All resting-period records, keyed by handle.
    pub fn resting_periods(&self) -> HashMap<RestingId, RestingRecord> {
        self.inner
            .lock()
            .map(|state| state.resting_periods.clone())
            .unwrap_or_default()
    }
}

impl EventSink for MemoryEventSink {
    fn record_status(
        &self,
        elevator_id: u8,
        floor: u8,
        status: ElevatorStatus,
        timestamp: SystemTime,
    ) -> Result<(), SinkError> {
        let mut state = self.state()?;
        state.status_log.push(StatusRecord {
            elevator_id,
            floor,
            status,
            timestamp,
        });
        Ok(())
    }

    fn record_demand(
        &self,
        origin_floor: u8,
        destination_floor: u8,
        elevator_id: u8,
        estimated_wait: f64,
    ) -> Result<DemandId, SinkError> {
        let mut state = self.state()?;
        state.demands.push(DemandRecord {
            timestamp: SystemTime::now(),
            origin_floor,
            destination_floor,
            elevator_id,
            estimated_wait,
        });
        Ok(state.demands.len() as DemandId)
    }

    fn open_journey(
        &self,
        elevator_id: u8,
        start_floor: u8,
        passenger_count: u8,
    ) -> Result<JourneyId, SinkError> {
        let mut state = self.state()?;
        let journey_id = state.fresh_id();
        state.journeys.insert(
            journey_id,
            JourneyRecord {
                elevator_id,
                start_floor,
                end_floor: None,
                passenger_count,
                start_time: SystemTime::now(),
                end_time: None,
            },
        );
        Ok(journey_id)
    }

    fn close_journey(&self, journey: JourneyId, end_floor: u8) -> Result<(), SinkError> {
        let mut state = self.state()?;
        let record = state
            .journeys
            .get_mut(&journey)
            .filter(|record| record.end_floor.is_none())
            .ok_or(SinkError::UnknownJourney(journey))?;
        record.end_floor = Some(end_floor);
        record.end_time = Some(SystemTime::now());
        Ok(())
    }

    fn open_resting_period(&self, elevator_id: u8, floor: u8) -> Result<RestingId, SinkError> {
        let mut state = self.state()?;
        let resting_id = state.fresh_id();
        state.resting_periods.insert(
            resting_id,
            RestingRecord {
                elevator_id,
                floor,
                start_time: SystemTime::now(),
                end_time: None,
                duration_seconds: None,
            },
        );
        state.resting_started.insert(resting_id, Instant::now());
        Ok(resting_id)
    }

    fn close_resting_period(&self, resting: RestingId) -> Result<f64, SinkError> {
        let mut state = self.state()?;
        let started = state
            .resting_started
            .remove(&resting)
            .ok_or(SinkError::UnknownRestingPeriod(resting))?;
        let duration = started.elapsed().as_secs_f64();
        let record = state
            .resting_periods
            .get_mut(&resting)
            .ok_or(SinkError::UnknownRestingPeriod(resting))?;
        record.end_time = Some(SystemTime::now());
        record.duration_seconds = Some(duration);
        Ok(duration)
    }

    fn reset_fleet(&self, num_elevators: u8, num_floors: u8) -> Result<(), SinkError> {
        let mut state = self.state()?;
        *state = SinkState::default();
        state.dimensions = Some((num_elevators, num_floors));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_reset_clears_history_and_stores_dimensions() {
        let sink = MemoryEventSink::new();
        sink.record_demand(1, 4, 1, 3.0).unwrap();
        sink.open_journey(1, 0, 1).unwrap();

        sink.reset_fleet(3, 10).unwrap();

        assert_eq!(sink.dimensions(), Some((3, 10)));
        assert!(sink.demands().is_empty());
        assert!(sink.journeys().is_empty());
        assert!(sink.resting_periods().is_empty());
    }

    #[test]
    fn test_journey_open_then_close() {
        let sink = MemoryEventSink::new();
        let journey = sink.open_journey(2, 3, 1).unwrap();
        assert_eq!(sink.open_journey_count(), 1);

        sink.close_journey(journey, 7).unwrap();

        let journeys = sink.journeys();
        let record = &journeys[&journey];
        assert_eq!(record.elevator_id, 2);
        assert_eq!(record.start_floor, 3);
        assert_eq!(record.end_floor, Some(7));
        assert!(record.end_time.is_some());
        assert_eq!(sink.open_journey_count(), 0);
    }

    #[test]
    fn test_closing_a_closed_journey_errors() {
        let sink = MemoryEventSink::new();
        let journey = sink.open_journey(1, 0, 1).unwrap();
        sink.close_journey(journey, 5).unwrap();

        let result = sink.close_journey(journey, 5);
        assert!(matches!(result, Err(SinkError::UnknownJourney(_))));
    }

    #[test]
    fn test_resting_duration_is_measured() {
        let sink = MemoryEventSink::new();
        let resting = sink.open_resting_period(1, 4).unwrap();
        sleep(Duration::from_millis(20));

        let duration = sink.close_resting_period(resting).unwrap();

        assert!(duration > 0.0);
        let record = &sink.resting_periods()[&resting];
        assert_eq!(record.duration_seconds, Some(duration));
        assert!(record.end_time.is_some());
    }

    #[test]
    fn test_closing_unknown_resting_period_errors() {
        let sink = MemoryEventSink::new();
        let result = sink.close_resting_period(42);
        assert!(matches!(result, Err(SinkError::UnknownRestingPeriod(42))));
    }

    #[test]
    fn test_status_log_keeps_notification_order() {
        let sink = MemoryEventSink::new();
        sink.record_status(1, 0, ElevatorStatus::MovingUp, SystemTime::now())
            .unwrap();
        sink.record_status(1, 5, ElevatorStatus::Idle, SystemTime::now())
            .unwrap();

        let records = sink.status_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, ElevatorStatus::MovingUp);
        assert_eq!(records[1].status, ElevatorStatus::Idle);
        assert_eq!(sink.last_status(1).unwrap().floor, 5);
    }
}
