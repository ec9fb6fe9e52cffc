//! The elevator state machine.
//!
//! One [Elevator] owns one cabin's position, status and the open
//! journey/resting-period it is currently accumulating. Every committed
//! transition is published as a serialized [ElevatorSnapshot] on the cabin's
//! watch channel and notified to the Event Sink, in that order: the in-memory
//! state is the source of truth, a failed notification never corrupts it.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::sync::watch;
use tokio::time::sleep;

use crate::config;
use crate::error::SimError;
use crate::fleet::{serial, ElevatorSnapshot, ElevatorStatus};
use crate::sink::{EventSink, JourneyId, RestingId};

/// Simulated travel time for a floor distance, in seconds.
///
/// This is a pure function of distance and the quantity reported to callers
/// and recorded with demands. Wall-clock pacing of a move is configured
/// separately and never affects it.
///
/// ## Example
/// ```
/// use liftsim::elevator::travel_seconds;
///
/// assert_eq!(travel_seconds(3), 3.0);
/// assert_eq!(travel_seconds(0), 0.0);
/// ```
pub fn travel_seconds(distance: u8) -> f64 {
    distance as f64 * config::FLOOR_TRAVEL_SECONDS
}

/// One elevator cabin.
///
/// Created by the dispatcher when the fleet is sized and kept for the
/// lifetime of the simulation session. At any instant the cabin has at most
/// one open journey and at most one open resting period, and a resting period
/// is open exactly when the status is [ElevatorStatus::Idle].
pub struct Elevator {
    id: u8,
    num_floors: u8,
    current_floor: u8,
    status: ElevatorStatus,
    open_journey: Option<JourneyId>,
    open_resting: Option<RestingId>,
    sink: Arc<dyn EventSink>,
    snapshot_tx: watch::Sender<Vec<u8>>,
}

impl Elevator {
    /// Creates a cabin seeded Idle at [config::GROUND_FLOOR], records the
    /// initial status and opens the first resting period.
    ///
    /// ## Parameters
    /// - `id`: Stable identifier, `1..=num_elevators`.
    /// - `num_floors`: Exclusive upper bound on reachable floors.
    /// - `sink`: The Event Sink receiving this cabin's notifications.
    ///
    /// ## Returns
    /// - The cabin and the receiving end of its snapshot channel.
    pub fn new(
        id: u8,
        num_floors: u8,
        sink: Arc<dyn EventSink>,
    ) -> Result<(Self, watch::Receiver<Vec<u8>>), SimError> {
        let seeded = ElevatorSnapshot::seeded(id, config::GROUND_FLOOR);
        let (snapshot_tx, snapshot_rx) =
            watch::channel(serial::serialize_snapshot(&seeded).unwrap_or_default());

        let mut elevator = Elevator {
            id,
            num_floors,
            current_floor: config::GROUND_FLOOR,
            status: ElevatorStatus::Idle,
            open_journey: None,
            open_resting: None,
            sink,
            snapshot_tx,
        };

        elevator.sink.record_status(
            id,
            config::GROUND_FLOOR,
            ElevatorStatus::Idle,
            SystemTime::now(),
        )?;
        elevator.open_resting = Some(
            elevator
                .sink
                .open_resting_period(id, config::GROUND_FLOOR)?,
        );

        Ok((elevator, snapshot_rx))
    }

    /// The cabin's stable identifier.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Floor of the most recent committed transition.
    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    /// Status of the most recent committed transition.
    pub fn status(&self) -> ElevatorStatus {
        self.status
    }

    /// The cabin's committed state as one snapshot.
    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            floor: self.current_floor,
            status: self.status,
        }
    }

    /// Commits a transition: memory first, then the snapshot channel, then
    /// the sink. Sink failure leaves the committed state intact.
    fn commit_status(&mut self, floor: u8, status: ElevatorStatus) -> Result<(), SimError> {
        self.current_floor = floor;
        self.status = status;
        if let Some(bytes) = serial::serialize_snapshot(&self.snapshot()) {
            let _ = self.snapshot_tx.send(bytes);
        }
        self.sink
            .record_status(self.id, floor, status, SystemTime::now())?;
        Ok(())
    }

    /// Moves the cabin to `target_floor` and returns the floor distance
    /// travelled.
    ///
    /// A same-floor call is a strict no-op: zero distance, no notifications,
    /// no resting-period churn. Otherwise the open resting period is closed,
    /// the cabin reports MovingUp/MovingDown, travel is paced by `pacing`
    /// (one fixed delay per call regardless of distance), and the cabin
    /// commits Idle at the target with a fresh resting period.
    ///
    /// ## Parameters
    /// - `target_floor`: Destination, `0 <= target_floor < num_floors`.
    /// - `pacing`: Wall-clock delay for the move; pass [config::ZERO_PACING]
    ///   for batch runs and tests.
    ///
    /// ## Returns
    /// - The absolute floor distance travelled. Feed it through
    ///   [travel_seconds] for the simulated duration.
    pub async fn move_to(&mut self, target_floor: u8, pacing: Duration) -> Result<u8, SimError> {
        if target_floor >= self.num_floors {
            return Err(SimError::InvalidRequest(format!(
                "floor {} outside building of {} floors",
                target_floor, self.num_floors
            )));
        }

        if target_floor == self.current_floor {
            return Ok(0);
        }

        if let Some(resting) = self.open_resting.take() {
            self.sink.close_resting_period(resting)?;
        }

        let direction = if target_floor > self.current_floor {
            ElevatorStatus::MovingUp
        } else {
            ElevatorStatus::MovingDown
        };
        let departure_floor = self.current_floor;
        self.commit_status(departure_floor, direction)?;

        let distance = target_floor.abs_diff(departure_floor);
        if !pacing.is_zero() {
            sleep(pacing).await;
        }

        self.commit_status(target_floor, ElevatorStatus::Idle)?;
        self.open_resting = Some(self.sink.open_resting_period(self.id, target_floor)?);

        Ok(distance)
    }

    /// Opens a journey record for this cabin.
    ///
    /// A journey already open is an error, never silently overwritten.
    pub fn start_journey(
        &mut self,
        start_floor: u8,
        passenger_count: u8,
    ) -> Result<JourneyId, SimError> {
        if self.open_journey.is_some() {
            return Err(SimError::InvalidState(format!(
                "elevator {} already has an open journey",
                self.id
            )));
        }
        let journey = self
            .sink
            .open_journey(self.id, start_floor, passenger_count)?;
        self.open_journey = Some(journey);
        Ok(journey)
    }

    /// Closes the open journey at `end_floor`. No-op when none is open.
    pub fn end_journey(&mut self, end_floor: u8) -> Result<(), SimError> {
        if let Some(journey) = self.open_journey.take() {
            self.sink.close_journey(journey, end_floor)?;
        }
        Ok(())
    }

    /// Repositions an idle cabin to a resting floor.
    ///
    /// ## Returns
    /// - `Ok(true)` if the cabin actually moved.
    /// - `Ok(false)` for the benign same-floor case.
    /// - [SimError::InvalidState] when the cabin is not idle.
    pub async fn move_to_resting_floor(
        &mut self,
        target_floor: u8,
        pacing: Duration,
    ) -> Result<bool, SimError> {
        if self.status != ElevatorStatus::Idle {
            return Err(SimError::InvalidState(format!(
                "elevator {} is {} and cannot be repositioned",
                self.id,
                self.status.as_str()
            )));
        }
        let distance = self.move_to(target_floor, pacing).await?;
        Ok(distance > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::memory::MemoryEventSink;

    fn test_elevator(num_floors: u8) -> (Elevator, Arc<MemoryEventSink>) {
        let sink = Arc::new(MemoryEventSink::new());
        let (elevator, _rx) = Elevator::new(1, num_floors, sink.clone()).unwrap();
        (elevator, sink)
    }

    #[test]
    fn test_new_cabin_is_idle_at_ground_floor_with_open_resting() {
        let (elevator, sink) = test_elevator(10);

        assert_eq!(elevator.current_floor(), 0);
        assert_eq!(elevator.status(), ElevatorStatus::Idle);

        let resting = sink.resting_periods();
        assert_eq!(resting.len(), 1);
        assert!(resting.values().all(|record| record.end_time.is_none()));
        assert_eq!(sink.last_status(1).unwrap().status, ElevatorStatus::Idle);
    }

    #[tokio::test]
    async fn test_same_floor_move_is_a_strict_noop() {
        let (mut elevator, sink) = test_elevator(10);
        let statuses_before = sink.status_records().len();
        let resting_before = sink.resting_periods();

        let distance = elevator
            .move_to(0, config::ZERO_PACING)
            .await
            .unwrap();

        assert_eq!(distance, 0);
        assert_eq!(elevator.status(), ElevatorStatus::Idle);
        assert_eq!(sink.status_records().len(), statuses_before);
        assert_eq!(sink.resting_periods().len(), resting_before.len());
    }

    #[tokio::test]
    async fn test_move_up_closes_resting_and_reopens_at_target() {
        let (mut elevator, sink) = test_elevator(10);

        let distance = elevator
            .move_to(5, config::ZERO_PACING)
            .await
            .unwrap();

        assert_eq!(distance, 5);
        assert_eq!(elevator.current_floor(), 5);
        assert_eq!(elevator.status(), ElevatorStatus::Idle);

        let statuses: Vec<ElevatorStatus> = sink
            .status_records()
            .iter()
            .map(|record| record.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                ElevatorStatus::Idle,
                ElevatorStatus::MovingUp,
                ElevatorStatus::Idle
            ]
        );

        let resting = sink.resting_periods();
        assert_eq!(resting.len(), 2);
        let open: Vec<_> = resting
            .values()
            .filter(|record| record.end_time.is_none())
            .collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].floor, 5);
    }

    #[tokio::test]
    async fn test_move_down_reports_moving_down() {
        let (mut elevator, sink) = test_elevator(10);
        elevator.move_to(7, config::ZERO_PACING).await.unwrap();

        let distance = elevator
            .move_to(2, config::ZERO_PACING)
            .await
            .unwrap();

        assert_eq!(distance, 5);
        assert!(sink
            .status_records()
            .iter()
            .any(|record| record.status == ElevatorStatus::MovingDown));
        assert_eq!(sink.last_status(1).unwrap().floor, 2);
    }

    #[tokio::test]
    async fn test_move_outside_building_is_rejected() {
        let (mut elevator, _sink) = test_elevator(10);
        let result = elevator.move_to(10, config::ZERO_PACING).await;
        assert!(matches!(result, Err(SimError::InvalidRequest(_))));
    }

    #[test]
    fn test_second_open_journey_is_rejected() {
        let (mut elevator, _sink) = test_elevator(10);
        elevator.start_journey(0, 1).unwrap();

        let result = elevator.start_journey(0, 1);
        assert!(matches!(result, Err(SimError::InvalidState(_))));
    }

    #[test]
    fn test_end_journey_without_open_is_noop() {
        let (mut elevator, sink) = test_elevator(10);
        elevator.end_journey(3).unwrap();
        assert!(sink.journeys().is_empty());
    }

    #[test]
    fn test_journey_lifecycle_closes_record() {
        let (mut elevator, sink) = test_elevator(10);
        let journey = elevator.start_journey(0, 2).unwrap();
        elevator.end_journey(6).unwrap();

        let record = &sink.journeys()[&journey];
        assert_eq!(record.start_floor, 0);
        assert_eq!(record.end_floor, Some(6));
        assert_eq!(record.passenger_count, 2);
    }

    #[tokio::test]
    async fn test_resting_floor_move_requires_idle() {
        let (mut elevator, _sink) = test_elevator(10);
        elevator.status = ElevatorStatus::MovingUp;

        let result = elevator
            .move_to_resting_floor(5, config::ZERO_PACING)
            .await;
        assert!(matches!(result, Err(SimError::InvalidState(_))));
    }

    #[tokio::test]
    async fn test_resting_floor_move_reports_whether_it_moved() {
        let (mut elevator, _sink) = test_elevator(10);

        let moved = elevator
            .move_to_resting_floor(0, config::ZERO_PACING)
            .await
            .unwrap();
        assert!(!moved);

        let moved = elevator
            .move_to_resting_floor(4, config::ZERO_PACING)
            .await
            .unwrap();
        assert!(moved);
        assert_eq!(elevator.current_floor(), 4);
    }
}
