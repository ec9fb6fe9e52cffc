//! The dispatcher owning the fleet.
//!
//! [ElevatorSystem] is the simulation context: it owns the cabins, runs the
//! assignment algorithm and sequences each assigned cabin through pickup and
//! drop-off. It is passed explicitly wherever it is needed; there is no
//! process-wide session singleton.
//!
//! Concurrency model: every cabin sits behind its own fair async mutex, so at
//! most one move/journey sequence is in flight per cabin and a second request
//! selecting a busy cabin queues behind it. Selection and status reads use
//! the cabins' committed snapshots, so floor and status are always observed
//! as one pair.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};

use crate::config;
use crate::elevator::{travel_seconds, Elevator};
use crate::error::SimError;
use crate::fleet::{serial, ElevatorSnapshot};
use crate::print;
use crate::sink::EventSink;

/// The fleet and its dispatch logic.
///
/// Created once per simulation session; re-creating it with new dimensions is
/// the fleet reset (the Event Sink's history is cleared and every cabin is
/// seeded Idle at floor 0).
pub struct ElevatorSystem {
    num_floors: u8,
    move_pacing: Duration,
    elevators: Vec<Arc<Mutex<Elevator>>>,
    snapshot_rxs: Vec<watch::Receiver<Vec<u8>>>,
    sink: Arc<dyn EventSink>,
}

impl ElevatorSystem {
    /// Creates the fleet: `num_elevators` cabins with ids `1..=num_elevators`,
    /// all bounded by `num_floors`.
    ///
    /// Calls [EventSink::reset_fleet] first, so any prior history in the sink
    /// is gone once this returns.
    ///
    /// ## Parameters
    /// - `num_elevators`: At least 1.
    /// - `num_floors`: At least [config::MIN_NUM_FLOORS].
    /// - `move_pacing`: Wall-clock delay per cabin move; use
    ///   [config::ZERO_PACING] for batch runs and tests.
    /// - `sink`: The Event Sink all cabins notify.
    pub fn new(
        num_elevators: u8,
        num_floors: u8,
        move_pacing: Duration,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, SimError> {
        if num_elevators < 1 {
            return Err(SimError::InvalidRequest(
                "fleet needs at least one elevator".to_string(),
            ));
        }
        if num_floors < config::MIN_NUM_FLOORS {
            return Err(SimError::InvalidRequest(format!(
                "building needs at least {} floors",
                config::MIN_NUM_FLOORS
            )));
        }

        sink.reset_fleet(num_elevators, num_floors)?;

        let mut elevators = Vec::with_capacity(num_elevators as usize);
        let mut snapshot_rxs = Vec::with_capacity(num_elevators as usize);
        for id in 1..=num_elevators {
            let (elevator, snapshot_rx) = Elevator::new(id, num_floors, sink.clone())?;
            elevators.push(Arc::new(Mutex::new(elevator)));
            snapshot_rxs.push(snapshot_rx);
        }

        Ok(Self {
            num_floors,
            move_pacing,
            elevators,
            snapshot_rxs,
            sink,
        })
    }

    /// Snapshot of every cabin's most recently committed transition, in
    /// ascending id order. Read-only.
    pub fn get_fleet_status(&self) -> Vec<ElevatorSnapshot> {
        self.snapshot_rxs
            .iter()
            .filter_map(|snapshot_rx| serial::deserialize_snapshot(&snapshot_rx.borrow()))
            .collect()
    }

    /// Serves one passenger request end-to-end.
    ///
    /// Selection is a greedy nearest-cabin scan over the committed snapshots
    /// with a stable ascending-id tie-break. There is no admission control: a
    /// busy cabin can be re-selected, in which case this call queues behind
    /// the in-flight sequence on that cabin's mutex. The demand is recorded,
    /// then the cabin runs journey-open, pickup leg, delivery leg and
    /// journey-close under its lock.
    ///
    /// ## Parameters
    /// - `origin_floor` / `destination_floor`: Both in `[0, num_floors)` and
    ///   distinct, otherwise [SimError::InvalidRequest].
    ///
    /// ## Returns
    /// - `(elevator_id, total_time)`: the assigned cabin and the simulated
    ///   travel time of pickup plus delivery leg, in seconds. No partial
    ///   result is returned when a later leg fails.
    pub async fn request_elevator(
        &self,
        origin_floor: u8,
        destination_floor: u8,
    ) -> Result<(u8, f64), SimError> {
        if origin_floor == destination_floor {
            return Err(SimError::InvalidRequest(
                "origin and destination floors cannot be the same".to_string(),
            ));
        }
        if origin_floor >= self.num_floors || destination_floor >= self.num_floors {
            return Err(SimError::InvalidRequest(format!(
                "floors must be between 0 and {}",
                self.num_floors - 1
            )));
        }

        // Greedy nearest-cabin scan; `<` keeps the first of equally close
        // cabins, and snapshots come in ascending id order.
        let snapshots = self.get_fleet_status();
        if snapshots.is_empty() {
            return Err(SimError::InvalidState(
                "fleet snapshots unavailable".to_string(),
            ));
        }
        let mut assigned_id = snapshots[0].id;
        let mut min_distance = snapshots[0].floor.abs_diff(origin_floor);
        for snapshot in &snapshots[1..] {
            let distance = snapshot.floor.abs_diff(origin_floor);
            if distance < min_distance {
                min_distance = distance;
                assigned_id = snapshot.id;
            }
        }

        let estimated_wait = travel_seconds(min_distance);
        self.sink
            .record_demand(origin_floor, destination_floor, assigned_id, estimated_wait)?;

        let mut cabin = self.elevators[(assigned_id - 1) as usize].lock().await;
        let journey_start = cabin.current_floor();
        cabin.start_journey(journey_start, 1)?;
        let pickup_distance = cabin.move_to(origin_floor, self.move_pacing).await?;
        let delivery_distance = cabin.move_to(destination_floor, self.move_pacing).await?;
        cabin.end_journey(destination_floor)?;

        Ok((
            assigned_id,
            travel_seconds(pickup_distance) + travel_seconds(delivery_distance),
        ))
    }

    /// Repositions an idle cabin to `target_floor`.
    ///
    /// ## Returns
    /// - `Ok(true)` if the cabin moved.
    /// - `Ok(false)` for an unknown id, an out-of-range floor, a cabin that
    ///   is busy or not idle, or the benign same-floor case.
    pub async fn reposition_idle_elevator(
        &self,
        elevator_id: u8,
        target_floor: u8,
    ) -> Result<bool, SimError> {
        if elevator_id == 0 || elevator_id as usize > self.elevators.len() {
            print::warn(format!(
                "No elevator with ID {} was found. (reposition_idle_elevator())",
                elevator_id
            ));
            return Ok(false);
        }
        if target_floor >= self.num_floors {
            print::warn(format!(
                "Floor {} is outside the building. (reposition_idle_elevator())",
                target_floor
            ));
            return Ok(false);
        }

        // A held lock means a journey sequence is in flight; refuse instead
        // of queueing, the cabin will not be idle when the lock frees up.
        let mut cabin = match self.elevators[(elevator_id - 1) as usize].try_lock() {
            Ok(cabin) => cabin,
            Err(_) => return Ok(false),
        };

        match cabin.move_to_resting_floor(target_floor, self.move_pacing).await {
            Ok(moved) => Ok(moved),
            Err(SimError::InvalidState(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
