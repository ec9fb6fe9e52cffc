//! Shared data model for the fleet.
//!
//! The status enum and the snapshot struct are the only state that crosses
//! component boundaries: elevators publish committed snapshots on watch
//! channels, the dispatcher reads them for selection, and the Control Surface
//! reads them as fleet status.

pub mod serial;

use serde::{Deserialize, Serialize};

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// The current status of an elevator cabin.
///
/// A closed set: a cabin is always in exactly one of these states, and a
/// resting period is open if and only if the status is [ElevatorStatus::Idle].
pub enum ElevatorStatus {
    Idle,
    MovingUp,
    MovingDown,
}

impl ElevatorStatus {
    /// Stable lower-case label used by the Event Sink contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElevatorStatus::Idle => "idle",
            ElevatorStatus::MovingUp => "moving_up",
            ElevatorStatus::MovingDown => "moving_down",
        }
    }
}

/// A committed view of one elevator: id, floor and status as of its most
/// recent transition.
///
/// Floor and status always belong to the same transition. Snapshots are
/// published whole, so a reader can never observe the floor of one transition
/// paired with the status of another.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    /// Unique identifier for the elevator, `1..=num_elevators`.
    pub id: u8,

    /// The floor of the most recent committed transition.
    pub floor: u8,

    /// The status of the most recent committed transition.
    pub status: ElevatorStatus,
}

impl ElevatorSnapshot {
    /// Snapshot of a freshly created cabin: idle at the given floor.
    pub fn seeded(id: u8, floor: u8) -> Self {
        Self {
            id,
            floor,
            status: ElevatorStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_are_stable() {
        assert_eq!(ElevatorStatus::Idle.as_str(), "idle");
        assert_eq!(ElevatorStatus::MovingUp.as_str(), "moving_up");
        assert_eq!(ElevatorStatus::MovingDown.as_str(), "moving_down");
    }

    #[test]
    fn test_seeded_snapshot_is_idle() {
        let snapshot = ElevatorSnapshot::seeded(1, 0);
        assert_eq!(snapshot.id, 1);
        assert_eq!(snapshot.floor, 0);
        assert_eq!(snapshot.status, ElevatorStatus::Idle);
    }
}
