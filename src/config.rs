//! # config.rs – Centralized Parameter Store
//!
//! This module holds all static program parameters used throughout the system.
//! Keeping configuration in one place makes tuning, experimentation, and testing easier.

use std::sync::Mutex;
use std::time::Duration;
use once_cell::sync::Lazy;

//
// ──────────────────────────────────────────────────────────────
//   1. BUILDING & FLEET PARAMETERS
// ──────────────────────────────────────────────────────────────
//

/// Default number of elevators in the fleet
pub const DEFAULT_NUM_ELEVATORS: u8 = 3;

/// Default number of floors in the building
pub const DEFAULT_NUM_FLOORS: u8 = 10;

/// Smallest building the simulation accepts (a single-floor building has nowhere to go)
pub const MIN_NUM_FLOORS: u8 = 2;

/// Floor every cabin is seeded at on fleet creation
pub const GROUND_FLOOR: u8 = 0;

//
// ──────────────────────────────────────────────────────────────
//   2. TIMING PARAMETERS
// ──────────────────────────────────────────────────────────────
//

/// Simulated seconds of travel per floor of distance.
/// This is the quantity reported to callers and recorded with demands.
pub const FLOOR_TRAVEL_SECONDS: f64 = 1.0;

/// Wall-clock delay applied once per move, regardless of distance.
/// Only pacing for interactive demos; tests run with [ZERO_PACING].
pub const MOVE_PACING: Duration = Duration::from_millis(200);

/// Pacing used by tests and batch runs
pub const ZERO_PACING: Duration = Duration::from_millis(0);

//
// ──────────────────────────────────────────────────────────────
//   3. DEMO SETTINGS
// ──────────────────────────────────────────────────────────────
//

/// Number of random requests the demo binary fires when none is given
pub const DEFAULT_DEMO_REQUESTS: u16 = 5;

//
// ──────────────────────────────────────────────────────────────
//   4. LOGGING CONFIGURATION
// ──────────────────────────────────────────────────────────────
//

/// Enable/disable printing of the fleet status table
pub static PRINT_FLEET_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of errors
pub static PRINT_ERR_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of warnings
pub static PRINT_WARN_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of success messages
pub static PRINT_OK_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of general info
pub static PRINT_INFO_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable miscellaneous debug prints
pub static PRINT_ELSE_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));
