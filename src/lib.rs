#![warn(missing_docs)]
//! # This projects library
//!
//! This library simulates a multi-elevator dispatch process inside a
//! fixed-height building: passengers request travel between floors, the
//! dispatcher assigns a cabin, and the assigned cabin simulates physical
//! travel while every state change is recorded through the Event Sink for
//! later analysis.
//!
//! ## Overview
//! - **Config**: Handles configuration settings.
//! - **Print**: Colored terminal logging and the fleet status table.
//! - **Init**: CLI argument parsing for the demo binary.
//! - **Error**: The error taxonomy crossing component boundaries.
//! - **Fleet**: Shared data model (status enum, committed snapshots).
//! - **Elevator**: The per-cabin state machine and interval bookkeeping.
//! - **Dispatch**: Fleet ownership, assignment and journey sequencing.
//! - **Sink**: The Event Sink notification contract and its in-memory
//!   reference implementation.

/// Global parameters
pub mod config;

/// Print functions with color coding
pub mod print;

/// Startup/CLI helpers
pub mod init;

/// Error taxonomy
pub mod error;

/// Shared fleet data model and snapshot serialization
pub mod fleet;

/// The elevator state machine
pub mod elevator;

/// The dispatcher owning the fleet
pub mod dispatch;

/// The Event Sink notification contract
pub mod sink;
