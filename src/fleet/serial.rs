//! Serialization and Deserialization for [ElevatorSnapshot]
//!
//! Snapshots travel between tasks as serialized bytes on watch channels, so
//! both ends of a channel agree on one compact representation.

use crate::fleet::ElevatorSnapshot;
use crate::print;

/// Serializes an `ElevatorSnapshot` into a binary format.
///
/// Uses `bincode` for efficient serialization.
/// If serialization fails, the function logs the error and returns `None`.
///
/// ## Parameters
/// - `snapshot`: A reference to the `ElevatorSnapshot` to be serialized.
///
/// ## Returns
/// - A `Vec<u8>` containing the serialized data, or `None` on failure.
pub fn serialize_snapshot(snapshot: &ElevatorSnapshot) -> Option<Vec<u8>> {
    match bincode::serialize(snapshot) {
        Ok(serialized_data) => Some(serialized_data),
        Err(e) => {
            print::err(format!(
                "Serialization failed: {} (fleet/serial.rs, serialize_snapshot())",
                e
            ));
            None
        }
    }
}

/// Deserializes an `ElevatorSnapshot` from a binary format.
///
/// Uses `bincode` for deserialization.
/// If deserialization fails, the function logs the error and returns `None`.
///
/// ## Parameters
/// - `data`: A byte slice (`&[u8]`) containing the serialized `ElevatorSnapshot`.
///
/// ## Returns
/// - An `ElevatorSnapshot` instance reconstructed from the binary data, or `None` on failure.
pub fn deserialize_snapshot(data: &[u8]) -> Option<ElevatorSnapshot> {
    match bincode::deserialize(data) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            print::err(format!(
                "Deserialization failed: {} (fleet/serial.rs, deserialize_snapshot())",
                e
            ));
            None
        }
    }
}
