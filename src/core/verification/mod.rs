//! Output verification
//!
//! Exports are deterministic: the same snapshot and options always produce
//! byte-identical text. The checksum here lets callers confirm that two
//! documents match without diffing them.

pub mod checksum;

pub use checksum::{document_checksum, verify_checksum};
