//! JSON save slots on disk.

pub mod slots;

pub use slots::{from_json, to_json, SaveSlots, SlotInfo};
