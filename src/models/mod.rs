//! Core domain types for shot aggregation.
//!
//! Everything in this module is immutable after construction and request
//! scoped; nothing here performs I/O.

pub mod profile;
pub mod shot;
pub mod zone;

pub use profile::{PlayerShotProfile, ZoneSlice};
pub use shot::ShotEvent;
pub use zone::{UnrecognizedZoneError, ZoneRange, ZoneTally};
