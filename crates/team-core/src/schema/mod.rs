//! Schema types for stock team members
//!
//! Types here preserve unknown fields so they can round-trip data written by
//! newer versions without loss.

mod character;

pub use character::Character;
