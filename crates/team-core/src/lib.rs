//! Core types for team rosters
//!
//! A [`Team`] holds a set of unique [`Member`]s. Uniqueness is decided by
//! member identity: cloning a [`Member`] handle refers to the same member,
//! while wrapping two equal values yields two distinct members.
//!
//! Two insertion paths are offered:
//! - [`Team::add`] is strict and returns [`TeamError::DuplicateMember`]
//! - [`Team::add_all`] is lenient and logs a warning for each skipped duplicate

pub mod error;
pub mod logging;
pub mod member;
pub mod schema;
pub mod team;

pub use error::{Result, TeamError};
pub use member::Member;
pub use schema::Character;
pub use team::{AddAllReport, Team};
