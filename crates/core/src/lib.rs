//! Core types for Questlog
//!
//! This crate defines the data model shared by the filtering crates:
//! - Identifier newtypes (`PostId`, `AdventureId`, `UserId`)
//! - Records (`Post`, `Adventure`, `User`, `AdventureParticipant`)
//! - The `Document` trait that filters are generic over
//! - `QuestlogError` and the `Result` alias

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod types;

pub use error::{QuestlogError, Result};
pub use record::{Adventure, AdventureParticipant, Document, Post, User};
pub use types::{AdventureId, PostId, Role, Status, StatusFilter, Timestamp, UserId};
