//! Public types for the Questlog API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Records and identifiers
// ============================================================================

pub use questlog_core::{Adventure, AdventureParticipant, Post, User};
pub use questlog_core::{AdventureId, PostId, UserId};
pub use questlog_core::{Role, Status, StatusFilter, Timestamp};

// Trait the filters are generic over
pub use questlog_core::Document;

// ============================================================================
// Access control
// ============================================================================

pub use questlog_security::{AccessContext, AccessDecision, AccessReason};

// ============================================================================
// Listing results and configuration
// ============================================================================

pub use questlog_engine::{
    AdventureGroup, EmptyState, EmptyStateContext, EmptyStateKind, FilterSet, FilterStage,
    FilteringStats, MessageLocale,
};
pub use questlog_engine::{EngineConfig, FilterEngine};

// ============================================================================
// Errors
// ============================================================================

pub use questlog_core::{QuestlogError, Result};
