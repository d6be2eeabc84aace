//! Error types for Questlog
//!
//! Filtering itself is total: no filter, sort or grouping operation fails.
//! Errors only arise at the edges, when parsing user-supplied enum values
//! or loading configuration.

use thiserror::Error;

/// Errors surfaced by parsing and configuration
#[derive(Debug, Error)]
pub enum QuestlogError {
    /// Status string was not `active` or `inactive`
    #[error("invalid status '{0}', expected 'active' or 'inactive'")]
    InvalidStatus(String),

    /// Status filter string was not `active`, `inactive` or `all`
    #[error("invalid status filter '{0}', expected 'active', 'inactive' or 'all'")]
    InvalidStatusFilter(String),

    /// Role string was not `admin` or `user`
    #[error("invalid role '{0}', expected 'admin' or 'user'")]
    InvalidRole(String),

    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout Questlog
pub type Result<T> = std::result::Result<T, QuestlogError>;
