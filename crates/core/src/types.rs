//! Identifier newtypes and small enums shared by every Questlog crate.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuestlogError;

/// Creation/update timestamp carried by every stored document.
pub type Timestamp = DateTime<Utc>;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw document-store id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw id string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Opaque identifier of a post.
    PostId
);
string_id!(
    /// Opaque identifier of an adventure (the group that scopes posts).
    AdventureId
);
string_id!(
    /// Opaque identifier of a user.
    UserId
);

/// Lifecycle status of an adventure (and, optionally, of a post).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Open and listed.
    Active,
    /// Closed; hidden from non-admin listings.
    Inactive,
}

impl Status {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = QuestlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            other => Err(QuestlogError::InvalidStatus(other.to_string())),
        }
    }
}

/// Status criterion of a listing: a concrete status or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Only active items.
    Active,
    /// Only inactive items.
    Inactive,
    /// No status restriction.
    #[default]
    All,
}

impl StatusFilter {
    /// Whether an item carrying `status` passes this filter.
    ///
    /// Items without a status only pass `All`.
    pub fn matches(&self, status: Option<Status>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == Some(Status::Active),
            StatusFilter::Inactive => status == Some(Status::Inactive),
        }
    }

    /// Wire name of the filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
            StatusFilter::All => "all",
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        match status {
            Status::Active => StatusFilter::Active,
            Status::Inactive => StatusFilter::Inactive,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = QuestlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            "all" => Ok(StatusFilter::All),
            other => Err(QuestlogError::InvalidStatusFilter(other.to_string())),
        }
    }
}

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Game master: sees every adventure and post.
    Admin,
    /// Regular player (default).
    #[default]
    User,
}

impl FromStr for Role {
    type Err = QuestlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(QuestlogError::InvalidRole(other.to_string())),
        }
    }
}
