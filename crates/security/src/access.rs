//! Adventure-scoped access decisions.
//!
//! A post is visible to a viewer when any of these holds, checked in order:
//! 1. the viewer is an admin
//! 2. the post belongs to no adventure (public post)
//! 3. the post belongs to at least one adventure the viewer participates in
//!    or that is open to everyone
//!
//! The reason attached to a positive decision is part of the contract: UI
//! copy distinguishes public posts, public adventures and participation.

use std::fmt;

use questlog_core::{Adventure, AdventureId, AdventureParticipant, User};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Why a post is or is not visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessReason {
    /// Viewer is an admin.
    Admin,
    /// Post belongs to no adventure.
    PublicPost,
    /// Post belongs to an adventure open to everyone.
    PublicAdventure,
    /// Viewer participates in one of the post's adventures.
    Participant,
    /// None of the above.
    NoAccess,
}

impl AccessReason {
    /// Wire name of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessReason::Admin => "admin",
            AccessReason::PublicPost => "public_post",
            AccessReason::PublicAdventure => "public_adventure",
            AccessReason::Participant => "participant",
            AccessReason::NoAccess => "no_access",
        }
    }
}

impl fmt::Display for AccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    /// Whether the post may be shown.
    pub can_see: bool,
    /// Which rule decided.
    pub reason: AccessReason,
}

impl AccessDecision {
    fn granted(reason: AccessReason) -> Self {
        Self {
            can_see: true,
            reason,
        }
    }

    fn denied() -> Self {
        Self {
            can_see: false,
            reason: AccessReason::NoAccess,
        }
    }
}

/// Decide whether a viewer may see a post from `post_adventures`.
///
/// # Example
///
/// ```
/// use questlog_core::AdventureId;
/// use questlog_security::{can_user_see_posts_from_adventures, AccessReason};
///
/// let g1 = [AdventureId::from("g1")];
/// let decision = can_user_see_posts_from_adventures(&g1, &g1, &[], false);
/// assert!(decision.can_see);
/// assert_eq!(decision.reason, AccessReason::Participant);
/// ```
pub fn can_user_see_posts_from_adventures(
    post_adventures: &[AdventureId],
    user_adventure_ids: &[AdventureId],
    public_adventure_ids: &[AdventureId],
    is_admin: bool,
) -> AccessDecision {
    AccessContext::new(
        user_adventure_ids.iter().cloned(),
        public_adventure_ids.iter().cloned(),
        is_admin,
    )
    .can_see(post_adventures)
}

/// A viewer's memberships, prepared for repeated access checks.
///
/// The union of participant and public adventures is computed once so bulk
/// filtering does a hash lookup per post adventure.
#[derive(Debug, Clone, Default)]
pub struct AccessContext {
    public: FxHashSet<AdventureId>,
    accessible: FxHashSet<AdventureId>,
    is_admin: bool,
}

impl AccessContext {
    /// Build a context from explicit id lists. Duplicates collapse.
    pub fn new<U, P>(user_adventure_ids: U, public_adventure_ids: P, is_admin: bool) -> Self
    where
        U: IntoIterator<Item = AdventureId>,
        P: IntoIterator<Item = AdventureId>,
    {
        let public: FxHashSet<AdventureId> = public_adventure_ids.into_iter().collect();
        let mut accessible: FxHashSet<AdventureId> = user_adventure_ids.into_iter().collect();
        accessible.extend(public.iter().cloned());
        Self {
            public,
            accessible,
            is_admin,
        }
    }

    /// Build a context for `user` from membership rows and the adventure list.
    ///
    /// Participant rows belonging to other users are ignored. Every adventure
    /// flagged `is_public` counts as public regardless of its status.
    pub fn for_user(
        user: &User,
        participants: &[AdventureParticipant],
        adventures: &[Adventure],
    ) -> Self {
        Self::new(
            participants
                .iter()
                .filter(|p| p.user_id == user.id)
                .map(|p| p.adventure_id.clone()),
            adventures
                .iter()
                .filter(|a| a.is_public)
                .map(|a| a.id.clone()),
            user.is_admin(),
        )
    }

    /// Whether the viewer is an admin.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Whether `adventure` is open to everyone in this context.
    pub fn is_public_adventure(&self, adventure: &AdventureId) -> bool {
        self.public.contains(adventure)
    }

    /// Whether the viewer can reach `adventure` by participation or because it is public.
    pub fn has_access_to(&self, adventure: &AdventureId) -> bool {
        self.accessible.contains(adventure)
    }

    /// Decide visibility of a post belonging to `post_adventures`.
    pub fn can_see(&self, post_adventures: &[AdventureId]) -> AccessDecision {
        if self.is_admin {
            return AccessDecision::granted(AccessReason::Admin);
        }

        if post_adventures.is_empty() {
            return AccessDecision::granted(AccessReason::PublicPost);
        }

        if !post_adventures.iter().any(|a| self.has_access_to(a)) {
            return AccessDecision::denied();
        }

        if post_adventures.iter().any(|a| self.is_public_adventure(a)) {
            AccessDecision::granted(AccessReason::PublicAdventure)
        } else {
            AccessDecision::granted(AccessReason::Participant)
        }
    }

    /// Boolean shorthand for [`AccessContext::can_see`].
    pub fn is_visible(&self, post_adventures: &[AdventureId]) -> bool {
        self.is_admin
            || post_adventures.is_empty()
            || post_adventures.iter().any(|a| self.has_access_to(a))
    }
}
