//! Document records fetched from the backing document store
//!
//! Field names on the wire follow the store's conventions: system fields
//! are `$`-prefixed (`$id`, `$createdAt`) and user fields are camelCase.
//!
//! # Visibility
//!
//! A post's `adventures` list decides who may see it. An empty list means
//! the post is public. A missing, `null` or wrongly-typed list in a stored
//! document is read as empty, so "public" has exactly one representation in
//! memory.
//!
//! Free-text and list fields are read leniently: a value of the wrong shape
//! falls back to empty instead of failing the whole document.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{AdventureId, PostId, Role, Status, Timestamp, UserId};

/// Read access shared by every record the filters operate on.
///
/// Filters are generic over this trait so the same search, status and
/// sorting code runs over posts and adventures alike.
pub trait Document {
    /// Raw document id.
    fn id(&self) -> &str;

    /// When the document was created.
    fn created_at(&self) -> Timestamp;

    /// Lifecycle status, if the document kind has one.
    fn status(&self) -> Option<Status> {
        None
    }

    /// A named free-text field.
    ///
    /// Returns `None` for unknown names and for fields that are absent or
    /// not plain strings, so search treats them as non-matching.
    fn text_field(&self, name: &str) -> Option<&str>;

    /// Tags attached to the document.
    fn tags(&self) -> &[String] {
        &[]
    }

    /// Adventures the document belongs to. Empty means public.
    fn adventure_ids(&self) -> &[AdventureId] {
        &[]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Read `T`, or its default when the stored value has another shape.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Valid(value) => value,
        Lenient::Invalid(_) => T::default(),
    })
}

/// An image post with captions and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Document id.
    #[serde(rename = "$id")]
    pub id: PostId,
    /// Creation time.
    #[serde(rename = "$createdAt")]
    pub created_at: Timestamp,
    /// Author of the post.
    #[serde(default)]
    pub creator: Option<UserId>,
    /// Headline shown on the detail view.
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    /// Rich-text caption blocks.
    #[serde(default, deserialize_with = "or_default")]
    pub captions: Vec<String>,
    /// Free-form location label.
    #[serde(default, deserialize_with = "or_default")]
    pub location: Option<String>,
    /// Public URL of the image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Storage id of the image.
    #[serde(default)]
    pub image_id: Option<String>,
    /// Tags, matched accent- and case-insensitively.
    #[serde(default, deserialize_with = "or_default")]
    pub tags: Vec<String>,
    /// Adventures this post belongs to. Empty means public.
    #[serde(default, deserialize_with = "or_default")]
    pub adventures: Vec<AdventureId>,
    /// Optional lifecycle status.
    #[serde(default)]
    pub status: Option<Status>,
}

impl Post {
    /// Create a public post with no tags.
    pub fn new(id: impl Into<PostId>, title: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            created_at,
            creator: None,
            title: title.into(),
            captions: Vec::new(),
            location: None,
            image_url: None,
            image_id: None,
            tags: Vec::new(),
            adventures: Vec::new(),
            status: None,
        }
    }

    /// Set the author.
    pub fn with_creator(mut self, creator: impl Into<UserId>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the location label.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Replace the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the adventure list.
    pub fn with_adventures<I, A>(mut self, adventures: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AdventureId>,
    {
        self.adventures = adventures.into_iter().map(Into::into).collect();
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }
}

impl Document for Post {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn status(&self) -> Option<Status> {
        self.status
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(self.title.as_str()),
            "location" => self.location.as_deref(),
            _ => None,
        }
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn adventure_ids(&self) -> &[AdventureId] {
        &self.adventures
    }
}

/// A campaign that groups posts and scopes who may see them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adventure {
    /// Document id.
    #[serde(rename = "$id")]
    pub id: AdventureId,
    /// Creation time.
    #[serde(rename = "$createdAt")]
    pub created_at: Timestamp,
    /// Last update time.
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: Option<Timestamp>,
    /// Display name.
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    /// Optional blurb.
    #[serde(default, deserialize_with = "or_default")]
    pub description: Option<String>,
    /// Public URL of the cover image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Storage id of the cover image.
    #[serde(default)]
    pub image_id: Option<String>,
    /// Lifecycle status.
    pub status: Status,
    /// Open to every user regardless of participation.
    #[serde(default)]
    pub is_public: bool,
    /// Admin who created the adventure.
    #[serde(default)]
    pub created_by: Option<UserId>,
}

impl Adventure {
    /// Create an active, private adventure.
    pub fn new(
        id: impl Into<AdventureId>,
        title: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            updated_at: None,
            title: title.into(),
            description: None,
            image_url: None,
            image_id: None,
            status: Status::Active,
            is_public: false,
            created_by: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Mark the adventure as open to everyone.
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }
}

impl Document for Adventure {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn status(&self) -> Option<Status> {
        Some(self.status)
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(self.title.as_str()),
            "description" => self.description.as_deref(),
            _ => None,
        }
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account id.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Handle.
    #[serde(default)]
    pub username: String,
    /// Contact e-mail.
    #[serde(default)]
    pub email: String,
    /// Avatar URL.
    #[serde(default)]
    pub image_url: String,
    /// Profile text.
    #[serde(default)]
    pub bio: String,
    /// Account role.
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Create a user with the given role and empty profile fields.
    pub fn new(id: impl Into<UserId>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            username: String::new(),
            email: String::new(),
            image_url: String::new(),
            bio: String::new(),
            role,
        }
    }

    /// Whether the user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Membership of a user in an adventure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdventureParticipant {
    /// Document id of the membership row.
    #[serde(rename = "$id", default)]
    pub id: String,
    /// Adventure joined.
    pub adventure_id: AdventureId,
    /// Member.
    pub user_id: UserId,
    /// Admin who added the member.
    #[serde(default)]
    pub added_by: Option<UserId>,
    /// When the membership was created.
    #[serde(rename = "$createdAt")]
    pub created_at: Timestamp,
}

impl AdventureParticipant {
    /// Record `user_id` as a participant of `adventure_id`.
    pub fn new(
        adventure_id: impl Into<AdventureId>,
        user_id: impl Into<UserId>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: String::new(),
            adventure_id: adventure_id.into(),
            user_id: user_id.into(),
            added_by: None,
            created_at,
        }
    }
}
