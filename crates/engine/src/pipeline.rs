//! Composite filtering pipeline
//!
//! A [`FilterSet`] is the caller-facing bag of optional criteria. It expands
//! into an ordered list of [`FilterStage`]s:
//!
//! ```text
//! search → tag → status → visibility → adventure
//! ```
//!
//! Each stage runs on the previous stage's output. Stages whose criterion is
//! absent are not emitted. The visibility stage is emitted only when both
//! `user_adventure_ids` and `is_admin` are set, and it runs without public
//! adventures.

use std::borrow::Cow;

use questlog_core::{AdventureId, Document, StatusFilter};
use questlog_search::{filter_by_search_term, filter_posts_by_tag, DEFAULT_SEARCH_FIELDS};
use questlog_security::filter_posts_by_user_adventures;
use serde::{Deserialize, Serialize};

use crate::status::filter_by_status;

/// Optional filter criteria for a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    /// Free-text search term.
    pub search: Option<String>,
    /// Fields the search term is matched against.
    pub search_fields: Option<Vec<String>>,
    /// Tag substring.
    pub tag: Option<String>,
    /// Status criterion.
    pub status: Option<StatusFilter>,
    /// Adventures the viewer participates in.
    pub user_adventure_ids: Option<Vec<AdventureId>>,
    /// Whether the viewer is an admin.
    pub is_admin: Option<bool>,
    /// Restrict to items belonging to this adventure.
    pub adventure: Option<AdventureId>,
}

impl FilterSet {
    /// An empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the searched fields.
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tag criterion.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the status criterion.
    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the viewer's memberships and role, enabling the visibility stage.
    pub fn viewer<I, A>(mut self, user_adventure_ids: I, is_admin: bool) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AdventureId>,
    {
        self.user_adventure_ids = Some(user_adventure_ids.into_iter().map(Into::into).collect());
        self.is_admin = Some(is_admin);
        self
    }

    /// Restrict to one adventure.
    pub fn adventure(mut self, adventure: impl Into<AdventureId>) -> Self {
        self.adventure = Some(adventure.into());
        self
    }

    /// Whether any user-facing criterion narrows the listing.
    ///
    /// Search, tag and adventure count when non-blank after trimming; status
    /// counts when set to anything but `All`. Viewer memberships are not a
    /// user-chosen filter and never count.
    pub fn has_active_filters(&self) -> bool {
        fn non_blank(value: &Option<impl AsRef<str>>) -> bool {
            value
                .as_ref()
                .map(|v| !v.as_ref().trim().is_empty())
                .unwrap_or(false)
        }

        non_blank(&self.search)
            || non_blank(&self.tag)
            || matches!(self.status, Some(s) if s != StatusFilter::All)
            || non_blank(&self.adventure)
    }

    /// Expand into ordered stages, searching the default fields when none are set.
    pub fn stages(&self) -> Vec<FilterStage> {
        self.stages_with_default_fields(DEFAULT_SEARCH_FIELDS)
    }

    /// Expand into ordered stages, searching `default_fields` when none are set.
    pub fn stages_with_default_fields<F>(&self, default_fields: &[F]) -> Vec<FilterStage>
    where
        F: AsRef<str>,
    {
        let mut stages = Vec::new();

        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            let fields = match &self.search_fields {
                Some(fields) => fields.clone(),
                None => default_fields.iter().map(|f| f.as_ref().to_string()).collect(),
            };
            stages.push(FilterStage::Search {
                term: term.to_string(),
                fields,
            });
        }

        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            stages.push(FilterStage::Tag(tag.to_string()));
        }

        if let Some(status) = self.status {
            stages.push(FilterStage::Status(status));
        }

        if let (Some(user_adventure_ids), Some(is_admin)) =
            (&self.user_adventure_ids, self.is_admin)
        {
            stages.push(FilterStage::Visibility {
                user_adventure_ids: user_adventure_ids.clone(),
                is_admin,
            });
        }

        if let Some(adventure) = self.adventure.as_ref().filter(|a| !a.as_str().is_empty()) {
            stages.push(FilterStage::Adventure(adventure.clone()));
        }

        stages
    }
}

/// Whether `filters` narrows the listing. See [`FilterSet::has_active_filters`].
pub fn has_active_filters(filters: &FilterSet) -> bool {
    filters.has_active_filters()
}

/// One step of the composite filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterStage {
    /// Free-text substring match over named fields.
    Search {
        /// Search term.
        term: String,
        /// Fields matched.
        fields: Vec<String>,
    },
    /// Tag substring match.
    Tag(String),
    /// Exact status match.
    Status(StatusFilter),
    /// Participant visibility, without public adventures.
    Visibility {
        /// Adventures the viewer participates in.
        user_adventure_ids: Vec<AdventureId>,
        /// Whether the viewer is an admin.
        is_admin: bool,
    },
    /// Membership in one specific adventure.
    Adventure(AdventureId),
}

impl FilterStage {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            FilterStage::Search { .. } => "search",
            FilterStage::Tag(_) => "tag",
            FilterStage::Status(_) => "status",
            FilterStage::Visibility { .. } => "visibility",
            FilterStage::Adventure(_) => "adventure",
        }
    }

    /// Run this stage over `items`.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Cow<'a, [T]>
    where
        T: Document + Clone,
    {
        match self {
            FilterStage::Search { term, fields } => {
                filter_by_search_term(items, term, fields.as_slice())
            }
            FilterStage::Tag(tag) => filter_posts_by_tag(items, tag),
            FilterStage::Status(status) => filter_by_status(items, *status),
            FilterStage::Visibility {
                user_adventure_ids,
                is_admin,
            } => filter_posts_by_user_adventures(items, user_adventure_ids, &[], *is_admin),
            FilterStage::Adventure(adventure) => Cow::Owned(
                items
                    .iter()
                    .filter(|item| item.adventure_ids().contains(adventure))
                    .cloned()
                    .collect(),
            ),
        }
    }
}

/// Run `stages` left to right over `items`.
///
/// Stays borrowed until some stage actually narrows the listing.
pub fn apply_stages<'a, T>(items: &'a [T], stages: &[FilterStage]) -> Cow<'a, [T]>
where
    T: Document + Clone,
{
    let mut current: Cow<'a, [T]> = Cow::Borrowed(items);

    for stage in stages {
        let before = current.len();
        let narrowed = match stage.apply(&*current) {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        if let Some(next) = narrowed {
            current = Cow::Owned(next);
        }
        tracing::debug!(
            target: "questlog::filter",
            stage = stage.name(),
            before,
            after = current.len(),
            "filter stage applied"
        );
    }

    current
}

/// Apply every criterion of `filters` in pipeline order.
pub fn combine_filters<'a, T>(items: &'a [T], filters: &FilterSet) -> Cow<'a, [T]>
where
    T: Document + Clone,
{
    apply_stages(items, &filters.stages())
}
