//! Copy shown when a listing comes back empty.
//!
//! The decision table is fixed:
//!
//! | context      | condition                    | kind                      |
//! |--------------|------------------------------|---------------------------|
//! | `posts`      | no adventures and not admin  | `no_adventures`           |
//! | `posts`      | otherwise                    | `no_posts`                |
//! | `adventures` | (title/description by role)  | `no_adventures_available` |
//! | `search`     | (description by search term) | `no_results`              |
//! | anything else|                              | `empty`                   |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Screen the empty listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyStateContext {
    /// Post feed.
    Posts,
    /// Adventure list.
    Adventures,
    /// Search results.
    Search,
    /// Any other screen.
    Other,
}

impl EmptyStateContext {
    /// Parse a context name. Unknown names map to `Other`.
    pub fn parse(name: &str) -> Self {
        match name {
            "posts" => EmptyStateContext::Posts,
            "adventures" => EmptyStateContext::Adventures,
            "search" => EmptyStateContext::Search,
            _ => EmptyStateContext::Other,
        }
    }
}

impl From<&str> for EmptyStateContext {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// Machine-readable category of an empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyStateKind {
    /// Player belongs to no adventure.
    NoAdventures,
    /// Feed has nothing to show.
    NoPosts,
    /// Adventure list is empty.
    NoAdventuresAvailable,
    /// Search or filters matched nothing.
    NoResults,
    /// Fallback.
    Empty,
}

impl EmptyStateKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyStateKind::NoAdventures => "no_adventures",
            EmptyStateKind::NoPosts => "no_posts",
            EmptyStateKind::NoAdventuresAvailable => "no_adventures_available",
            EmptyStateKind::NoResults => "no_results",
            EmptyStateKind::Empty => "empty",
        }
    }
}

impl fmt::Display for EmptyStateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of user-facing copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MessageLocale {
    /// English.
    #[default]
    #[serde(rename = "en")]
    English,
    /// Brazilian Portuguese.
    #[serde(rename = "pt-br")]
    Portuguese,
}

/// Title, description and kind of an empty listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {
    /// Headline.
    pub title: String,
    /// Supporting sentence.
    pub description: String,
    /// Category.
    #[serde(rename = "type")]
    pub kind: EmptyStateKind,
}

impl EmptyState {
    fn new(title: impl Into<String>, description: impl Into<String>, kind: EmptyStateKind) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
        }
    }
}

/// Empty-state copy in English.
pub fn empty_state_message(
    context: EmptyStateContext,
    has_adventures: bool,
    is_admin: bool,
    search_term: Option<&str>,
) -> EmptyState {
    localized_empty_state_message(
        MessageLocale::English,
        context,
        has_adventures,
        is_admin,
        search_term,
    )
}

/// Empty-state copy in `locale`.
///
/// An empty `search_term` is treated like an absent one.
pub fn localized_empty_state_message(
    locale: MessageLocale,
    context: EmptyStateContext,
    has_adventures: bool,
    is_admin: bool,
    search_term: Option<&str>,
) -> EmptyState {
    use EmptyStateKind::*;
    use MessageLocale::*;

    let term = search_term.filter(|t| !t.is_empty());

    match context {
        EmptyStateContext::Posts if !has_adventures && !is_admin => match locale {
            English => EmptyState::new(
                "You are not in any adventure",
                "Ask a game master to add you to an adventure to start seeing posts.",
                NoAdventures,
            ),
            Portuguese => EmptyState::new(
                "Você não está em nenhuma aventura",
                "Entre em contato com um mestre para ser adicionado a uma aventura e começar a ver posts.",
                NoAdventures,
            ),
        },
        EmptyStateContext::Posts => match locale {
            English => EmptyState::new("No posts found", "There are no posts to show yet.", NoPosts),
            Portuguese => EmptyState::new(
                "Nenhum post encontrado",
                "Ainda não há posts para exibir.",
                NoPosts,
            ),
        },
        EmptyStateContext::Adventures => match (locale, is_admin) {
            (English, true) => EmptyState::new(
                "No adventures created yet",
                "Start by creating your first adventure.",
                NoAdventuresAvailable,
            ),
            (English, false) => EmptyState::new(
                "No adventures available",
                "Wait to be invited to an adventure.",
                NoAdventuresAvailable,
            ),
            (Portuguese, true) => EmptyState::new(
                "Nenhuma aventura criada ainda",
                "Comece criando sua primeira aventura.",
                NoAdventuresAvailable,
            ),
            (Portuguese, false) => EmptyState::new(
                "Nenhuma aventura disponível",
                "Aguarde ser convidado para uma aventura.",
                NoAdventuresAvailable,
            ),
        },
        EmptyStateContext::Search => match (locale, term) {
            (English, Some(term)) => EmptyState::new(
                "No results found",
                format!("We found no results for \"{term}\"."),
                NoResults,
            ),
            (English, None) => EmptyState::new(
                "No results found",
                "No item matches the applied filters.",
                NoResults,
            ),
            (Portuguese, Some(term)) => EmptyState::new(
                "Nenhum resultado encontrado",
                format!("Não encontramos resultados para \"{term}\"."),
                NoResults,
            ),
            (Portuguese, None) => EmptyState::new(
                "Nenhum resultado encontrado",
                "Nenhum item corresponde aos filtros aplicados.",
                NoResults,
            ),
        },
        EmptyStateContext::Other => match locale {
            English => EmptyState::new("Nothing here", "There is no content to show.", Empty),
            Portuguese => {
                EmptyState::new("Nenhum conteúdo", "Não há conteúdo para exibir.", Empty)
            }
        },
    }
}
