//! Status filter.

use std::borrow::Cow;

use questlog_core::{Document, StatusFilter};

/// Keep items whose status matches `status`.
///
/// `StatusFilter::All` and empty input return the input unchanged. Items
/// without a status are dropped by any concrete filter.
pub fn filter_by_status<T>(items: &[T], status: StatusFilter) -> Cow<'_, [T]>
where
    T: Document + Clone,
{
    if status == StatusFilter::All || items.is_empty() {
        return Cow::Borrowed(items);
    }

    Cow::Owned(
        items
            .iter()
            .filter(|item| status.matches(item.status()))
            .cloned()
            .collect(),
    )
}
