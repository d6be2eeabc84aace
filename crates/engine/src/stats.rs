//! Counts describing how much a filter hid.

use serde::{Deserialize, Serialize};

/// Summary of a filtering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilteringStats {
    /// Items before filtering.
    pub total: usize,
    /// Items after filtering.
    pub visible: usize,
    /// `total - visible`, clamped at 0 when the filtered listing is longer.
    pub hidden: usize,
    /// `round(100 * visible / total)`, or 0 when `total` is 0.
    pub percentage: u32,
}

/// Compare an unfiltered listing with its filtered result.
pub fn filtering_stats<T, U>(original_items: &[T], filtered_items: &[U]) -> FilteringStats {
    let total = original_items.len();
    let visible = filtered_items.len();
    let percentage = if total > 0 {
        (visible as f64 * 100.0 / total as f64).round() as u32
    } else {
        0
    };

    FilteringStats {
        total,
        visible,
        hidden: total.saturating_sub(visible),
        percentage,
    }
}
