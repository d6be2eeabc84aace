//! Listing order.
//!
//! Both sorts copy their input and use the stable `sort_by`, so items that
//! compare equal keep their original relative order.

use std::cmp::Ordering;

use questlog_core::{Document, Status};

/// Active first, everything else after.
#[inline]
fn status_rank(status: Option<Status>) -> u8 {
    match status {
        Some(Status::Active) => 0,
        _ => 1,
    }
}

/// Newest first.
#[inline]
fn newest_first<T: Document>(a: &T, b: &T) -> Ordering {
    b.created_at().cmp(&a.created_at())
}

/// Sort adventures: active before any other status, then newest first.
pub fn sort_adventures<T: Document + Clone>(adventures: &[T]) -> Vec<T> {
    let mut sorted = adventures.to_vec();
    sorted.sort_by(|a, b| {
        status_rank(a.status())
            .cmp(&status_rank(b.status()))
            .then_with(|| newest_first(a, b))
    });
    sorted
}

/// Sort posts newest first.
pub fn sort_posts_by_date<T: Document + Clone>(posts: &[T]) -> Vec<T> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(newest_first);
    sorted
}
