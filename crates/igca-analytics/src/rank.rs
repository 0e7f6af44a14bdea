//! Top-N selection over profile and post tables.

use igca_core::records::Post;
use serde::Serialize;

/// A ranking with an optional highlighted row (the client's own entry).
///
/// The highlight never changes the ordering; it only tells the report
/// layer which bar to color differently.
#[derive(Debug, Clone, Serialize)]
pub struct TopN<T> {
    pub rows: Vec<T>,
    /// Index into `rows` of the highlight key, when it made the cut.
    pub highlight: Option<usize>,
}

/// Select the top `n` rows by `metric`, descending.
///
/// Ties keep first-seen input order (stable sort), rows with a
/// non-finite metric (the divide-by-zero sentinel) are excluded, and
/// fewer than `n` eligible rows simply yields them all. Idempotent:
/// re-ranking a ranking returns it unchanged.
#[must_use]
pub fn top_n<T, F>(rows: &[T], n: usize, metric: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut keyed: Vec<(usize, f64)> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| (index, metric(row)))
        .filter(|(_, value)| value.is_finite())
        .collect();

    keyed.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    keyed.truncate(n);

    keyed.into_iter().map(|(index, _)| rows[index].clone()).collect()
}

/// [`top_n`] plus highlight lookup by `key` (e.g. username).
#[must_use]
pub fn top_n_highlight<T, F, K>(
    rows: &[T],
    n: usize,
    metric: F,
    key: K,
    highlight_key: Option<&str>,
) -> TopN<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
    K: Fn(&T) -> &str,
{
    let rows = top_n(rows, n, metric);
    let highlight =
        highlight_key.and_then(|wanted| rows.iter().position(|row| key(row) == wanted));
    TopN { rows, highlight }
}

/// Captions of a user's top-`n` posts by likes, most-liked first.
///
/// Captionless posts are skipped after ranking, so the result may hold
/// fewer than `n` entries. This is the data handed to the
/// content-strategy collaborator.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn top_captions(posts: &[Post], username: &str, n: usize) -> Vec<String> {
    let user_posts: Vec<Post> = posts
        .iter()
        .filter(|post| post.owner_username == username)
        .cloned()
        .collect();

    top_n(&user_posts, n, |post| post.likes_count as f64)
        .into_iter()
        .filter_map(|post| post.caption)
        .filter(|caption| !caption.trim().is_empty())
        .collect()
}
