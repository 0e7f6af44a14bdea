//! Hashtag frequency table across the whole post set — the tabular data
//! behind the report's word cloud.

use std::collections::HashMap;

use igca_core::records::Post;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagCount {
    pub tag: String,
    pub count: u64,
}

/// Count every hashtag occurrence across all posts.
///
/// Sorted by count descending, then tag ascending, so equal-frequency
/// tags land in a stable order run over run.
#[must_use]
pub fn hashtag_frequencies(posts: &[Post]) -> Vec<HashtagCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for post in posts {
        for tag in &post.hashtags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut table: Vec<HashtagCount> = counts
        .into_iter()
        .map(|(tag, count)| HashtagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    table
}
