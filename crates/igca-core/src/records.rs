//! Typed records produced by the loader and consumed by the analytics
//! pipeline.
//!
//! Every record is immutable after load: the pipeline stages return new
//! tables instead of mutating these, so independent analysis runs can
//! share a loaded snapshot freely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One Instagram account as captured by the profile export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable platform identifier, kept as an opaque string.
    pub id: String,
    /// Handle, unique and case-sensitive.
    pub username: String,
    pub full_name: Option<String>,
    pub biography: Option<String>,
    pub external_url: Option<String>,
    pub followers_count: u64,
    pub follows_count: u64,
    /// Lifetime post count as reported by the profile page. May exceed
    /// the number of posts actually present in the post export, which is
    /// capped per profile at extraction time.
    pub posts_count: u64,
}

/// One published post from the post export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Owning profile id. Absent in some export versions; grouping then
    /// falls back to `owner_username`.
    pub owner_id: Option<String>,
    pub owner_username: String,
    /// Post slug (`instagram.com/p/<short_code>`), used as the per-post
    /// label in rankings.
    pub short_code: Option<String>,
    pub url: Option<String>,
    /// Media thumbnail URL, passed through untouched for the report
    /// renderer.
    pub display_url: Option<String>,
    /// Content format: `"Image"`, `"Video"`, `"Sidecar"`, ... Kept as the
    /// export's own vocabulary; pivots treat it as an opaque category.
    pub post_type: String,
    pub caption: Option<String>,
    /// Hashtags in caption order. Empty when the caption has none.
    pub hashtags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub likes_count: u64,
    pub comments_count: u64,
    /// `likes_count + comments_count`, computed once at load time.
    /// Downstream stages read this field and never re-derive it.
    pub total_engagement: u64,
}

/// One candidate profile from the search-results export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: Option<String>,
    pub url: String,
    /// Username extracted from the URL when it points at a profile page;
    /// `None` for post/explore/reel URLs.
    pub username: Option<String>,
}
