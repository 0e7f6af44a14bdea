//! Raw export types for the profile, post, and search JSON files.
//!
//! ## Observed shape from live exports
//!
//! ### Profile dataset (instagram-profile-scraper)
//! A top-level JSON array of flat objects. Identifiers (`id`) arrive as
//! decimal **strings**, not numbers. Count fields are plain integers but
//! can be `-1` on accounts that hide them — negative counts are rejected
//! during normalization, not silently clamped.
//!
//! ### Post dataset (instagram-post-scraper)
//! A top-level JSON array. `timestamp` is an ISO-8601 string, usually
//! with a `Z` offset (`"2023-09-01T12:00:00.000Z"`); older exports emit
//! a bare naive form (`"2023-09-01T12:00:00"`), which is treated as UTC.
//! `type` is the content format (`"Image"`, `"Video"`, `"Sidecar"`).
//! `hashtags` is a JSON array of strings, `[]` when the caption has
//! none. `ownerId` is present in current exports but was absent in older
//! ones, hence optional with a username fallback downstream.
//!
//! ### Search dataset (Google SERP export)
//! A single JSON object with the result list nested under the `organic`
//! key; each entry carries `title`, `link`, and a 1-based `position`.
//!
//! Every field is optional at this layer. Required-field enforcement
//! happens in [`crate::normalize`], which can then report the field name
//! and record index instead of a bare serde error.

use serde::Deserialize;

/// One profile object from the profile-scraper dataset.
#[derive(Debug, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,

    #[serde(default)]
    pub biography: Option<String>,

    #[serde(default, rename = "externalUrl")]
    pub external_url: Option<String>,

    #[serde(default, rename = "followersCount")]
    pub followers_count: Option<i64>,

    #[serde(default, rename = "followsCount")]
    pub follows_count: Option<i64>,

    #[serde(default, rename = "postsCount")]
    pub posts_count: Option<i64>,
}

/// One post object from the post-scraper dataset.
#[derive(Debug, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub id: Option<String>,

    /// Content format label. Kept verbatim as the pivot column category.
    #[serde(default, rename = "type")]
    pub post_type: Option<String>,

    #[serde(default, rename = "shortCode")]
    pub short_code: Option<String>,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub hashtags: Vec<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, rename = "displayUrl")]
    pub display_url: Option<String>,

    #[serde(default, rename = "commentsCount")]
    pub comments_count: Option<i64>,

    #[serde(default, rename = "likesCount")]
    pub likes_count: Option<i64>,

    /// ISO-8601 string; parsed eagerly during normalization.
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default, rename = "ownerId")]
    pub owner_id: Option<String>,

    #[serde(default, rename = "ownerUsername")]
    pub owner_username: Option<String>,
}

/// Top-level search export object.
#[derive(Debug, Deserialize)]
pub struct RawSearchResponse {
    /// Organic result list; `[]` when the export captured no results.
    #[serde(default)]
    pub organic: Vec<RawOrganicResult>,
}

/// One organic search result.
#[derive(Debug, Deserialize)]
pub struct RawOrganicResult {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub link: Option<String>,

    /// 1-based rank within the result page. Unused by the pipeline but
    /// kept for operator-facing dumps.
    #[serde(default)]
    pub position: Option<i64>,
}
