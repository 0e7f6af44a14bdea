//! Normalization from raw export types to [`igca_core::records`].
//!
//! Validation policy: a single bad record fails the whole load. The
//! aggregation stage performs a left join that assumes the post table is
//! complete, so silently dropping records would skew every derived
//! metric downstream. Errors name the field and record index so the
//! export can be fixed and re-run.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use igca_core::records::{Post, Profile};

use crate::error::LoaderError;
use crate::types::{RawPost, RawProfile};

/// Parse a profile dataset (JSON array) into typed [`Profile`] rows.
///
/// `source` is the path (or other human-readable origin) reported in
/// errors.
///
/// # Errors
///
/// Returns [`LoaderError::Json`] if the container is malformed, or
/// [`LoaderError::Schema`] naming the first record with a missing or
/// invalid required field.
pub fn profiles_from_slice(data: &[u8], source: &str) -> Result<Vec<Profile>, LoaderError> {
    let raw: Vec<RawProfile> = serde_json::from_slice(data).map_err(|e| LoaderError::Json {
        path: source.to_string(),
        source: e,
    })?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| normalize_profile(record, index, source))
        .collect()
}

/// Parse a post dataset (JSON array) into typed [`Post`] rows.
///
/// Timestamps are parsed eagerly and `total_engagement` is computed
/// here, once; downstream stages never re-derive it.
///
/// # Errors
///
/// Returns [`LoaderError::Json`] if the container is malformed,
/// [`LoaderError::Schema`] for a missing/invalid required field, or
/// [`LoaderError::Timestamp`] for an unparseable timestamp.
pub fn posts_from_slice(data: &[u8], source: &str) -> Result<Vec<Post>, LoaderError> {
    let raw: Vec<RawPost> = serde_json::from_slice(data).map_err(|e| LoaderError::Json {
        path: source.to_string(),
        source: e,
    })?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| normalize_post(record, index, source))
        .collect()
}

fn normalize_profile(
    raw: RawProfile,
    index: usize,
    source: &str,
) -> Result<Profile, LoaderError> {
    Ok(Profile {
        id: require(raw.id, "id", index, source)?,
        username: require(raw.username, "username", index, source)?,
        full_name: raw.full_name,
        biography: raw.biography,
        external_url: raw.external_url,
        followers_count: require_count(raw.followers_count, "followersCount", index, source)?,
        follows_count: require_count(raw.follows_count, "followsCount", index, source)?,
        posts_count: require_count(raw.posts_count, "postsCount", index, source)?,
    })
}

fn normalize_post(raw: RawPost, index: usize, source: &str) -> Result<Post, LoaderError> {
    let timestamp_raw = require(raw.timestamp, "timestamp", index, source)?;
    let timestamp =
        parse_timestamp(&timestamp_raw).ok_or_else(|| LoaderError::Timestamp {
            index,
            value: timestamp_raw,
            path: source.to_string(),
        })?;

    let likes_count = require_count(raw.likes_count, "likesCount", index, source)?;
    let comments_count = require_count(raw.comments_count, "commentsCount", index, source)?;

    Ok(Post {
        id: require(raw.id, "id", index, source)?,
        owner_id: raw.owner_id,
        owner_username: require(raw.owner_username, "ownerUsername", index, source)?,
        short_code: raw.short_code,
        url: raw.url,
        display_url: raw.display_url,
        post_type: require(raw.post_type, "type", index, source)?,
        caption: raw.caption,
        hashtags: raw.hashtags,
        timestamp,
        likes_count,
        comments_count,
        total_engagement: likes_count + comments_count,
    })
}

fn require<T>(
    value: Option<T>,
    field: &'static str,
    index: usize,
    source: &str,
) -> Result<T, LoaderError> {
    value.ok_or_else(|| LoaderError::Schema {
        field,
        index,
        path: source.to_string(),
    })
}

/// Non-negative count field: absent or negative values are schema
/// errors (hidden-count exports emit `-1`).
fn require_count(
    value: Option<i64>,
    field: &'static str,
    index: usize,
    source: &str,
) -> Result<u64, LoaderError> {
    let raw = require(value, field, index, source)?;
    u64::try_from(raw).map_err(|_| LoaderError::Schema {
        field,
        index,
        path: source.to_string(),
    })
}

/// Accepts RFC 3339 (`2023-09-01T12:00:00.000Z`) and the bare naive form
/// (`2023-09-01T12:00:00`, treated as UTC) seen in older exports.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    value
        .parse::<NaiveDateTime>()
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;
