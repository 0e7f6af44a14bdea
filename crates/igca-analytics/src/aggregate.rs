//! Profile–post aggregation: group posts per owner, join onto profiles,
//! derive engagement, recency, and frequency metrics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use igca_core::records::{Post, Profile};
use serde::Serialize;

/// One output row per input profile, carrying the profile attributes
/// plus everything aggregated from that profile's posts.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedProfile {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub biography: Option<String>,
    pub external_url: Option<String>,
    pub followers_count: u64,
    pub follows_count: u64,
    pub posts_count: u64,
    /// Posts actually present in the export for this profile. 0 when the
    /// left join found none.
    pub post_count: u64,
    pub likes_sum: u64,
    pub comments_sum: u64,
    pub min_timestamp: Option<DateTime<Utc>>,
    pub max_timestamp: Option<DateTime<Utc>>,
    pub total_engagement: u64,
    /// `total_engagement / followers_count`; NaN when the profile has
    /// zero followers. Rankings must filter non-finite values.
    pub engagement_rate: f64,
    /// `1 / (days since the batch's most recent post + 1)`; 0 for
    /// profiles with no posts.
    pub recency: f64,
    /// `post_count / (active window in days + 1)`; 0 for profiles with
    /// no posts.
    pub frequency: f64,
}

/// Grouping key for posts: owner id when the export provides one,
/// username otherwise. The two namespaces are kept distinct so a numeric
/// username can never collide with an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum OwnerKey {
    Id(String),
    Username(String),
}

#[derive(Debug, Clone)]
struct OwnerStats {
    post_count: u64,
    likes_sum: u64,
    comments_sum: u64,
    min_timestamp: DateTime<Utc>,
    max_timestamp: DateTime<Utc>,
    /// username -> (occurrences, first-seen position); used to pick a
    /// deterministic representative when usernames drift within one id.
    username_votes: HashMap<String, (u64, usize)>,
}

impl OwnerStats {
    fn new(post: &Post, position: usize) -> Self {
        let mut username_votes = HashMap::new();
        username_votes.insert(post.owner_username.clone(), (1, position));
        Self {
            post_count: 1,
            likes_sum: post.likes_count,
            comments_sum: post.comments_count,
            min_timestamp: post.timestamp,
            max_timestamp: post.timestamp,
            username_votes,
        }
    }

    fn add(&mut self, post: &Post, position: usize) {
        self.post_count += 1;
        self.likes_sum += post.likes_count;
        self.comments_sum += post.comments_count;
        self.min_timestamp = self.min_timestamp.min(post.timestamp);
        self.max_timestamp = self.max_timestamp.max(post.timestamp);
        self.username_votes
            .entry(post.owner_username.clone())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, position));
    }

    fn merge(&mut self, other: &OwnerStats) {
        self.post_count += other.post_count;
        self.likes_sum += other.likes_sum;
        self.comments_sum += other.comments_sum;
        self.min_timestamp = self.min_timestamp.min(other.min_timestamp);
        self.max_timestamp = self.max_timestamp.max(other.max_timestamp);
        for (name, (count, position)) in &other.username_votes {
            self.username_votes
                .entry(name.clone())
                .and_modify(|(c, p)| {
                    *c += count;
                    *p = (*p).min(*position);
                })
                .or_insert((*count, *position));
        }
    }

    /// Most frequent username in the group; ties fall back to the
    /// earliest occurrence in input order.
    fn dominant_username(&self) -> Option<&str> {
        self.username_votes
            .iter()
            .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
            .map(|(name, _)| name.as_str())
    }
}

/// Aggregate posts per profile and derive the engagement/recency/
/// frequency metrics.
///
/// Left outer join: every input profile yields exactly one output row,
/// in input order, with zeroed aggregates when no posts match. Inputs
/// are not mutated; concurrent runs may share them.
#[must_use]
pub fn aggregate(profiles: &[Profile], posts: &[Post]) -> Vec<EnrichedProfile> {
    let groups = group_posts(posts);

    // Pair every profile with its stats first: the recency reference
    // point is the maximum post timestamp across the whole batch, so it
    // cannot be computed row by row.
    let matched: Vec<(usize, Option<OwnerStats>)> = profiles
        .iter()
        .enumerate()
        .map(|(i, profile)| (i, stats_for_profile(profile, &groups)))
        .collect();

    let global_max = matched
        .iter()
        .filter_map(|(_, stats)| stats.as_ref().map(|s| s.max_timestamp))
        .max();

    matched
        .into_iter()
        .map(|(i, stats)| enrich(&profiles[i], stats, global_max))
        .collect()
}

fn group_posts(posts: &[Post]) -> HashMap<OwnerKey, OwnerStats> {
    let mut groups: HashMap<OwnerKey, OwnerStats> = HashMap::new();

    for (position, post) in posts.iter().enumerate() {
        let key = match &post.owner_id {
            Some(id) => OwnerKey::Id(id.clone()),
            None => OwnerKey::Username(post.owner_username.clone()),
        };
        groups
            .entry(key)
            .and_modify(|stats| stats.add(post, position))
            .or_insert_with(|| OwnerStats::new(post, position));
    }

    for (key, stats) in &groups {
        let OwnerKey::Id(id) = key else { continue };
        if stats.username_votes.len() > 1 {
            tracing::warn!(
                owner_id = %id,
                usernames = stats.username_votes.len(),
                picked = stats.dominant_username().unwrap_or_default(),
                "posts under one owner id carry differing usernames"
            );
        }
    }

    groups
}

/// Match a profile to its post group: by id first, then by username for
/// posts that arrived without an owner id. When both match (mixed
/// export), the two partial groups are combined.
fn stats_for_profile(
    profile: &Profile,
    groups: &HashMap<OwnerKey, OwnerStats>,
) -> Option<OwnerStats> {
    let by_id = groups.get(&OwnerKey::Id(profile.id.clone()));
    let by_username = groups.get(&OwnerKey::Username(profile.username.clone()));

    match (by_id, by_username) {
        (Some(a), Some(b)) => {
            let mut merged = a.clone();
            merged.merge(b);
            Some(merged)
        }
        (Some(a), None) => Some(a.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn enrich(
    profile: &Profile,
    stats: Option<OwnerStats>,
    global_max: Option<DateTime<Utc>>,
) -> EnrichedProfile {
    let (post_count, likes_sum, comments_sum, min_ts, max_ts) = match &stats {
        Some(s) => (
            s.post_count,
            s.likes_sum,
            s.comments_sum,
            Some(s.min_timestamp),
            Some(s.max_timestamp),
        ),
        None => (0, 0, 0, None, None),
    };

    let total_engagement = likes_sum + comments_sum;

    let engagement_rate = if profile.followers_count == 0 {
        f64::NAN
    } else {
        total_engagement as f64 / profile.followers_count as f64
    };

    let (recency, frequency) = match (min_ts, max_ts, global_max) {
        (Some(min), Some(max), Some(reference)) => {
            let days_behind = (reference - max).num_days();
            let window_days = (max - min).num_days();
            (
                1.0 / (days_behind as f64 + 1.0),
                post_count as f64 / (window_days as f64 + 1.0),
            )
        }
        _ => (0.0, 0.0),
    };

    EnrichedProfile {
        id: profile.id.clone(),
        username: profile.username.clone(),
        full_name: profile.full_name.clone(),
        biography: profile.biography.clone(),
        external_url: profile.external_url.clone(),
        followers_count: profile.followers_count,
        follows_count: profile.follows_count,
        posts_count: profile.posts_count,
        post_count,
        likes_sum,
        comments_sum,
        min_timestamp: min_ts,
        max_timestamp: max_ts,
        total_engagement,
        engagement_rate,
        recency,
        frequency,
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
