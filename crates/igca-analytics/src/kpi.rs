//! Per-profile KPI summary: mean likes/comments, post counts, and the
//! engagement-rate percentage used in report tables.

use std::collections::HashMap;

use igca_core::records::{Post, Profile};
use serde::Serialize;

/// One KPI row per profile, rounded for presentation.
///
/// `None` in the average fields means "no posts captured", which is
/// deliberately distinct from a measured 0.0 (a profile whose posts got
/// zero engagement). Serializes as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct KpiRow {
    pub username: String,
    pub followers_count: u64,
    pub follows_count: u64,
    pub posts_count: u64,
    /// Posts present in the export for this profile.
    pub total_posts: u64,
    pub avg_likes: Option<f64>,
    pub avg_comments: Option<f64>,
    /// `(avg_likes + avg_comments) / followers * 100`, 2 decimals.
    /// `None` when there are no posts or no followers.
    pub engagement_rate_pct: Option<f64>,
}

/// Summarize per-profile KPIs. One row per profile, input order.
///
/// Posts are matched by username, the join key the report tables use.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(profiles: &[Profile], posts: &[Post]) -> Vec<KpiRow> {
    let mut per_user: HashMap<&str, (u64, u64, u64)> = HashMap::new();
    for post in posts {
        let entry = per_user.entry(post.owner_username.as_str()).or_default();
        entry.0 += 1;
        entry.1 += post.likes_count;
        entry.2 += post.comments_count;
    }

    profiles
        .iter()
        .map(|profile| {
            let (total_posts, likes_sum, comments_sum) = per_user
                .get(profile.username.as_str())
                .copied()
                .unwrap_or_default();

            let (avg_likes, avg_comments) = if total_posts == 0 {
                (None, None)
            } else {
                (
                    Some(likes_sum as f64 / total_posts as f64),
                    Some(comments_sum as f64 / total_posts as f64),
                )
            };

            let engagement_rate_pct = match (avg_likes, avg_comments) {
                (Some(likes), Some(comments)) if profile.followers_count > 0 => Some(round2(
                    (likes + comments) / profile.followers_count as f64 * 100.0,
                )),
                _ => None,
            };

            KpiRow {
                username: profile.username.clone(),
                followers_count: profile.followers_count,
                follows_count: profile.follows_count,
                posts_count: profile.posts_count,
                total_posts,
                avg_likes: avg_likes.map(round2),
                avg_comments: avg_comments.map(round2),
                engagement_rate_pct,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
