//! One-shot analysis orchestration.
//!
//! Runs the full derivation over a loaded snapshot:
//!
//! 1. Aggregate posts per profile and derive engagement/recency/
//!    frequency (needs both tables).
//! 2. Classify every post into weekday and day-period buckets.
//! 3. Cross-tabulate post type against usernames and temporal buckets.
//! 4. Rank profiles and posts by the report's comparison metrics.
//! 5. Summarize per-profile KPIs and hashtag frequencies.
//!
//! Every step is a pure function over the inputs; the returned bundle is
//! freshly built and the inputs are left untouched, so independent runs
//! can share one loaded snapshot across threads.

use igca_core::records::{Post, Profile};
use serde::Serialize;

use crate::aggregate::{aggregate, EnrichedProfile};
use crate::hashtags::{hashtag_frequencies, HashtagCount};
use crate::kpi::{summarize, KpiRow};
use crate::pivot::{
    period_counts, pivot, weekday_counts, DistributionRow, PivotRows, PivotTable, PivotValue,
};
use crate::rank::{top_n, top_n_highlight, TopN};
use crate::temporal::{classify, ClassifiedPost};

/// Knobs for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Ranking depth for every top-N table.
    pub top_n: usize,
    /// Username to flag in profile rankings (the client's own account).
    pub highlight: Option<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            highlight: None,
        }
    }
}

/// Profile rankings for the report's comparison charts.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRankings {
    pub followers: TopN<EnrichedProfile>,
    pub follows: TopN<EnrichedProfile>,
    pub posts_count: TopN<EnrichedProfile>,
    pub likes_sum: TopN<EnrichedProfile>,
    pub comments_sum: TopN<EnrichedProfile>,
    /// Zero-follower profiles carry a NaN rate and are excluded here.
    pub engagement_rate: TopN<EnrichedProfile>,
}

/// Post rankings (labelled by short code in the report).
#[derive(Debug, Clone, Serialize)]
pub struct PostRankings {
    pub likes: Vec<Post>,
    pub comments: Vec<Post>,
    pub total_engagement: Vec<Post>,
}

/// Everything the narrative and document collaborators consume, as plain
/// serializable tables.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisBundle {
    pub enriched: Vec<EnrichedProfile>,
    pub classified_posts: Vec<ClassifiedPost>,
    pub kpis: Vec<KpiRow>,
    pub profile_rankings: ProfileRankings,
    pub post_rankings: PostRankings,
    pub type_count_by_username: PivotTable,
    pub engagement_by_username: PivotTable,
    pub likes_by_username: PivotTable,
    pub comments_by_username: PivotTable,
    pub type_count_by_period: PivotTable,
    pub type_count_by_weekday: PivotTable,
    pub period_distribution: Vec<DistributionRow>,
    pub weekday_distribution: Vec<DistributionRow>,
    pub hashtags: Vec<HashtagCount>,
}

/// Run the full analysis over a loaded snapshot.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn run_analysis(
    profiles: &[Profile],
    posts: &[Post],
    options: &AnalysisOptions,
) -> AnalysisBundle {
    tracing::info!(
        profiles = profiles.len(),
        posts = posts.len(),
        top_n = options.top_n,
        "running analysis"
    );

    let enriched = aggregate(profiles, posts);
    let classified = classify(posts);

    let highlight = options.highlight.as_deref();
    let n = options.top_n;

    let profile_rankings = ProfileRankings {
        followers: rank_profiles(&enriched, n, highlight, |p| p.followers_count as f64),
        follows: rank_profiles(&enriched, n, highlight, |p| p.follows_count as f64),
        posts_count: rank_profiles(&enriched, n, highlight, |p| p.posts_count as f64),
        likes_sum: rank_profiles(&enriched, n, highlight, |p| p.likes_sum as f64),
        comments_sum: rank_profiles(&enriched, n, highlight, |p| p.comments_sum as f64),
        engagement_rate: rank_profiles(&enriched, n, highlight, |p| p.engagement_rate),
    };

    let post_rankings = PostRankings {
        likes: top_n(posts, n, |p| p.likes_count as f64),
        comments: top_n(posts, n, |p| p.comments_count as f64),
        total_engagement: top_n(posts, n, |p| p.total_engagement as f64),
    };

    let bundle = AnalysisBundle {
        kpis: summarize(profiles, posts),
        profile_rankings,
        post_rankings,
        type_count_by_username: pivot(&classified, PivotRows::Username, PivotValue::Count),
        engagement_by_username: pivot(&classified, PivotRows::Username, PivotValue::EngagementSum),
        likes_by_username: pivot(&classified, PivotRows::Username, PivotValue::LikesSum),
        comments_by_username: pivot(&classified, PivotRows::Username, PivotValue::CommentsSum),
        type_count_by_period: pivot(&classified, PivotRows::Period, PivotValue::Count),
        type_count_by_weekday: pivot(&classified, PivotRows::Weekday, PivotValue::Count),
        period_distribution: period_counts(&classified),
        weekday_distribution: weekday_counts(&classified),
        hashtags: hashtag_frequencies(posts),
        enriched,
        classified_posts: classified,
    };

    tracing::info!(
        enriched = bundle.enriched.len(),
        hashtags = bundle.hashtags.len(),
        "analysis complete"
    );

    bundle
}

fn rank_profiles(
    enriched: &[EnrichedProfile],
    n: usize,
    highlight: Option<&str>,
    metric: impl Fn(&EnrichedProfile) -> f64,
) -> TopN<EnrichedProfile> {
    top_n_highlight(enriched, n, metric, |p| p.username.as_str(), highlight)
}
