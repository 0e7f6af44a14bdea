use igca_core::records::{Post, Profile};

use super::*;

fn profile(id: &str, username: &str, followers: u64) -> Profile {
    Profile {
        id: id.to_string(),
        username: username.to_string(),
        full_name: None,
        biography: None,
        external_url: None,
        followers_count: followers,
        follows_count: 0,
        posts_count: 0,
    }
}

fn post(owner_id: Option<&str>, username: &str, likes: u64, comments: u64, ts: &str) -> Post {
    Post {
        id: format!("{username}-{ts}"),
        owner_id: owner_id.map(ToString::to_string),
        owner_username: username.to_string(),
        short_code: None,
        url: None,
        display_url: None,
        post_type: "Image".into(),
        caption: None,
        hashtags: vec![],
        timestamp: ts.parse().unwrap(),
        likes_count: likes,
        comments_count: comments,
        total_engagement: likes + comments,
    }
}

#[test]
fn one_output_row_per_profile_in_input_order() {
    let profiles = vec![
        profile("1", "a", 100),
        profile("2", "b", 50),
        profile("3", "c", 10),
    ];
    let posts = vec![post(Some("2"), "b", 5, 1, "2024-01-01T10:00:00Z")];

    let enriched = aggregate(&profiles, &posts);
    assert_eq!(enriched.len(), 3);
    let usernames: Vec<&str> = enriched.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(usernames, vec!["a", "b", "c"]);
}

#[test]
fn sums_and_extrema_per_owner() {
    let profiles = vec![profile("1", "a", 100)];
    let posts = vec![
        post(Some("1"), "a", 10, 5, "2024-01-01T09:00:00Z"),
        post(Some("1"), "a", 20, 0, "2024-01-10T20:00:00Z"),
    ];

    let enriched = aggregate(&profiles, &posts);
    let row = &enriched[0];
    assert_eq!(row.post_count, 2);
    assert_eq!(row.likes_sum, 30);
    assert_eq!(row.comments_sum, 5);
    assert_eq!(row.total_engagement, 35);
    assert_eq!(
        row.min_timestamp.unwrap(),
        "2024-01-01T09:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(
        row.max_timestamp.unwrap(),
        "2024-01-10T20:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert!((row.engagement_rate - 0.35).abs() < 1e-12);
}

#[test]
fn zero_post_profile_has_zeroed_aggregates() {
    let profiles = vec![profile("1", "a", 100), profile("2", "b", 50)];
    let posts = vec![post(Some("1"), "a", 10, 5, "2024-01-01T09:00:00Z")];

    let enriched = aggregate(&profiles, &posts);
    let empty = &enriched[1];
    assert_eq!(empty.post_count, 0);
    assert_eq!(empty.likes_sum, 0);
    assert_eq!(empty.comments_sum, 0);
    assert_eq!(empty.total_engagement, 0);
    assert_eq!(empty.min_timestamp, None);
    assert_eq!(empty.max_timestamp, None);
    assert_eq!(empty.recency, 0.0);
    assert_eq!(empty.frequency, 0.0);
    // Zero engagement over 50 followers is a measured 0, not a sentinel.
    assert_eq!(empty.engagement_rate, 0.0);
}

#[test]
fn zero_followers_yields_nan_sentinel_not_panic() {
    let profiles = vec![profile("1", "a", 0)];
    let posts = vec![post(Some("1"), "a", 10, 5, "2024-01-01T09:00:00Z")];

    let enriched = aggregate(&profiles, &posts);
    assert!(enriched[0].engagement_rate.is_nan());
}

#[test]
fn recency_is_relative_to_batch_maximum() {
    let profiles = vec![profile("1", "a", 100), profile("2", "b", 100)];
    let posts = vec![
        post(Some("1"), "a", 1, 0, "2024-01-11T12:00:00Z"),
        post(Some("2"), "b", 1, 0, "2024-01-01T12:00:00Z"),
    ];

    let enriched = aggregate(&profiles, &posts);
    // "a" posted on the batch's most recent day: 1 / (0 + 1).
    assert!((enriched[0].recency - 1.0).abs() < 1e-12);
    // "b" is 10 days behind: 1 / (10 + 1).
    assert!((enriched[1].recency - 1.0 / 11.0).abs() < 1e-12);
}

#[test]
fn frequency_counts_posts_over_active_window() {
    let profiles = vec![profile("1", "a", 100)];
    let posts = vec![
        post(Some("1"), "a", 1, 0, "2024-01-01T09:00:00Z"),
        post(Some("1"), "a", 1, 0, "2024-01-10T20:00:00Z"),
    ];

    let enriched = aggregate(&profiles, &posts);
    // 2 posts over a 9-day span: 2 / (9 + 1).
    assert!((enriched[0].frequency - 0.2).abs() < 1e-12);
}

#[test]
fn single_post_profile_has_positive_finite_scores() {
    let profiles = vec![profile("1", "a", 100)];
    let posts = vec![post(Some("1"), "a", 1, 0, "2024-01-01T09:00:00Z")];

    let enriched = aggregate(&profiles, &posts);
    let row = &enriched[0];
    assert!(row.recency.is_finite() && row.recency > 0.0);
    assert!(row.frequency.is_finite() && row.frequency > 0.0);
}

#[test]
fn posts_without_owner_id_join_by_username() {
    let profiles = vec![profile("1", "a", 100)];
    let posts = vec![post(None, "a", 10, 5, "2024-01-01T09:00:00Z")];

    let enriched = aggregate(&profiles, &posts);
    assert_eq!(enriched[0].post_count, 1);
    assert_eq!(enriched[0].likes_sum, 10);
}

#[test]
fn mixed_owner_id_presence_combines_both_groups() {
    let profiles = vec![profile("1", "a", 100)];
    let posts = vec![
        post(Some("1"), "a", 10, 0, "2024-01-01T09:00:00Z"),
        post(None, "a", 5, 0, "2024-01-02T09:00:00Z"),
    ];

    let enriched = aggregate(&profiles, &posts);
    assert_eq!(enriched[0].post_count, 2);
    assert_eq!(enriched[0].likes_sum, 15);
}

#[test]
fn username_drift_within_one_owner_id_still_aggregates() {
    let profiles = vec![profile("1", "a", 100)];
    let posts = vec![
        post(Some("1"), "a", 1, 0, "2024-01-01T09:00:00Z"),
        post(Some("1"), "a-renamed", 2, 0, "2024-01-02T09:00:00Z"),
        post(Some("1"), "a", 4, 0, "2024-01-03T09:00:00Z"),
    ];

    let enriched = aggregate(&profiles, &posts);
    assert_eq!(enriched[0].post_count, 3);
    assert_eq!(enriched[0].likes_sum, 7);
}

#[test]
fn unmatched_posts_are_dropped_by_the_left_join() {
    let profiles = vec![profile("1", "a", 100)];
    let posts = vec![
        post(Some("1"), "a", 1, 0, "2024-01-01T09:00:00Z"),
        post(Some("999"), "stranger", 50, 50, "2024-01-02T09:00:00Z"),
    ];

    let enriched = aggregate(&profiles, &posts);
    assert_eq!(enriched.len(), 1);
    assert_eq!(enriched[0].likes_sum, 1);
}

#[test]
fn inputs_are_not_mutated() {
    let profiles = vec![profile("1", "a", 100)];
    let posts = vec![post(Some("1"), "a", 1, 0, "2024-01-01T09:00:00Z")];
    let profiles_before = profiles.clone();
    let posts_before = posts.clone();

    let _ = aggregate(&profiles, &posts);
    assert_eq!(profiles, profiles_before);
    assert_eq!(posts, posts_before);
}

mod dominant_username {
    use super::*;

    fn stats_from(posts: &[Post]) -> OwnerStats {
        let mut stats = OwnerStats::new(&posts[0], 0);
        for (i, p) in posts.iter().enumerate().skip(1) {
            stats.add(p, i);
        }
        stats
    }

    #[test]
    fn most_frequent_username_wins() {
        let posts = vec![
            post(Some("1"), "old-name", 0, 0, "2024-01-01T09:00:00Z"),
            post(Some("1"), "new-name", 0, 0, "2024-01-02T09:00:00Z"),
            post(Some("1"), "new-name", 0, 0, "2024-01-03T09:00:00Z"),
        ];
        assert_eq!(stats_from(&posts).dominant_username(), Some("new-name"));
    }

    #[test]
    fn ties_fall_back_to_first_seen() {
        let posts = vec![
            post(Some("1"), "first", 0, 0, "2024-01-01T09:00:00Z"),
            post(Some("1"), "second", 0, 0, "2024-01-02T09:00:00Z"),
        ];
        assert_eq!(stats_from(&posts).dominant_username(), Some("first"));
    }
}
