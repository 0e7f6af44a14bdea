use igca_core::records::Post;

use super::*;
use crate::temporal::classify;

fn post(username: &str, post_type: &str, likes: u64, comments: u64, ts: &str) -> Post {
    Post {
        id: format!("{username}-{ts}"),
        owner_id: None,
        owner_username: username.to_string(),
        short_code: None,
        url: None,
        display_url: None,
        post_type: post_type.to_string(),
        caption: None,
        hashtags: vec![],
        timestamp: ts.parse().unwrap(),
        likes_count: likes,
        comments_count: comments,
        total_engagement: likes + comments,
    }
}

#[test]
fn username_by_type_counts() {
    let posts = classify(&[
        post("a", "Image", 1, 0, "2024-01-01T09:00:00Z"),
        post("a", "Video", 1, 0, "2024-01-02T09:00:00Z"),
        post("a", "Image", 1, 0, "2024-01-03T09:00:00Z"),
        post("b", "Video", 1, 0, "2024-01-04T09:00:00Z"),
    ]);

    let table = pivot(&posts, PivotRows::Username, PivotValue::Count);
    assert_eq!(table.rows, vec!["a", "b"]);
    assert_eq!(table.cols, vec!["Image", "Video"]);
    assert_eq!(table.value("a", "Image"), Some(2));
    assert_eq!(table.value("a", "Video"), Some(1));
    assert_eq!(table.value("b", "Image"), Some(0));
    assert_eq!(table.value("b", "Video"), Some(1));
}

#[test]
fn engagement_sum_uses_precomputed_totals() {
    let posts = classify(&[
        post("a", "Image", 10, 5, "2024-01-01T09:00:00Z"),
        post("a", "Image", 20, 0, "2024-01-02T09:00:00Z"),
    ]);

    let table = pivot(&posts, PivotRows::Username, PivotValue::EngagementSum);
    assert_eq!(table.value("a", "Image"), Some(35));
}

#[test]
fn weekday_axis_always_has_seven_rows_in_canonical_order() {
    // A single Wednesday post; the other six days must still be present.
    let posts = classify(&[post("a", "Image", 1, 0, "2024-01-03T09:00:00Z")]);

    let table = pivot(&posts, PivotRows::Weekday, PivotValue::Count);
    assert_eq!(
        table.rows,
        vec![
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday"
        ]
    );
    assert_eq!(table.value("Wednesday", "Image"), Some(1));
    assert_eq!(table.value("Monday", "Image"), Some(0));
    assert_eq!(table.value("Sunday", "Image"), Some(0));
}

#[test]
fn period_axis_always_has_four_rows_in_canonical_order() {
    let posts = classify(&[post("a", "Video", 1, 0, "2024-01-01T20:00:00Z")]);

    let table = pivot(&posts, PivotRows::Period, PivotValue::Count);
    assert_eq!(
        table.rows,
        vec!["Morning", "Afternoon", "Evening", "Overnight"]
    );
    assert_eq!(table.value("Evening", "Video"), Some(1));
    assert_eq!(table.value("Morning", "Video"), Some(0));
}

#[test]
fn likes_and_comments_sums() {
    let posts = classify(&[
        post("a", "Image", 10, 3, "2024-01-01T09:00:00Z"),
        post("a", "Image", 5, 2, "2024-01-02T09:00:00Z"),
    ]);

    let likes = pivot(&posts, PivotRows::Username, PivotValue::LikesSum);
    let comments = pivot(&posts, PivotRows::Username, PivotValue::CommentsSum);
    assert_eq!(likes.value("a", "Image"), Some(15));
    assert_eq!(comments.value("a", "Image"), Some(5));
}

#[test]
fn empty_input_still_emits_canonical_axes() {
    let table = pivot(&[], PivotRows::Weekday, PivotValue::Count);
    assert_eq!(table.rows.len(), 7);
    assert!(table.cols.is_empty());

    let periods = period_counts(&[]);
    assert_eq!(periods.len(), 4);
    assert!(periods.iter().all(|row| row.count == 0));

    let days = weekday_counts(&[]);
    assert_eq!(days.len(), 7);
    assert!(days.iter().all(|row| row.count == 0));
}

#[test]
fn distributions_count_in_canonical_order() {
    let posts = classify(&[
        post("a", "Image", 1, 0, "2024-01-01T09:00:00Z"), // Monday morning
        post("a", "Image", 1, 0, "2024-01-01T20:00:00Z"), // Monday evening
        post("a", "Image", 1, 0, "2024-01-07T20:00:00Z"), // Sunday evening
    ]);

    let periods = period_counts(&posts);
    assert_eq!(
        periods,
        vec![
            DistributionRow { label: "Morning".into(), count: 1 },
            DistributionRow { label: "Afternoon".into(), count: 0 },
            DistributionRow { label: "Evening".into(), count: 2 },
            DistributionRow { label: "Overnight".into(), count: 0 },
        ]
    );

    let days = weekday_counts(&posts);
    assert_eq!(days[0], DistributionRow { label: "Monday".into(), count: 2 });
    assert_eq!(days[6], DistributionRow { label: "Sunday".into(), count: 1 });
}

#[test]
fn username_rows_follow_first_seen_order() {
    let posts = classify(&[
        post("zeta", "Image", 1, 0, "2024-01-01T09:00:00Z"),
        post("alpha", "Image", 1, 0, "2024-01-02T09:00:00Z"),
        post("zeta", "Video", 1, 0, "2024-01-03T09:00:00Z"),
    ]);

    let table = pivot(&posts, PivotRows::Username, PivotValue::Count);
    assert_eq!(table.rows, vec!["zeta", "alpha"]);
}
