//! Cross-tabulations of classified posts: a categorical row axis against
//! the post `type` column axis, cells holding counts or metric sums.

use std::collections::HashMap;

use serde::Serialize;

use crate::temporal::{ClassifiedPost, DayPeriod, Weekday};

/// Row axis of a pivot.
///
/// `Weekday` and `Period` are canonical axes: the output always carries
/// all of their buckets, in fixed order, zero-filled. `Username` is an
/// open axis: rows appear in first-seen input order, and absent
/// combinations are simply omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotRows {
    Username,
    Weekday,
    Period,
}

impl PivotRows {
    fn dim_name(self) -> &'static str {
        match self {
            PivotRows::Username => "ownerUsername",
            PivotRows::Weekday => "dayOfWeek",
            PivotRows::Period => "periodOfDay",
        }
    }
}

/// Cell aggregation of a pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotValue {
    Count,
    LikesSum,
    CommentsSum,
    EngagementSum,
}

impl PivotValue {
    fn of(self, post: &ClassifiedPost) -> u64 {
        match self {
            PivotValue::Count => 1,
            PivotValue::LikesSum => post.post.likes_count,
            PivotValue::CommentsSum => post.post.comments_count,
            PivotValue::EngagementSum => post.post.total_engagement,
        }
    }

    fn dim_name(self) -> &'static str {
        match self {
            PivotValue::Count => "count",
            PivotValue::LikesSum => "likesSum",
            PivotValue::CommentsSum => "commentsSum",
            PivotValue::EngagementSum => "engagementSum",
        }
    }
}

/// A dense 2-D cross-tabulation. `cells[r][c]` pairs with `rows[r]` and
/// `cols[c]`; both label vectors are in final output order, which is
/// stable across runs for identical input.
#[derive(Debug, Clone, Serialize)]
pub struct PivotTable {
    pub row_dim: String,
    pub col_dim: String,
    pub value_dim: String,
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub cells: Vec<Vec<u64>>,
}

impl PivotTable {
    /// Cell lookup by labels; `None` when either label is absent.
    #[must_use]
    pub fn value(&self, row: &str, col: &str) -> Option<u64> {
        let r = self.rows.iter().position(|label| label == row)?;
        let c = self.cols.iter().position(|label| label == col)?;
        Some(self.cells[r][c])
    }
}

/// Build a pivot of `value` over `rows` × post type.
#[must_use]
pub fn pivot(posts: &[ClassifiedPost], rows: PivotRows, value: PivotValue) -> PivotTable {
    let row_labels = row_labels(posts, rows);
    let col_labels = first_seen(posts.iter().map(|p| p.post.post_type.as_str()));

    let row_index: HashMap<&str, usize> = row_labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();
    let col_index: HashMap<&str, usize> = col_labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();

    let mut cells = vec![vec![0u64; col_labels.len()]; row_labels.len()];
    for post in posts {
        let row_label = row_label_of(post, rows);
        // Both lookups always hit: row labels were derived from this
        // same post list (or the canonical axis covers every bucket).
        let (Some(&r), Some(&c)) = (
            row_index.get(row_label.as_str()),
            col_index.get(post.post.post_type.as_str()),
        ) else {
            continue;
        };
        cells[r][c] += value.of(post);
    }

    PivotTable {
        row_dim: rows.dim_name().to_string(),
        col_dim: "type".to_string(),
        value_dim: value.dim_name().to_string(),
        rows: row_labels,
        cols: col_labels,
        cells,
    }
}

/// One bucket of a 1-D temporal distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionRow {
    pub label: String,
    pub count: u64,
}

/// Post counts per day period, always 4 rows in canonical order.
#[must_use]
pub fn period_counts(posts: &[ClassifiedPost]) -> Vec<DistributionRow> {
    DayPeriod::ALL
        .iter()
        .map(|period| DistributionRow {
            label: period.label().to_string(),
            count: posts
                .iter()
                .filter(|p| p.period_of_day == *period)
                .count() as u64,
        })
        .collect()
}

/// Post counts per weekday, always 7 rows in canonical order.
#[must_use]
pub fn weekday_counts(posts: &[ClassifiedPost]) -> Vec<DistributionRow> {
    Weekday::ALL
        .iter()
        .map(|day| DistributionRow {
            label: day.label().to_string(),
            count: posts.iter().filter(|p| p.day_of_week == *day).count() as u64,
        })
        .collect()
}

fn row_labels(posts: &[ClassifiedPost], rows: PivotRows) -> Vec<String> {
    match rows {
        PivotRows::Username => {
            first_seen(posts.iter().map(|p| p.post.owner_username.as_str()))
        }
        PivotRows::Weekday => Weekday::ALL.iter().map(|d| d.label().to_string()).collect(),
        PivotRows::Period => DayPeriod::ALL.iter().map(|p| p.label().to_string()).collect(),
    }
}

fn row_label_of(post: &ClassifiedPost, rows: PivotRows) -> String {
    match rows {
        PivotRows::Username => post.post.owner_username.clone(),
        PivotRows::Weekday => post.day_of_week.label().to_string(),
        PivotRows::Period => post.period_of_day.label().to_string(),
    }
}

fn first_seen<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for label in labels {
        if !seen.iter().any(|existing: &String| existing == label) {
            seen.push(label.to_string());
        }
    }
    seen
}

#[cfg(test)]
#[path = "pivot_test.rs"]
mod pivot_test;
