//! Temporal classification of posts into weekday and day-period buckets.
//!
//! The vocabulary is a hard-coded English lookup table — weekday names
//! must never come from the host locale, which made the ordering of
//! temporal tables drift between machines before this was fixed.

use chrono::{Datelike, Timelike};
use igca_core::records::Post;
use serde::{Deserialize, Serialize};

/// Day of week, canonical order Monday → Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Canonical output order. Temporal tables always carry all seven
    /// entries in this order, zero-filled where no posts fall.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Period of day, canonical order Morning → Overnight.
///
/// Hour ranges (post's UTC-normalized timestamp hour):
/// Morning `[5,12)`, Afternoon `[12,18)`, Evening `[18,23)`,
/// Overnight `[23,24) ∪ [0,5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Overnight,
}

impl DayPeriod {
    /// Canonical output order, mirroring [`Weekday::ALL`].
    pub const ALL: [DayPeriod; 4] = [
        DayPeriod::Morning,
        DayPeriod::Afternoon,
        DayPeriod::Evening,
        DayPeriod::Overnight,
    ];

    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            18..=22 => DayPeriod::Evening,
            _ => DayPeriod::Overnight,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Morning",
            DayPeriod::Afternoon => "Afternoon",
            DayPeriod::Evening => "Evening",
            DayPeriod::Overnight => "Overnight",
        }
    }
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A post with its temporal buckets attached.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedPost {
    #[serde(flatten)]
    pub post: Post,
    pub day_of_week: Weekday,
    pub period_of_day: DayPeriod,
}

/// Attach weekday and day-period buckets to every post.
///
/// Pure function of each post's timestamp; input order is preserved.
#[must_use]
pub fn classify(posts: &[Post]) -> Vec<ClassifiedPost> {
    posts
        .iter()
        .map(|post| ClassifiedPost {
            day_of_week: Weekday::from_chrono(post.timestamp.weekday()),
            period_of_day: DayPeriod::from_hour(post.timestamp.hour()),
            post: post.clone(),
        })
        .collect()
}
