//! Analytics pipeline for IGCA.
//!
//! Takes the typed profile/post tables produced by `igca-loader` and
//! derives the report-facing datasets: enriched per-profile metrics,
//! temporal classifications and distributions, cross-tabulations,
//! top-N rankings, KPI summaries, and hashtag frequencies.
//!
//! All stages are total, synchronous functions over in-memory tables.
//! Numeric edge cases surface as data (NaN sentinel, `None`), never as
//! panics or errors.

pub mod aggregate;
pub mod hashtags;
pub mod kpi;
pub mod pipeline;
pub mod pivot;
pub mod rank;
pub mod temporal;

pub use aggregate::{aggregate, EnrichedProfile};
pub use hashtags::{hashtag_frequencies, HashtagCount};
pub use kpi::{summarize, KpiRow};
pub use pipeline::{run_analysis, AnalysisBundle, AnalysisOptions};
pub use pivot::{period_counts, pivot, weekday_counts, DistributionRow, PivotRows, PivotTable, PivotValue};
pub use rank::{top_captions, top_n, top_n_highlight, TopN};
pub use temporal::{classify, ClassifiedPost, DayPeriod, Weekday};
