use std::path::PathBuf;

/// Application configuration resolved from `IGCA_*` environment
/// variables. Every field has a default, so an empty environment yields
/// a usable config pointing at the conventional `data/raw` layout.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Search-results export (Google SERP JSON).
    pub search_path: PathBuf,
    /// Profile export (Apify profile-scraper dataset).
    pub profile_path: PathBuf,
    /// Post export (Apify post-scraper dataset).
    pub post_path: PathBuf,
    /// Analysis brief YAML.
    pub brief_path: PathBuf,
    /// Directory the CLI writes derived tables into.
    pub reports_path: PathBuf,
    /// Per-profile cap applied at extraction time; recorded here so the
    /// pipeline and the extraction collaborator agree on it.
    pub max_posts_per_profile: usize,
    /// Default ranking depth for top-N tables.
    pub top_n: usize,
    pub log_level: String,
}
