//! Search-results loader: flattens the SERP export's `organic` list into
//! candidate-profile rows and extracts usernames from profile URLs.

use std::path::Path;

use igca_core::records::SearchHit;
use regex::Regex;

use crate::error::LoaderError;
use crate::types::RawSearchResponse;

/// Path segments that are Instagram surfaces, not profile handles.
const RESERVED_SEGMENTS: [&str; 7] = [
    "p", "reel", "reels", "explore", "stories", "tv", "accounts",
];

/// Load the search export at `path` and flatten it into [`SearchHit`]
/// rows.
///
/// # Errors
///
/// Returns [`LoaderError::Io`] if the file cannot be read, or
/// [`LoaderError::Json`] naming the path if the container is malformed.
pub fn load_search_results(path: &Path) -> Result<Vec<SearchHit>, LoaderError> {
    let data = crate::load::read(path)?;
    search_hits_from_slice(&data, &path.display().to_string())
}

/// Parse a search export into flat [`SearchHit`] rows.
///
/// Results without a `link` are dropped with a warning — they carry
/// nothing the extraction collaborator can act on. Results whose URL is
/// not a profile page are kept with `username: None` so the operator can
/// review them.
///
/// # Errors
///
/// Returns [`LoaderError::Json`] naming `source` if the container is
/// malformed.
pub fn search_hits_from_slice(data: &[u8], source: &str) -> Result<Vec<SearchHit>, LoaderError> {
    let raw: RawSearchResponse = serde_json::from_slice(data).map_err(|e| LoaderError::Json {
        path: source.to_string(),
        source: e,
    })?;

    let profile_url = profile_url_regex();

    let hits = raw
        .organic
        .into_iter()
        .filter_map(|result| {
            let Some(url) = result.link else {
                tracing::warn!(
                    title = result.title.as_deref().unwrap_or("<untitled>"),
                    "search result without a link, skipping"
                );
                return None;
            };
            let username = username_from_url(&profile_url, &url);
            Some(SearchHit {
                title: result.title,
                url,
                username,
            })
        })
        .collect();

    Ok(hits)
}

fn profile_url_regex() -> Regex {
    Regex::new(r"^https?://(?:www\.)?instagram\.com/([A-Za-z0-9_.]+)/?(?:[?#].*)?$")
        .expect("valid profile URL regex")
}

/// Extract the handle from a profile URL. URLs with extra path segments
/// (posts, reels) or reserved top-level surfaces yield `None`.
fn username_from_url(profile_url: &Regex, url: &str) -> Option<String> {
    let caps = profile_url.captures(url)?;
    let candidate = caps.get(1)?.as_str();
    if RESERVED_SEGMENTS.contains(&candidate) {
        return None;
    }
    Some(candidate.to_string())
}
