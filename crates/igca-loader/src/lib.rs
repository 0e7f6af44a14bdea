//! Record loader for IGCA.
//!
//! Parses the raw JSON exports (profile scraper, post scraper, Google
//! SERP) into the typed tables in [`igca_core::records`]. Validation
//! happens here, once: downstream stages assume complete, well-formed
//! tables and never re-check fields.

pub mod error;
pub mod load;
pub mod normalize;
pub mod search;
pub mod types;

pub use error::LoaderError;
pub use load::{load_posts, load_profiles};
pub use normalize::{posts_from_slice, profiles_from_slice};
pub use search::{load_search_results, search_hits_from_slice};
