//! Path-based entry points: read a file, then delegate to the slice
//! parsers in [`crate::normalize`].

use std::path::Path;

use igca_core::records::{Post, Profile};

use crate::error::LoaderError;
use crate::normalize::{posts_from_slice, profiles_from_slice};

/// Load and normalize the profile export at `path`.
///
/// # Errors
///
/// Returns [`LoaderError`] if the file cannot be read or any record
/// fails validation.
pub fn load_profiles(path: &Path) -> Result<Vec<Profile>, LoaderError> {
    let data = read(path)?;
    let profiles = profiles_from_slice(&data, &path.display().to_string())?;
    tracing::debug!(count = profiles.len(), path = %path.display(), "loaded profiles");
    Ok(profiles)
}

/// Load and normalize the post export at `path`.
///
/// # Errors
///
/// Returns [`LoaderError`] if the file cannot be read or any record
/// fails validation.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, LoaderError> {
    let data = read(path)?;
    let posts = posts_from_slice(&data, &path.display().to_string())?;
    tracing::debug!(count = posts.len(), path = %path.display(), "loaded posts");
    Ok(posts)
}

pub(crate) fn read(path: &Path) -> Result<Vec<u8>, LoaderError> {
    std::fs::read(path).map_err(|e| LoaderError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
