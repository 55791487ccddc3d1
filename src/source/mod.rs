//! File acquisition sources
//!
//! The source mode is selected once per run: download from the fixed
//! remote base URL, or copy from a local directory laid out the same
//! way. Both variants expose the single capability
//! `acquire(relative, dest)`.

pub mod local;
pub mod remote;

pub use local::LocalSource;
pub use remote::RemoteSource;

use anyhow::Result;
use std::path::Path;

/// Acquisition strategy for manifest files, selected once at startup
#[non_exhaustive]
pub enum FileSource {
    /// Download each file from the fixed remote base URL
    Remote(RemoteSource),
    /// Copy each file from a validated local directory
    Local(LocalSource),
}

impl FileSource {
    /// Acquire one manifest file into `dest`
    ///
    /// # Errors
    ///
    /// Returns an error if the download or copy fails; the destination is
    /// never left with partial content.
    #[inline]
    pub fn acquire(&self, relative: &str, dest: &Path) -> Result<()> {
        match self {
            Self::Remote(remote) => remote.acquire(relative, dest),
            Self::Local(local) => local.acquire(relative, dest),
        }
    }

    /// Human-readable description of where files come from
    #[must_use]
    #[inline]
    pub fn describe(&self) -> String {
        match self {
            Self::Remote(remote) => remote.base_url().to_owned(),
            Self::Local(local) => local.root().display().to_string(),
        }
    }

    /// Check if this source copies from the local filesystem
    #[must_use]
    #[inline]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(..))
    }
}
