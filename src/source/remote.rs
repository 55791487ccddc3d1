//! Remote file acquisition over HTTP

use crate::error::ShipError;
use crate::utils::fs::create_parent_directories;
use anyhow::{Context as _, Result};
use reqwest::blocking::Client;
use std::io::Write as _;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Total fetch attempts per file
pub const FETCH_ATTEMPTS: u32 = 3;

/// Fixed delay between fetch attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads manifest files from a fixed remote base URL
pub struct RemoteSource {
    base_url: String,
    client: Client,
}

impl RemoteSource {
    /// Create a remote source for the given base URL
    ///
    /// Building the HTTP client initializes TLS; a failure here means the
    /// host has no working fetch capability and is reported as a
    /// prerequisite error.
    ///
    /// # Errors
    ///
    /// Returns a [`ShipError::Prerequisite`] if the client cannot be built.
    #[inline]
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                ShipError::prerequisite(format!("Failed to initialize HTTP client: {err}"))
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// The base URL files are fetched from
    #[must_use]
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the remote base once, before any file is fetched
    ///
    /// Any response counts as reachable; only transport failures abort.
    ///
    /// # Errors
    ///
    /// Returns a [`ShipError::Network`] with the `--local` remediation if
    /// the base URL cannot be reached at all.
    #[inline]
    pub fn check_connectivity(&self) -> Result<()> {
        self.client.head(&self.base_url).send().map_err(|err| {
            ShipError::network(format!(
                "Cannot reach {}: {err}. Check your connection, or install from a directory with --local",
                self.base_url
            ))
        })?;
        Ok(())
    }

    /// Download one manifest file into `dest`
    ///
    /// The payload is staged into a temporary file beside the destination
    /// and only moved into place after the non-empty check, so a failed or
    /// truncated download never lands at the final path.
    ///
    /// # Errors
    ///
    /// Returns an error if all fetch attempts fail or the staged file
    /// cannot be persisted.
    #[inline]
    pub fn acquire(&self, relative: &str, dest: &Path) -> Result<()> {
        let url = format!("{}/{relative}", self.base_url);
        let payload = fetch_with_retry(&url, RETRY_DELAY, || self.fetch_once(&url))?;

        create_parent_directories(dest)?;
        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to stage download for {}", dest.display()))?;
        staged
            .write_all(&payload)
            .with_context(|| format!("Failed to write staged download for {}", dest.display()))?;
        staged.persist(dest).map_err(|err| {
            ShipError::source(format!("Failed to move '{relative}' into place: {err}"))
        })?;

        debug!("Downloaded {url} ({} bytes)", payload.len());

        Ok(())
    }

    /// Perform a single GET, returning the body on HTTP success
    fn fetch_once(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShipError::source(format!("Fetching {url} returned HTTP {status}")).into());
        }

        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response body from {url}"))?;

        Ok(bytes.to_vec())
    }
}

/// Retry a fetch up to [`FETCH_ATTEMPTS`] times with a fixed delay
///
/// A zero-byte payload counts as a failure: a server error page or a
/// truncated response must not pass as a successful download.
fn fetch_with_retry<F>(url: &str, delay: Duration, mut attempt_fetch: F) -> Result<Vec<u8>>
where
    F: FnMut() -> Result<Vec<u8>>,
{
    let mut last_error: Option<anyhow::Error> = None;

    for attempt in 1..=FETCH_ATTEMPTS {
        if attempt > 1 {
            std::thread::sleep(delay);
        }

        match attempt_fetch() {
            Ok(payload) if payload.is_empty() => {
                debug!("Attempt {attempt}/{FETCH_ATTEMPTS} for {url} returned an empty payload");
                last_error = Some(ShipError::source(format!("Empty response from {url}")).into());
            }
            Ok(payload) => return Ok(payload),
            Err(err) => {
                debug!("Attempt {attempt}/{FETCH_ATTEMPTS} for {url} failed: {err:#}");
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| ShipError::source(format!("Failed to fetch {url}")).into()))
}
