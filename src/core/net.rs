// src/core/net.rs
// Cached HTTP GET (reqwest, blocking)

use std::{fs, path::{Path, PathBuf}, time::Duration};

use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use url::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

const PARTIAL_EXT: &str = "part";

/// Fetch capability the scrapers depend on.
pub trait Fetch {
    fn get_bytes(&self, url: &Url) -> Result<Vec<u8>>;

    /// Body decoded as UTF-8 (lossy).
    fn get_text(&self, url: &Url) -> Result<String> {
        let bytes = self.get_bytes(url)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// HTTP client with an on-disk response cache. One file per URL, no expiry.
pub struct CachedClient {
    client: reqwest::blocking::Client,
    cache_dir: PathBuf,
}

impl CachedClient {
    pub fn new(cache_dir: impl AsRef<Path>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| ScrapeError::Configuration(format!("http client: {e}")))?;
        Ok(Self { client, cache_dir: cache_dir.as_ref().to_path_buf() })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Drop every cached response.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
        }
        debug!(dir = %self.cache_dir.display(), "cache cleared");
        Ok(())
    }

    fn entry_path(&self, url: &Url) -> PathBuf {
        let key = hex::encode(Sha256::digest(url.as_str().as_bytes()));
        self.cache_dir.join(key)
    }

    /// Entries only appear at their final path once fully written; a
    /// half-written `.part` file is never read back.
    fn store(&self, path: &Path, body: &[u8]) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;
        let partial = path.with_extension(PARTIAL_EXT);
        let written = fs::write(&partial, body).and_then(|_| fs::rename(&partial, path));
        if written.is_err() {
            let _ = fs::remove_file(&partial);
        }
        written
    }

    fn download(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self.client
            .get(url.as_str())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::transport(url, e))?;
        let body = resp.bytes().map_err(|e| ScrapeError::transport(url, e))?;
        Ok(body.to_vec())
    }
}

impl Fetch for CachedClient {
    fn get_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let path = self.entry_path(url);
        if let Ok(body) = fs::read(&path) {
            debug!(%url, "cache hit");
            return Ok(body);
        }

        let body = self.download(url)?;
        debug!(%url, bytes = body.len(), "fetched");

        // A cache write failure never fails the request.
        if let Err(e) = self.store(&path, &body) {
            warn!(%url, error = %e, "could not cache response");
        }
        Ok(body)
    }
}
