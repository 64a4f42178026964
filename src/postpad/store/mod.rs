//! # Storage Layer
//!
//! Posts live under a single key of a key-value store, as one JSON array.
//!
//! ## Two Layers
//!
//! 1. [`StorageBackend`]: the raw port. Reads and writes strings under string
//!    keys and knows nothing about posts.
//! 2. [`PostStore`]: the persistence adapter. Encodes/decodes the whole
//!    collection and owns the failure policy.
//!
//! ## Failure Policy
//!
//! - **Decode failure** (missing key, unreadable value, not JSON, not an array
//!   of posts): treated as "no data". `load_posts` never fails.
//! - **Write failure** (backend rejects the write): logged, not propagated.
//!   Whatever the caller already showed stays on screen; the durable state is
//!   the previous value until the next successful write.
//!
//! There are no partial updates: every mutation rewrites the whole array.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key in a data dir.
//! - [`mem_backend::MemBackend`]: in-memory, for tests.

use crate::error::Result;
use crate::model::Post;
use tracing::{debug, warn};

pub mod fs_backend;
pub mod mem_backend;

pub const DEFAULT_STORAGE_KEY: &str = "posts";

/// Storage keys are non-empty and limited to `[A-Za-z0-9_-]`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Abstract interface for raw key-value storage.
pub trait StorageBackend {
    /// Read the value stored under `key`. `Ok(None)` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`. Must be a single, all-or-nothing write.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Persistence adapter for the post collection.
pub struct PostStore<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> PostStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads the full collection in storage (insertion) order.
    pub fn load_posts(&self) -> Vec<Post> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                debug!(key = %self.key, error = %e, "could not read posts, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Post>>(&raw) {
            Ok(posts) => {
                debug!(key = %self.key, count = posts.len(), "loaded posts");
                posts
            }
            Err(e) => {
                debug!(key = %self.key, error = %e, "stored posts did not decode, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrites the stored collection. Failures are logged and swallowed.
    pub fn save_posts(&self, posts: &[Post]) {
        if let Err(e) = self.try_save_posts(posts) {
            warn!(key = %self.key, error = %e, "failed to save posts; changes are not persisted");
        }
    }

    fn try_save_posts(&self, posts: &[Post]) -> Result<()> {
        let encoded = serde_json::to_string(posts)?;
        self.backend.write(&self.key, &encoded)?;
        debug!(key = %self.key, count = posts.len(), "saved posts");
        Ok(())
    }
}
