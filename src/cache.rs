//! In-memory cache for idempotent API responses.
//!
//! Entries never expire: the cache lives as long as the client that owns it
//! and only grows. Only read-only lookups (the domain listing) are keyed into
//! it; the message sub-client has no handle on it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_lock::RwLock;
use serde_json::Value;

/// Composite cache key: method, path, form data and attached files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub method: String,
    pub path: String,
    pub data: Vec<(String, String)>,
    pub files: Vec<String>,
}

impl CacheKey {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        data: Vec<(String, String)>,
        files: Vec<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            data,
            files,
        }
    }

    /// Key for a bodiless GET.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path, Vec::new(), Vec::new())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {:?};{:?}",
            self.method, self.path, self.data, self.files
        )
    }
}

/// Shared, task-safe response cache. Clones share the same entries.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<CacheKey, Value>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<Value> {
        self.entries.read().await.get(key).cloned()
    }

    /// Store a response, replacing any previous one under the same key.
    pub async fn put(&self, key: CacheKey, value: Value) {
        self.entries.write().await.insert(key, value);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
