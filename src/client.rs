//! High-level client — `MailgunClient` with nested sub-client accessors.
//!
//! Each domain slice has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared response cache, domain
//! resolution at construction, and the flat convenience methods.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use crate::cache::ResponseCache;
use crate::domain::message::client::Messages;
use crate::domain::message::Message;
use crate::domain::sending::client::Domains;
use crate::domain::sending::Domain;
use crate::error::MailgunError;
use crate::http::MailgunHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::message::client::Messages as MessagesClient;
pub use crate::domain::sending::client::Domains as DomainsClient;

/// The primary entry point for the Mailgun SDK.
///
/// Constructed through [`MailgunClient::new`] or [`MailgunClient::builder`];
/// construction resolves and validates the sending domain against the
/// account, so a built client always has a domain the provider knows about.
pub struct MailgunClient {
    pub(crate) http: MailgunHttp,
    /// Resolved sending domain.
    pub(crate) domain: String,
    pub(crate) sandbox_preferred: bool,
    /// Responses of idempotent lookups, keyed by request.
    pub(crate) cache: ResponseCache,
}

impl MailgunClient {
    /// Build a client, auto-selecting the domain when `domain` is `None`.
    pub async fn new(
        api_key: &str,
        domain: Option<&str>,
        sandbox_preferred: bool,
    ) -> Result<Self, MailgunError> {
        let mut builder = Self::builder(api_key).sandbox(sandbox_preferred);
        if let Some(d) = domain {
            builder = builder.domain(d);
        }
        builder.build().await
    }

    pub fn builder(api_key: &str) -> MailgunClientBuilder {
        MailgunClientBuilder::new(api_key)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn domains(&self) -> Domains<'_> {
        Domains { client: self }
    }

    pub fn messages(&self) -> Messages<'_> {
        Messages {
            http: &self.http,
            domain: &self.domain,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The sending domain used for messages.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn sandbox_preferred(&self) -> bool {
        self.sandbox_preferred
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Convenience ──────────────────────────────────────────────────────

    /// Raw `GET domains` response, optionally served from the cache.
    pub async fn list_domains(&self, use_cache: bool) -> Result<Value, MailgunError> {
        self.domains().list(use_cache).await
    }

    /// Typed domain records, optionally served from the cache.
    pub async fn all_domains(&self, use_cache: bool) -> Result<Vec<Domain>, MailgunError> {
        self.domains().all(use_cache).await
    }

    pub async fn guess_domain(&self, sandbox_preferred: bool) -> Result<Option<String>, MailgunError> {
        self.domains().guess(sandbox_preferred).await
    }

    pub async fn check_domain(&self, domain: &str) -> Result<(), MailgunError> {
        self.domains().check(domain).await
    }

    /// Send a message from the resolved domain. Never cached.
    pub async fn send_mail(&self, message: &Message) -> Result<Value, MailgunError> {
        self.messages().send(message).await
    }

    /// Drop every cached response.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }
}

impl Clone for MailgunClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            domain: self.domain.clone(),
            sandbox_preferred: self.sandbox_preferred,
            cache: self.cache.clone(),
        }
    }
}

impl fmt::Debug for MailgunClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailgunClient")
            .field("http", &self.http)
            .field("domain", &self.domain)
            .field("sandbox_preferred", &self.sandbox_preferred)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MailgunClientBuilder {
    api_key: String,
    domain: Option<String>,
    sandbox_preferred: bool,
    base_url: String,
    timeout: Option<Duration>,
}

impl MailgunClientBuilder {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            domain: None,
            sandbox_preferred: false,
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }

    /// Builder seeded from the environment.
    ///
    /// Expects:
    /// - `MAILGUN_API_KEY`
    /// - `MAILGUN_DOMAIN` (optional, auto-selected when unset)
    /// - `MAILGUN_SANDBOX` (optional, `1`/`true`/`yes`)
    /// - `MAILGUN_API_URL` (optional)
    pub fn from_env() -> Result<Self, MailgunError> {
        let api_key = std::env::var("MAILGUN_API_KEY")
            .map_err(|_| MailgunError::Config("MAILGUN_API_KEY not set".to_string()))?;

        let mut builder = Self::new(&api_key);
        if let Ok(domain) = std::env::var("MAILGUN_DOMAIN") {
            builder = builder.domain(&domain);
        }
        if let Ok(flag) = std::env::var("MAILGUN_SANDBOX") {
            builder = builder.sandbox(parse_flag(&flag)?);
        }
        if let Ok(url) = std::env::var("MAILGUN_API_URL") {
            builder = builder.base_url(&url);
        }
        Ok(builder)
    }

    /// Sending domain to use. Empty means auto-select.
    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string()).filter(|d| !d.is_empty());
        self
    }

    /// Prefer the sandbox domain when auto-selecting.
    pub fn sandbox(mut self, sandbox_preferred: bool) -> Self {
        self.sandbox_preferred = sandbox_preferred;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Unset by default: requests wait as long as the
    /// transport allows.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve and validate the sending domain, then return the client.
    ///
    /// Both steps share one cached `GET domains`, so a successful build costs
    /// a single request.
    pub async fn build(self) -> Result<MailgunClient, MailgunError> {
        if self.api_key.is_empty() {
            return Err(MailgunError::Config("API key is empty".to_string()));
        }

        let mut client = MailgunClient {
            http: MailgunHttp::new(&self.base_url, &self.api_key, self.timeout)?,
            domain: String::new(),
            sandbox_preferred: self.sandbox_preferred,
            cache: ResponseCache::new(),
        };

        let domain = match self.domain {
            Some(d) => Some(d),
            None => client.domains().guess(self.sandbox_preferred).await?,
        };
        client.domains().ensure(domain.as_deref()).await?;

        if let Some(d) = domain {
            client.domain = d;
        }
        tracing::debug!(domain = %client.domain, "Mailgun client ready");
        Ok(client)
    }
}

impl fmt::Debug for MailgunClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailgunClientBuilder")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("sandbox_preferred", &self.sandbox_preferred)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_flag(value: &str) -> Result<bool, MailgunError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(MailgunError::Config(format!(
            "MAILGUN_SANDBOX must be a boolean, got '{}'",
            other
        ))),
    }
}
