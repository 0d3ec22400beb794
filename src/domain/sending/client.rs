//! Domains sub-client — listing (cached), auto-selection, existence check.

use serde_json::Value;

use crate::cache::CacheKey;
use crate::client::MailgunClient;
use crate::domain::sending::wire::DomainsResponse;
use crate::domain::sending::{select_domain, Domain};
use crate::error::MailgunError;
use crate::http::client::DOMAINS_PATH;

/// Sub-client for sending-domain lookups.
pub struct Domains<'a> {
    pub(crate) client: &'a MailgunClient,
}

impl<'a> Domains<'a> {
    /// Raw `GET domains` response.
    ///
    /// With `use_cache`, an identical earlier call is answered from the cache
    /// without touching the network. Every successful fetch is stored.
    pub async fn list(&self, use_cache: bool) -> Result<Value, MailgunError> {
        let key = CacheKey::get(DOMAINS_PATH);
        if use_cache {
            if let Some(hit) = self.client.cache.get(&key).await {
                tracing::debug!(key = %key, "Cache hit");
                return Ok(hit);
            }
        }

        let resp = self.client.http.get_domains().await?;
        self.client.cache.put(key, resp.clone()).await;
        Ok(resp)
    }

    /// Typed domain records, in provider order.
    pub async fn all(&self, use_cache: bool) -> Result<Vec<Domain>, MailgunError> {
        let raw = self.list(use_cache).await?;
        let parsed: DomainsResponse = serde_json::from_value(raw)?;
        Ok(parsed.into())
    }

    /// Names of every domain on the account.
    pub async fn names(&self, use_cache: bool) -> Result<Vec<String>, MailgunError> {
        Ok(self
            .all(use_cache)
            .await?
            .into_iter()
            .map(|d| d.name)
            .collect())
    }

    /// The domain auto-selection would pick for this account (cached lookup).
    pub async fn guess(&self, sandbox_preferred: bool) -> Result<Option<String>, MailgunError> {
        let domains = self.all(true).await?;
        match select_domain(&domains, sandbox_preferred) {
            Some(domain) => {
                tracing::debug!(
                    domain = %domain.name,
                    kind = domain.kind.as_str(),
                    sandbox_preferred,
                    "Auto-selected sending domain"
                );
                Ok(Some(domain.name.clone()))
            }
            None => {
                tracing::warn!(
                    count = domains.len(),
                    "No custom or sandbox domain available for auto-selection"
                );
                Ok(None)
            }
        }
    }

    /// Fail with [`MailgunError::Domain`] unless `name` is on the account.
    pub async fn check(&self, name: &str) -> Result<(), MailgunError> {
        self.ensure(Some(name)).await
    }

    pub(crate) async fn ensure(&self, name: Option<&str>) -> Result<(), MailgunError> {
        let available = self.names(true).await?;
        match name {
            Some(n) if available.iter().any(|d| d == n) => Ok(()),
            _ => Err(MailgunError::Domain {
                domain: name.map(str::to_string),
                available,
            }),
        }
    }

    pub async fn clear_cache(&self) {
        self.client.cache.clear().await;
    }
}
