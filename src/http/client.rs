//! Low-level HTTP client — `MailgunHttp`.
//!
//! One method per API endpoint. Returns raw JSON; typed conversion happens in
//! the domain sub-clients. Stateless apart from credentials: no caching and no
//! retries happen at this layer.

use std::fmt;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::io::ReaderStream;

use crate::domain::message::{Attachment, ATTACHMENT_FIELD};
use crate::error::HttpError;
use crate::network::API_USER;

/// Path of the domain listing endpoint.
pub(crate) const DOMAINS_PATH: &str = "domains";

/// Low-level HTTP client for the Mailgun REST API.
#[derive(Clone)]
pub struct MailgunHttp {
    base_url: String,
    client: Client,
    /// NEVER logged or exposed publicly.
    api_key: String,
}

impl MailgunHttp {
    /// `timeout` of `None` keeps reqwest's default (no per-request timeout).
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Domains ──────────────────────────────────────────────────────────

    pub async fn get_domains(&self) -> Result<Value, HttpError> {
        self.request(Method::GET, DOMAINS_PATH, None).await
    }

    // ── Messages ─────────────────────────────────────────────────────────

    /// `POST {domain}/messages` as multipart form data.
    ///
    /// Repeated field names (several `to`, several `attachment`) are sent as
    /// separate parts under the same name. Attachment files are streamed from
    /// their open handles with a known length.
    pub async fn send_message(
        &self,
        domain: &str,
        fields: Vec<(&'static str, String)>,
        attachments: Vec<Attachment>,
    ) -> Result<Value, HttpError> {
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }
        for attachment in attachments {
            let body = Body::wrap_stream(ReaderStream::new(attachment.file));
            let part = Part::stream_with_length(body, attachment.len).file_name(attachment.file_name);
            form = form.part(ATTACHMENT_FIELD, part);
        }

        let path = format!("{}/messages", urlencoding::encode(domain));
        self.request(Method::POST, &path, Some(form)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Option<Form>,
    ) -> Result<T, HttpError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(method = %method, path, "Mailgun request");

        let mut req = self
            .client
            .request(method, &url)
            .basic_auth(API_USER, Some(&self.api_key));
        if let Some(f) = form {
            req = req.multipart(f);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            _ => {
                tracing::debug!(status = status_code, body = %body_text, "Mailgun error response");
                Err(HttpError::Status {
                    status: status_code,
                    body: body_text,
                })
            }
        }
    }
}

impl fmt::Debug for MailgunHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailgunHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let http = MailgunHttp::new("https://api.mailgun.net/v2/", "key", None).unwrap();
        assert_eq!(http.base_url(), "https://api.mailgun.net/v2");
    }

    #[test]
    fn test_debug_redacts_key() {
        let http = MailgunHttp::new("https://api.mailgun.net/v2", "key-secret", Some(Duration::from_secs(5))).unwrap();
        let debug = format!("{:?}", http);
        assert!(!debug.contains("key-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
