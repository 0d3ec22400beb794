//! Unified SDK error types.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level SDK error.
///
/// Every failure surfaced by the client is one of these kinds. Callers are
/// expected to match on the variant and decide their own policy (re-prompt
/// for an API key, pick another domain, ...).
#[derive(Error, Debug)]
pub enum MailgunError {
    /// The provider rejected the API key (HTTP 401).
    #[error("Invalid credentials")]
    Credentials,

    /// The requested or auto-selected domain is not registered on the account.
    #[error(
        "Invalid domain {}. Available domains: {}",
        .domain.as_deref().unwrap_or("<none>"),
        .available.join(", ")
    )]
    Domain {
        domain: Option<String>,
        available: Vec<String>,
    },

    /// Any other provider or transport failure.
    #[error("HTTP error: {0}")]
    Http(HttpError),

    /// An attachment could not be opened from disk.
    #[error("Attachment error ({}): {source}", .path.display())]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A provider response did not have the expected shape.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MailgunError {
    /// HTTP status code associated with this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Credentials => Some(401),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_credentials(&self) -> bool {
        matches!(self, Self::Credentials)
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

impl From<HttpError> for MailgunError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Unauthorized => Self::Credentials,
            other => Self::Http(other),
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            #[cfg(feature = "http")]
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_credentials() {
        let err: MailgunError = HttpError::Unauthorized.into();
        assert!(err.is_credentials());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_status_error_keeps_status() {
        let err: MailgunError = HttpError::Status {
            status: 500,
            body: "boom".to_string(),
        }
        .into();
        assert!(matches!(err, MailgunError::Http(HttpError::Status { status: 500, .. })));
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP error: Unexpected status 500: boom");
    }

    #[test]
    fn test_domain_error_lists_available() {
        let err = MailgunError::Domain {
            domain: Some("nope.com".to_string()),
            available: vec!["a.com".to_string(), "b.mailgun.org".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid domain nope.com. Available domains: a.com, b.mailgun.org"
        );
        assert!(err.is_domain());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_unresolved_domain_error() {
        let err = MailgunError::Domain {
            domain: None,
            available: vec![],
        };
        assert_eq!(err.to_string(), "Invalid domain <none>. Available domains: ");
    }
}
