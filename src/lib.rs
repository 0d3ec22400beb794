//! # Mailgun SDK
//!
//! A small async Rust client for the Mailgun HTTP API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Errors, endpoint constants, domain records, outbound messages
//! 2. **HTTP API** — `MailgunHttp`, one method per endpoint, no caching
//! 3. **High-Level Client** — `MailgunClient` with domain resolution, validation,
//!    cached domain listing and sub-client accessors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mailgun_sdk::prelude::*;
//!
//! // Picks the first custom domain on the account and checks it exists.
//! let client = MailgunClient::new("key-xxxx", None, false).await?;
//!
//! let message = Message::new("me@example.com", "you@example.com", "Hello", "Hi there")
//!     .html("<p>Hi there</p>")
//!     .attachment("report.pdf");
//!
//! let ack = client.send_mail(&message).await?;
//! println!("queued: {}", ack["id"]);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): sending domains and messages.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Response cache for idempotent lookups.
#[cfg(feature = "http")]
pub mod cache;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `MailgunClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::message::Message;
    pub use crate::domain::sending::{select_domain, Domain, DomainType};

    // Errors
    pub use crate::error::{HttpError, MailgunError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, EU_API_URL};

    // Cache
    #[cfg(feature = "http")]
    pub use crate::cache::{CacheKey, ResponseCache};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{DomainsClient, MailgunClient, MailgunClientBuilder, MessagesClient};
}
