//! Sending domains — records, type classification, auto-selection.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, FixedOffset};

// ─── DomainType ──────────────────────────────────────────────────────────────

/// Domain classification reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainType {
    /// A domain the account owner registered and verified.
    Custom,
    /// The provider-issued `sandbox*.mailgun.org` domain.
    Sandbox,
    /// Anything else, including a missing type; never picked by auto-selection.
    Unknown,
}

impl DomainType {
    pub fn as_str(&self) -> &str {
        match self {
            DomainType::Custom => "custom",
            DomainType::Sandbox => "sandbox",
            DomainType::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "custom" => DomainType::Custom,
            "sandbox" => DomainType::Sandbox,
            _ => DomainType::Unknown,
        }
    }
}

// ─── Domain ──────────────────────────────────────────────────────────────────

/// A sending domain registered on the account.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub name: String,
    pub kind: DomainType,
    pub state: Option<String>,
    /// RFC 2822 timestamp, kept verbatim.
    pub created_at: Option<String>,
    pub smtp_login: Option<String>,
    pub spam_action: Option<String>,
    pub wildcard: bool,
}

impl Domain {
    pub fn new(name: impl Into<String>, kind: DomainType) -> Self {
        Self {
            name: name.into(),
            kind,
            state: None,
            created_at: None,
            smtp_login: None,
            spam_action: None,
            wildcard: false,
        }
    }

    pub fn is_sandbox(&self) -> bool {
        self.kind == DomainType::Sandbox
    }

    /// Parsed `created_at`, if present and well-formed.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc2822(s).ok())
    }
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Pick the sending domain to use when none was given explicitly.
///
/// Unless `sandbox_preferred` is set, the first `custom` domain wins. Failing
/// that, the first `sandbox` domain. Provider order is preserved; `None` when
/// the account has neither.
pub fn select_domain(domains: &[Domain], sandbox_preferred: bool) -> Option<&Domain> {
    if !sandbox_preferred {
        if let Some(custom) = domains.iter().find(|d| d.kind == DomainType::Custom) {
            return Some(custom);
        }
    }
    domains.iter().find(|d| d.kind == DomainType::Sandbox)
}
