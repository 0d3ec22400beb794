//! Wire types for the domain listing (REST).

use serde::{Deserialize, Serialize};

/// Raw domain record as returned by `GET domains`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainResponse {
    pub name: String,
    /// `null` or absent on some records; those are never auto-selected.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub domain_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spam_action: Option<String>,
    #[serde(default)]
    pub wildcard: bool,
}

/// Raw `GET domains` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainsResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<DomainResponse>,
}
