//! Conversion: DomainResponse → Domain.

use super::wire;
use super::{Domain, DomainType};

impl From<wire::DomainResponse> for Domain {
    fn from(source: wire::DomainResponse) -> Self {
        Domain {
            kind: source
                .domain_type
                .as_deref()
                .map_or(DomainType::Unknown, DomainType::from_str),
            name: source.name,
            state: source.state,
            created_at: source.created_at,
            smtp_login: source.smtp_login,
            spam_action: source.spam_action,
            wildcard: source.wildcard,
        }
    }
}

impl From<wire::DomainsResponse> for Vec<Domain> {
    fn from(source: wire::DomainsResponse) -> Self {
        source.items.into_iter().map(Domain::from).collect()
    }
}
