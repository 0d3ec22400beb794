//! Network URL constants for the Mailgun SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.mailgun.net/v2";

/// EU region REST API base URL.
pub const EU_API_URL: &str = "https://api.eu.mailgun.net/v2";

/// Username paired with the API key for HTTP Basic auth.
pub const API_USER: &str = "api";
