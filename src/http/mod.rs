//! HTTP client layer — `MailgunHttp`, one method per endpoint.

pub mod client;

pub use client::MailgunHttp;
