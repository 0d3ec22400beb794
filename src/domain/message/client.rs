//! Messages sub-client — sending (never cached).

use serde_json::Value;

use crate::domain::message::{Attachment, Message};
use crate::error::MailgunError;
use crate::http::MailgunHttp;

/// Sub-client for message submission.
///
/// Holds only the HTTP layer and the resolved domain: no response cache is
/// reachable from here, so every send is a real request.
pub struct Messages<'a> {
    pub(crate) http: &'a MailgunHttp,
    pub(crate) domain: &'a str,
}

impl<'a> Messages<'a> {
    /// Submit `message` and return the provider's raw acknowledgment.
    ///
    /// Every attachment is opened before the request is built, so a missing
    /// or unreadable file fails the call without contacting the API. Contents
    /// are streamed while the request body is written.
    pub async fn send(&self, message: &Message) -> Result<Value, MailgunError> {
        let mut attachments = Vec::with_capacity(message.attachments.len());
        for path in &message.attachments {
            attachments.push(Attachment::open(path).await?);
        }

        tracing::debug!(
            domain = %self.domain,
            recipients = message.to.len(),
            attachments = attachments.len(),
            "Sending message"
        );

        let resp = self
            .http
            .send_message(self.domain, message.form_fields(), attachments)
            .await?;

        if let Some(id) = resp.get("id").and_then(Value::as_str) {
            tracing::debug!(id, "Message accepted");
        }
        Ok(resp)
    }

    pub fn domain(&self) -> &str {
        self.domain
    }
}
