//! Outbound messages — payload model, form fields, attachments.

#[cfg(feature = "http")]
pub mod client;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Form field name shared by every attached file.
pub const ATTACHMENT_FIELD: &str = "attachment";

// ─── Message ─────────────────────────────────────────────────────────────────

/// An email to submit through `POST {domain}/messages`.
///
/// `to`, `cc` and `bcc` hold one or more addresses; each address becomes its
/// own form field. Empty optional values are left out of the payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub attachments: Vec<PathBuf>,
}

impl Message {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Add another recipient.
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.push(address.into());
        self
    }

    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Attach a single file.
    pub fn attachment(mut self, path: impl AsRef<Path>) -> Self {
        self.attachments.push(path.as_ref().to_path_buf());
        self
    }

    /// Attach every file in `paths`, in order.
    pub fn attachments<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.attachments
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Text fields of the multipart form, in submission order.
    ///
    /// `from`, `to`, `subject` and `text` are always present. `html`, `cc` and
    /// `bcc` only appear when non-empty.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("from", self.from.clone())];
        fields.extend(self.to.iter().map(|addr| ("to", addr.clone())));
        fields.push(("subject", self.subject.clone()));
        fields.push(("text", self.text.clone()));

        if let Some(html) = self.html.as_ref().filter(|h| !h.is_empty()) {
            fields.push(("html", html.clone()));
        }
        fields.extend(
            self.cc
                .iter()
                .filter(|addr| !addr.is_empty())
                .map(|addr| ("cc", addr.clone())),
        );
        fields.extend(
            self.bcc
                .iter()
                .filter(|addr| !addr.is_empty())
                .map(|addr| ("bcc", addr.clone())),
        );
        fields
    }
}

// ─── Attachment ──────────────────────────────────────────────────────────────

/// An attachment opened for streaming into a multipart part.
///
/// The contents are never buffered whole: the open handle is handed to the
/// request body and read in chunks while the form is written. Dropping the
/// attachment (sent or not) closes the file.
#[cfg(feature = "http")]
#[derive(Debug)]
pub struct Attachment {
    pub file_name: String,
    pub file: tokio::fs::File,
    /// Size at open time, used as the part's content length.
    pub len: u64,
}

#[cfg(feature = "http")]
impl Attachment {
    /// Open `path`. Missing files, unreadable files and anything that is not
    /// a regular file fail here, before a request is built.
    pub async fn open(path: &Path) -> Result<Self, crate::error::MailgunError> {
        let attachment_err = |source| crate::error::MailgunError::Attachment {
            path: path.to_path_buf(),
            source,
        };

        let file = tokio::fs::File::open(path).await.map_err(attachment_err)?;
        let metadata = file.metadata().await.map_err(attachment_err)?;
        if !metadata.is_file() {
            return Err(attachment_err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        Ok(Self {
            file_name: file_name_of(path),
            file,
            len: metadata.len(),
        })
    }
}

#[cfg_attr(not(feature = "http"), allow(dead_code))]
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(ATTACHMENT_FIELD)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[(&'static str, String)]) -> Vec<&'static str> {
        fields.iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn test_required_fields_only() {
        let message = Message::new("me@a.com", "you@b.com", "Hi", "Body");
        let fields = message.form_fields();
        assert_eq!(names(&fields), vec!["from", "to", "subject", "text"]);
        assert_eq!(fields[0].1, "me@a.com");
        assert_eq!(fields[3].1, "Body");
    }

    #[test]
    fn test_optional_fields_included_verbatim() {
        let message = Message::new("me@a.com", "you@b.com", "Hi", "Body")
            .html("<p>Body</p>")
            .cc("cc@b.com")
            .bcc("bcc@b.com");
        let fields = message.form_fields();
        assert_eq!(
            names(&fields),
            vec!["from", "to", "subject", "text", "html", "cc", "bcc"]
        );
        assert!(fields.contains(&("html", "<p>Body</p>".to_string())));
        assert!(fields.contains(&("cc", "cc@b.com".to_string())));
        assert!(fields.contains(&("bcc", "bcc@b.com".to_string())));
    }

    #[test]
    fn test_empty_optionals_omitted() {
        let message = Message::new("me@a.com", "you@b.com", "Hi", "Body")
            .html("")
            .cc("")
            .bcc("");
        assert_eq!(
            names(&message.form_fields()),
            vec!["from", "to", "subject", "text"]
        );
    }

    #[test]
    fn test_multiple_recipients_repeat_field() {
        let message = Message::new("me@a.com", "one@b.com", "Hi", "Body")
            .to("two@b.com")
            .cc("c1@b.com")
            .cc("c2@b.com");
        let fields = message.form_fields();
        let to: Vec<_> = fields.iter().filter(|(n, _)| *n == "to").collect();
        let cc: Vec<_> = fields.iter().filter(|(n, _)| *n == "cc").collect();
        assert_eq!(to.len(), 2);
        assert_eq!(cc.len(), 2);
    }

    #[test]
    fn test_attachment_builders() {
        let message = Message::new("me@a.com", "you@b.com", "Hi", "Body")
            .attachment("one.txt")
            .attachments(["two.txt", "three.txt"]);
        assert_eq!(
            message.attachments,
            vec![
                PathBuf::from("one.txt"),
                PathBuf::from("two.txt"),
                PathBuf::from("three.txt")
            ]
        );
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(file_name_of(Path::new("/tmp/report.pdf")), "report.pdf");
        assert_eq!(file_name_of(Path::new("/")), ATTACHMENT_FIELD);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_open_missing_attachment() {
        let err = Attachment::open(Path::new("/definitely/not/here.txt"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::MailgunError::Attachment { .. }
        ));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_open_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = Attachment::open(dir.path()).await.unwrap_err();
        match err {
            crate::error::MailgunError::Attachment { path, source } => {
                assert_eq!(path, dir.path());
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput);
            }
            other => panic!("expected Attachment error, got {:?}", other),
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_open_records_length_without_reading() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("report.csv");
        std::fs::write(&p, "a,b\n1,2\n").unwrap();

        let attachment = Attachment::open(&p).await.unwrap();
        assert_eq!(attachment.file_name, "report.csv");
        assert_eq!(attachment.len, 8);
    }
}
