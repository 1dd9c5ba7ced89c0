//! Blob wrapping and filename derivation for eml payloads.

/// Media type applied to wrapped eml payloads.
///
/// The reference admin UI has always tagged downloaded eml content as
/// `text/html`; changing it would alter the arguments observed by save
/// implementations, so it is preserved.
pub const EML_MEDIA_TYPE: &str = "text/html";

/// In-memory wrapper pairing raw content with a declared media type.
///
/// This is the unit handed to the save capability. The content is opaque;
/// no structural validation is performed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content: Vec<u8>,
    media_type: String,
}

impl Blob {
    /// Wraps raw content with a media type.
    #[must_use]
    pub fn new(content: impl Into<Vec<u8>>, media_type: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            media_type: media_type.into(),
        }
    }

    /// Returns the raw content.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the declared media type.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

/// Derives the save filename for a mail key: `<mailKey>.eml`.
///
/// Purely a function of the key; no sanitization or validation happens
/// here.
#[must_use]
pub fn eml_filename(mail_key: &str) -> String {
    format!("{mail_key}.eml")
}
