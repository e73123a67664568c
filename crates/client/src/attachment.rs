//! Receipt attachment selected for upload.

/// Upload size hint shown to users (5 MB). The backend enforces its own
/// limit; this is advisory only.
pub const UPLOAD_SIZE_HINT_BYTES: usize = 5 * 1024 * 1024;

/// File extensions the upload hint advertises.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "pdf"];

/// An in-memory receipt file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Whether the file matches the advertised size/type hint.
    ///
    /// Purely informational: a submission proceeds regardless, and the
    /// backend remains the authority on what it accepts.
    pub fn within_upload_hint(&self) -> bool {
        if self.data.len() > UPLOAD_SIZE_HINT_BYTES {
            return false;
        }
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase());
        match extension {
            Some(ext) => SUPPORTED_EXTENSIONS.contains(&ext.as_str()),
            None => false,
        }
    }
}
