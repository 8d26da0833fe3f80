//! Upload gating: media-type allow-set and size cap.
//!
//! Validation looks only at the file's *declared* content type and byte
//! size — never at the filename or the payload. A text file renamed to
//! `image.png` still reports `text/plain` and is rejected.

/// Media types the dropzone accepts.
pub const ACCEPTED_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Maximum accepted upload size: 10 MiB, boundary inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Why an upload was rejected.
///
/// The `Display` strings are the exact user-visible messages shown
/// inline under the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// Declared media type is outside the allow-set.
    #[error("Only JPG, PNG, WEBP, or GIF images are allowed.")]
    UnsupportedType,

    /// Byte size exceeds [`MAX_UPLOAD_BYTES`].
    #[error("File size must be under 10MB.")]
    OversizedFile,
}

/// Validate a candidate upload by declared content type and byte size.
///
/// Checks run in order and short-circuit: type first, then size. A file
/// of exactly [`MAX_UPLOAD_BYTES`] passes; one byte more fails.
///
/// # Errors
///
/// Returns [`UploadError::UnsupportedType`] or
/// [`UploadError::OversizedFile`] for the first failing check.
pub fn validate_upload(content_type: &str, size: u64) -> Result<(), UploadError> {
    if !ACCEPTED_MIME_TYPES.contains(&content_type) {
        return Err(UploadError::UnsupportedType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::OversizedFile);
    }
    Ok(())
}

/// An accepted image, held in memory for the session.
///
/// Created only after [`validate_upload`] passes. Never serialized or
/// persisted; replaced wholesale if a new file were ever chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Wrap an accepted file's metadata and payload.
    #[must_use]
    pub const fn new(name: String, content_type: String, bytes: Vec<u8>) -> Self {
        Self {
            name,
            content_type,
            bytes,
        }
    }

    /// Original filename, as reported by the picker or drop.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type (e.g. `image/png`).
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw file payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_allowed_type() {
        for &mime in ACCEPTED_MIME_TYPES {
            assert_eq!(
                validate_upload(mime, 1024),
                Ok(()),
                "{mime} should be accepted"
            );
        }
    }

    #[test]
    fn rejects_types_outside_the_allow_set() {
        for mime in ["text/plain", "image/svg+xml", "application/pdf", ""] {
            assert_eq!(validate_upload(mime, 1024), Err(UploadError::UnsupportedType));
        }
    }

    #[test]
    fn filename_is_never_consulted() {
        // A text file named "image.png" still declares text/plain.
        assert_eq!(
            validate_upload("text/plain", 512),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn size_boundary_is_exclusive() {
        assert_eq!(validate_upload("image/png", MAX_UPLOAD_BYTES), Ok(()));
        assert_eq!(
            validate_upload("image/png", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::OversizedFile)
        );
    }

    #[test]
    fn typical_sizes() {
        // 2 MB PNG accepted, 12 MB JPEG rejected.
        assert_eq!(validate_upload("image/png", 2 * 1024 * 1024), Ok(()));
        assert_eq!(
            validate_upload("image/jpeg", 12 * 1024 * 1024),
            Err(UploadError::OversizedFile)
        );
    }

    #[test]
    fn type_check_runs_before_size_check() {
        // Both checks fail; the type error wins.
        assert_eq!(
            validate_upload("text/plain", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn error_messages_are_the_user_visible_strings() {
        assert_eq!(
            UploadError::UnsupportedType.to_string(),
            "Only JPG, PNG, WEBP, or GIF images are allowed."
        );
        assert_eq!(
            UploadError::OversizedFile.to_string(),
            "File size must be under 10MB."
        );
    }

    #[test]
    fn selected_file_reports_its_size() {
        let file = SelectedFile::new(
            "photo.png".into(),
            "image/png".into(),
            vec![0u8; 2048],
        );
        assert_eq!(file.size(), 2048);
        assert_eq!(file.name(), "photo.png");
        assert_eq!(file.content_type(), "image/png");
    }
}
