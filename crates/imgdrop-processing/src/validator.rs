//! Attachment intake checks.
//!
//! Both checks run before any image bytes are looked at.

use imgdrop_core::constants::ALLOWED_EXTENSIONS;
use imgdrop_core::{IngestError, IngestResult};

use crate::multipart::AttachmentPart;

/// An attachment whose file name passed the extension check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedAttachment {
    /// Lower-cased file name with any directory components removed
    pub filename: String,
    /// Lower-cased extension, one of `ALLOWED_EXTENSIONS`
    pub extension: String,
}

/// Pick the attachment to process. Only the first part is used; the rest are ignored.
pub fn select_first_part(parts: Vec<AttachmentPart>) -> IngestResult<AttachmentPart> {
    let total = parts.len();
    let first = parts.into_iter().next().ok_or(IngestError::NoFileSelected)?;

    if total > 1 {
        tracing::debug!(
            ignored_parts = total - 1,
            filename = %first.filename,
            "Multiple attachments received, processing only the first"
        );
    }

    Ok(first)
}

/// Validate an attachment's file name.
///
/// The name is lower-cased before the extension is taken from the text after the last
/// `.`. A name without any `.` is treated as its own extension, which is never allowed.
pub fn validate_attachment(filename: &str) -> IngestResult<ValidatedAttachment> {
    let lowered = filename.to_lowercase();
    let filename = lowered
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string();

    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_string();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(IngestError::UnsupportedImageType(extension));
    }

    Ok(ValidatedAttachment {
        filename,
        extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn part(filename: &str) -> AttachmentPart {
        AttachmentPart {
            filename: filename.to_string(),
            data: Bytes::from_static(b"data"),
        }
    }

    #[test]
    fn test_no_parts_is_no_file_selected() {
        assert_eq!(select_first_part(Vec::new()), Err(IngestError::NoFileSelected));
    }

    #[test]
    fn test_first_part_wins() {
        let first = select_first_part(vec![part("a.jpg"), part("b.gif")]).unwrap();
        assert_eq!(first.filename, "a.jpg");
    }

    #[test]
    fn test_allowed_extensions() {
        for name in ["cat.jpg", "cat.jpeg", "cat.png"] {
            let validated = validate_attachment(name).unwrap();
            assert_eq!(validated.filename, name);
        }
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let validated = validate_attachment("Holiday.JPEG").unwrap();
        assert_eq!(validated.filename, "holiday.jpeg");
        assert_eq!(validated.extension, "jpeg");
    }

    #[test]
    fn test_gif_is_unsupported() {
        assert_eq!(
            validate_attachment("anim.gif"),
            Err(IngestError::UnsupportedImageType("gif".to_string()))
        );
    }

    #[test]
    fn test_unsupported_extension_reported_lower_cased() {
        assert_eq!(
            validate_attachment("SCAN.TIFF"),
            Err(IngestError::UnsupportedImageType("tiff".to_string()))
        );
    }

    #[test]
    fn test_name_without_dot_is_its_own_extension() {
        assert_eq!(
            validate_attachment("README"),
            Err(IngestError::UnsupportedImageType("readme".to_string()))
        );
        assert_eq!(
            validate_attachment(""),
            Err(IngestError::UnsupportedImageType(String::new()))
        );
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert!(validate_attachment("photo.png.exe").is_err());
        assert!(validate_attachment("photo.exe.png").is_ok());
    }

    #[test]
    fn test_directory_components_are_dropped() {
        let validated = validate_attachment("../../etc/Evil.PNG").unwrap();
        assert_eq!(validated.filename, "evil.png");

        let validated = validate_attachment("C:\\Users\\me\\cat.jpg").unwrap();
        assert_eq!(validated.filename, "cat.jpg");
    }
}
