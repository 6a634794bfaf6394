//! Resume file handling for multipart uploads: format detection and text extraction.

use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";
const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported resume file type '{0}'; upload a PDF or plain-text file")]
    UnsupportedType(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Resume file is not valid UTF-8 text")]
    NotUtf8,

    #[error("No text could be extracted from the resume")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

impl ResumeFormat {
    /// Detects the format from the file's leading bytes, then its extension, then the
    /// declared content type.
    pub fn detect(
        file_name: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<Self, UploadError> {
        if bytes.starts_with(PDF_MAGIC) {
            return Ok(ResumeFormat::Pdf);
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => return Ok(ResumeFormat::Pdf),
            Some(ext) if TEXT_EXTENSIONS.contains(&ext) => return Ok(ResumeFormat::PlainText),
            _ => {}
        }

        match content_type {
            Some("application/pdf") => Ok(ResumeFormat::Pdf),
            Some(ct) if ct.starts_with("text/") => Ok(ResumeFormat::PlainText),
            _ => Err(UploadError::UnsupportedType(
                file_name.or(content_type).unwrap_or("unknown").to_string(),
            )),
        }
    }
}

/// Extracts resume text from an uploaded file. PDF parsing is CPU-bound; call this
/// from `spawn_blocking`.
pub fn extract_text(format: ResumeFormat, bytes: &[u8]) -> Result<String, UploadError> {
    let text = match format {
        ResumeFormat::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| UploadError::Pdf(e.to_string()))?
        }
        ResumeFormat::PlainText => {
            let text = std::str::from_utf8(bytes).map_err(|_| UploadError::NotUtf8)?;
            text.strip_prefix('\u{feff}').unwrap_or(text).to_string()
        }
    };

    if text.trim().is_empty() {
        return Err(UploadError::Empty);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_by_magic_bytes() {
        let format = ResumeFormat::detect(Some("resume.bin"), None, b"%PDF-1.7\n...").unwrap();
        assert_eq!(format, ResumeFormat::Pdf);
    }

    #[test]
    fn test_detect_by_extension_case_insensitive() {
        assert_eq!(
            ResumeFormat::detect(Some("Resume.PDF"), None, b"").unwrap(),
            ResumeFormat::Pdf
        );
        assert_eq!(
            ResumeFormat::detect(Some("resume.md"), None, b"# Jane").unwrap(),
            ResumeFormat::PlainText
        );
    }

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            ResumeFormat::detect(None, Some("text/plain; charset=utf-8"), b"Jane").unwrap(),
            ResumeFormat::PlainText
        );
        assert_eq!(
            ResumeFormat::detect(Some("resume"), Some("application/pdf"), b"").unwrap(),
            ResumeFormat::Pdf
        );
    }

    #[test]
    fn test_detect_unsupported() {
        let err = ResumeFormat::detect(Some("resume.docx"), Some("application/msword"), b"PK")
            .unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType(ref name) if name == "resume.docx"));
    }

    #[test]
    fn test_plain_text_extraction_strips_bom() {
        let text = extract_text(ResumeFormat::PlainText, "\u{feff}Built a platform".as_bytes())
            .unwrap();
        assert_eq!(text, "Built a platform");
    }

    #[test]
    fn test_plain_text_invalid_utf8() {
        let err = extract_text(ResumeFormat::PlainText, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, UploadError::NotUtf8));
    }

    #[test]
    fn test_blank_text_is_empty_error() {
        let err = extract_text(ResumeFormat::PlainText, b"  \n\t ").unwrap_err();
        assert!(matches!(err, UploadError::Empty));
    }
}
