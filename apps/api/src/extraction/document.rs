//! File-to-text conversion for uploaded resumes (PDF and DOCX).

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Determined from the file extension alone, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

/// Extracts plain text from an uploaded resume.
///
/// The extension is checked before the bytes are looked at. When the format
/// parser fails the raw bytes are decoded as UTF-8, dropping anything that
/// does not decode.
pub fn read_document(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let kind = DocumentKind::from_file_name(file_name).ok_or_else(|| {
        AppError::Validation("Only PDF and DOCX files are supported".to_string())
    })?;

    let parsed = match kind {
        DocumentKind::Pdf => pdf_text(bytes),
        DocumentKind::Docx => docx_text(bytes),
    };

    let text = match parsed {
        Ok(text) => text,
        Err(reason) => {
            warn!("Failed to parse {file_name} as {kind:?} ({reason}); decoding raw bytes");
            decode_lossy(bytes)
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from file".to_string(),
        ));
    }

    debug!("Extracted {} chars from {file_name}", text.len());
    Ok(text)
}

fn pdf_text(bytes: &[u8]) -> Result<String, String> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("PDF parser panicked".to_string()),
    }
}

fn docx_text(bytes: &[u8]) -> Result<String, String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| e.to_string())?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            for paragraph_child in &p.children {
                if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_is_rejected_before_extraction() {
        let err = read_document("resume.txt", b"John Doe\nPython").unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("PDF and DOCX")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert_eq!(DocumentKind::from_file_name("CV.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_file_name("cv.Docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_file_name("cv.doc"), None);
        assert_eq!(DocumentKind::from_file_name("pdf"), None);
    }

    #[test]
    fn test_unparseable_pdf_falls_back_to_raw_text() {
        let text = read_document("resume.pdf", b"  John Doe\njohn@example.com  ").unwrap();
        assert_eq!(text, "John Doe\njohn@example.com");
    }

    #[test]
    fn test_unparseable_docx_falls_back_to_raw_text() {
        let text = read_document("resume.docx", b"Jane Smith, Rust").unwrap();
        assert_eq!(text, "Jane Smith, Rust");
    }

    #[test]
    fn test_undecodable_bytes_are_dropped() {
        assert_eq!(decode_lossy(b"Py\xffthon"), "Python");
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let err = read_document("resume.pdf", b"   \n  ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
