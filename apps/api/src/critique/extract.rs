//! Text Extractor — turns an uploaded resume into a plain-text transcript.

use std::string::FromUtf8Error;

use bytes::Bytes;
use thiserror::Error;

use crate::errors::AppError;

const PDF_MIME: &str = "application/pdf";
const OCTET_STREAM_MIME: &str = "application/octet-stream";
/// File extensions the upload form accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["pdf", "txt"];
pub const EMPTY_CONTENT_MESSAGE: &str = "File does not have any content...";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("file is not valid UTF-8 text: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("extraction worker failed: {0}")]
    Worker(String),
}

/// A resume file as received from the upload form. Lives for one request.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// How the uploaded bytes are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Pdf,
    Text,
}

impl ResumeKind {
    /// The declared MIME type decides. Only an absent or generic binary type
    /// falls back to the filename extension.
    pub fn detect(content_type: Option<&str>, filename: Option<&str>) -> Self {
        let mime = content_type
            .map(|c| c.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .filter(|c| !c.is_empty());

        match mime.as_deref() {
            Some(PDF_MIME) => ResumeKind::Pdf,
            None | Some(OCTET_STREAM_MIME) if has_extension(filename, "pdf") => ResumeKind::Pdf,
            _ => ResumeKind::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeKind::Pdf => "pdf",
            ResumeKind::Text => "txt",
        }
    }
}

impl UploadedResume {
    pub fn kind(&self) -> ResumeKind {
        ResumeKind::detect(self.content_type.as_deref(), self.filename.as_deref())
    }
}

fn has_extension(filename: Option<&str>, ext: &str) -> bool {
    filename
        .and_then(|f| f.rsplit_once('.'))
        .is_some_and(|(_, e)| e.eq_ignore_ascii_case(ext))
}

/// Rejects filenames whose extension is not `.pdf` or `.txt`.
/// Uploads without a filename are let through.
pub fn check_extension(filename: Option<&str>) -> Result<(), AppError> {
    let Some(name) = filename.filter(|n| !n.is_empty()) else {
        return Ok(());
    };
    if ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| has_extension(Some(name), ext))
    {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Unsupported file '{name}'. Please upload a PDF or TXT file."
        )))
    }
}

/// Extracts the text of an upload. PDF decoding runs on the blocking pool.
pub async fn extract_text(upload: &UploadedResume) -> Result<String, ExtractError> {
    match upload.kind() {
        ResumeKind::Pdf => {
            let data = upload.data.clone();
            tokio::task::spawn_blocking(move || extract_pdf_text(&data))
                .await
                .map_err(|e| ExtractError::Worker(e.to_string()))?
        }
        ResumeKind::Text => decode_text(&upload.data),
    }
}

/// Decodes every page in order; any page failure fails the whole document.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(join_pages(&pages))
}

/// Each page's text followed by a line break, in page order.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}

pub fn decode_text(data: &[u8]) -> Result<String, ExtractError> {
    Ok(String::from_utf8(data.to_vec())?)
}

/// The only content check: whitespace-only text halts the analysis.
pub fn ensure_content(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two US-letter pages, "Page one" and "Page two", set in Helvetica.
    const TWO_PAGE_PDF: &[u8] = b"%PDF-1.4\n\
1 0 obj\n\
<< /Type /Catalog /Pages 2 0 R >>\n\
endobj\n\
2 0 obj\n\
<< /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >>\n\
endobj\n\
3 0 obj\n\
<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 7 0 R >> >> /Contents 5 0 R >>\n\
endobj\n\
4 0 obj\n\
<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 7 0 R >> >> /Contents 6 0 R >>\n\
endobj\n\
5 0 obj\n\
<< /Length 39 >>\n\
stream\n\
BT /F1 24 Tf 72 700 Td (Page one) Tj ET\n\
endstream\n\
endobj\n\
6 0 obj\n\
<< /Length 39 >>\n\
stream\n\
BT /F1 24 Tf 72 700 Td (Page two) Tj ET\n\
endstream\n\
endobj\n\
7 0 obj\n\
<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>\n\
endobj\n\
xref\n\
0 8\n\
0000000000 65535 f \n\
0000000009 00000 n \n\
0000000058 00000 n \n\
0000000121 00000 n \n\
0000000247 00000 n \n\
0000000373 00000 n \n\
0000000462 00000 n \n\
0000000551 00000 n \n\
trailer\n\
<< /Size 8 /Root 1 0 R >>\n\
startxref\n\
648\n\
%%EOF\n";

    fn upload(filename: Option<&str>, content_type: Option<&str>, data: &[u8]) -> UploadedResume {
        UploadedResume {
            filename: filename.map(String::from),
            content_type: content_type.map(String::from),
            data: Bytes::copy_from_slice(data),
        }
    }

    #[test]
    fn test_detect_pdf_from_mime() {
        assert_eq!(
            ResumeKind::detect(Some("application/pdf"), Some("resume.bin")),
            ResumeKind::Pdf
        );
        assert_eq!(
            ResumeKind::detect(Some("Application/PDF; charset=binary"), None),
            ResumeKind::Pdf
        );
    }

    #[test]
    fn test_detect_text_from_mime() {
        assert_eq!(
            ResumeKind::detect(Some("text/plain"), Some("resume.txt")),
            ResumeKind::Text
        );
    }

    #[test]
    fn test_declared_type_wins_over_extension() {
        assert_eq!(
            ResumeKind::detect(Some("text/plain"), Some("resume.pdf")),
            ResumeKind::Text
        );
    }

    #[test]
    fn test_generic_type_falls_back_to_extension() {
        assert_eq!(
            ResumeKind::detect(Some("application/octet-stream"), Some("CV.PDF")),
            ResumeKind::Pdf
        );
        assert_eq!(ResumeKind::detect(None, Some("cv.pdf")), ResumeKind::Pdf);
        assert_eq!(ResumeKind::detect(None, Some("cv.txt")), ResumeKind::Text);
        assert_eq!(ResumeKind::detect(None, None), ResumeKind::Text);
    }

    #[test]
    fn test_check_extension() {
        assert!(check_extension(Some("resume.pdf")).is_ok());
        assert!(check_extension(Some("resume.TXT")).is_ok());
        assert!(check_extension(None).is_ok());
        assert!(check_extension(Some("")).is_ok());
        assert!(matches!(
            check_extension(Some("resume.docx")),
            Err(AppError::Validation(_))
        ));
        assert!(check_extension(Some("resume")).is_err());
    }

    #[test]
    fn test_join_pages_keeps_page_order() {
        let pages = ["Page one", "Page two", "Page three"];
        assert_eq!(join_pages(&pages), "Page one\nPage two\nPage three\n");
    }

    #[test]
    fn test_join_pages_empty_document() {
        let pages: [&str; 0] = [];
        assert_eq!(join_pages(&pages), "");
    }

    #[tokio::test]
    async fn test_text_upload_returned_unchanged() {
        let content = "Experienced engineer...\n  Rust, Go, SQL\n\tcafé ☕";
        let file = upload(Some("resume.txt"), Some("text/plain"), content.as_bytes());
        assert_eq!(extract_text(&file).await.unwrap(), content);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_error() {
        let file = upload(Some("resume.txt"), Some("text/plain"), &[0xff, 0xfe, 0x00, 0x80]);
        assert!(matches!(
            extract_text(&file).await,
            Err(ExtractError::Utf8(_))
        ));
    }

    #[tokio::test]
    async fn test_pdf_pages_extracted_in_order() {
        let file = upload(Some("resume.pdf"), Some("application/pdf"), TWO_PAGE_PDF);
        let text = extract_text(&file).await.unwrap();

        let pages = pdf_extract::extract_text_from_mem_by_pages(TWO_PAGE_PDF).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].trim(), "Page one");
        assert_eq!(pages[1].trim(), "Page two");
        assert_eq!(text, join_pages(&pages));

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(lines, ["Page one", "Page two"]);
        assert!(text.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_pdf_detected_from_filename_alone() {
        let file = upload(Some("resume.pdf"), None, TWO_PAGE_PDF);
        let text = extract_text(&file).await.unwrap();
        assert!(text.find("Page one").unwrap() < text.find("Page two").unwrap());
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_an_error() {
        let file = upload(Some("resume.pdf"), Some("application/pdf"), b"not a pdf at all");
        assert!(extract_text(&file).await.is_err());
    }

    #[test]
    fn test_ensure_content_rejects_whitespace() {
        assert!(matches!(ensure_content(""), Err(AppError::EmptyContent)));
        assert!(matches!(
            ensure_content("  \n\t \n"),
            Err(AppError::EmptyContent)
        ));
        assert!(ensure_content(" x ").is_ok());
    }
}
