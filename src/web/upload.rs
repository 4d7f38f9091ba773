// Multipart upload extraction for POST /api/compare.
//
// Clients send two files under the `documents` field. Each file must be
// plain text (content type text/plain or a .txt name) and no larger than the
// configured per-document ceiling. Files are read into memory and decoded
// as UTF-8 (lossy); nothing touches disk.

use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::web::api_error;

/// Multipart field name carrying the documents.
pub const DOCUMENTS_FIELD: &str = "documents";

/// One uploaded document, decoded to text.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub text: String,
}

/// Why an upload was rejected before any comparison ran.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("{0}")]
    Rejected(#[from] MultipartRejection),

    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("Unexpected field '{0}', upload files under 'documents'")]
    UnexpectedField(String),

    #[error("Only .txt files are allowed (got '{0}')")]
    UnsupportedFileType(String),

    #[error("'{file_name}' exceeds the {limit} byte document limit")]
    TooLarge { file_name: String, limit: usize },

    #[error("Please upload exactly 2 documents")]
    WrongCount,
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::Rejected(e) => e.status(),
            UploadError::Multipart(e) => e.status(),
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::UnexpectedField(_)
            | UploadError::UnsupportedFileType(_)
            | UploadError::WrongCount => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            // The body limit can trip before a field is fully read; that is
            // still an oversized document.
            _ if self.status() == StatusCode::PAYLOAD_TOO_LARGE => "document_too_large",
            UploadError::Rejected(_) | UploadError::Multipart(_) => "invalid_upload",
            UploadError::UnexpectedField(_) => "unexpected_field",
            UploadError::UnsupportedFileType(_) => "unsupported_file_type",
            UploadError::TooLarge { .. } => "document_too_large",
            UploadError::WrongCount => "expected_two_documents",
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let details = match &self {
            UploadError::Rejected(e) => e.body_text(),
            UploadError::Multipart(e) => e.body_text(),
            other => other.to_string(),
        };
        api_error(self.status(), self.code(), &details)
    }
}

/// Read exactly two text documents from a multipart request.
pub async fn read_documents(
    multipart: &mut Multipart,
    max_document_bytes: usize,
) -> Result<[UploadedDocument; 2], UploadError> {
    let mut documents = Vec::with_capacity(2);

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name != DOCUMENTS_FIELD {
            return Err(UploadError::UnexpectedField(name));
        }
        if documents.len() == 2 {
            return Err(UploadError::WrongCount);
        }
        documents.push(read_document(field, max_document_bytes).await?);
    }

    documents.try_into().map_err(|_| UploadError::WrongCount)
}

async fn read_document(
    mut field: Field<'_>,
    max_document_bytes: usize,
) -> Result<UploadedDocument, UploadError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    if !is_text_file(&file_name, field.content_type()) {
        return Err(UploadError::UnsupportedFileType(file_name));
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = field.chunk().await? {
        if bytes.len() + chunk.len() > max_document_bytes {
            return Err(UploadError::TooLarge {
                file_name,
                limit: max_document_bytes,
            });
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(UploadedDocument {
        file_name,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Accept text/plain content or a .txt file name.
pub fn is_text_file(file_name: &str, content_type: Option<&str>) -> bool {
    let plain = content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("text/plain"));
    plain || file_name.to_ascii_lowercase().ends_with(".txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_file_by_content_type() {
        assert!(is_text_file("notes", Some("text/plain")));
        assert!(is_text_file("notes", Some("text/plain; charset=utf-8")));
        assert!(!is_text_file("notes", Some("application/pdf")));
        assert!(!is_text_file("notes", None));
    }

    #[test]
    fn test_text_file_by_extension() {
        assert!(is_text_file("essay.txt", None));
        assert!(is_text_file("ESSAY.TXT", Some("application/octet-stream")));
        assert!(!is_text_file("essay.txt.pdf", Some("application/pdf")));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(UploadError::WrongCount.code(), "expected_two_documents");
        assert_eq!(UploadError::WrongCount.status(), StatusCode::BAD_REQUEST);
        let too_large = UploadError::TooLarge {
            file_name: "a.txt".to_string(),
            limit: 10,
        };
        assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            too_large.to_string(),
            "'a.txt' exceeds the 10 byte document limit"
        );
    }
}
