// POST /api/compare — score two uploaded text documents.
//
// Returns 200 with { similarity, message } on success. Upload problems map to
// 400/413, a document with no words to 422, and a crashed worker to 500. All
// errors use the { error, details } shape from `api_error`.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::similarity::Comparison;
use crate::web::upload::{read_documents, UploadError};
use crate::web::{api_error, AppState};

/// Success body of POST /api/compare.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub similarity: f64,
    pub message: String,
}

impl From<Comparison> for CompareResponse {
    fn from(comparison: Comparison) -> Self {
        Self {
            similarity: comparison.similarity,
            message: comparison.message,
        }
    }
}

pub async fn compare_documents(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => return UploadError::from(rejection).into_response(),
    };

    let [first, second] =
        match read_documents(&mut multipart, state.config.max_document_bytes).await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(error = %e, "Rejected upload");
                return e.into_response();
            }
        };

    info!(
        file_a = %first.file_name,
        file_b = %second.file_name,
        bytes_a = first.text.len(),
        bytes_b = second.text.len(),
        "Processing files"
    );

    // Tokenizing and weighting is CPU-bound; keep it off the I/O threads.
    let comparer = state.comparer.clone();
    let outcome =
        tokio::task::spawn_blocking(move || comparer.compare(&first.text, &second.text)).await;

    match outcome {
        Ok(Ok(comparison)) => {
            info!(
                similarity = comparison.similarity,
                tokens_a = comparison.diagnostics.tokens_a,
                tokens_b = comparison.diagnostics.tokens_b,
                "Similarity score"
            );
            Json(CompareResponse::from(comparison)).into_response()
        }
        Ok(Err(e)) => {
            warn!(error = %e, "Comparison refused");
            api_error(StatusCode::UNPROCESSABLE_ENTITY, e.code(), &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Comparison worker failed");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "comparison_failed",
                "Error processing documents",
            )
        }
    }
}
