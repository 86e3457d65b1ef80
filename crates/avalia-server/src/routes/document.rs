use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use uuid::Uuid;

use avalia_export::render::render;

use crate::error::ApiError;
use crate::state::AppState;

/// Escaped in `filename*`: everything except unreserved ASCII.
const FILENAME_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Serialize)]
pub struct SubmitResponse {
    pub filename: String,
    pub content_type: &'static str,
    pub size: usize,
    pub download_url: String,
}

/// Render the session's record and keep the document for download.
///
/// The session stays locked until the bytes exist, so an edit either lands
/// before the snapshot or withdraws the finished document afterwards. A
/// failed render leaves the session without a document.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;
    session.document = None;

    let document = match render(session.form().record(), &state.render) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(session_id = %id, error = %e, "document generation failed");
            return Err(e.into());
        }
    };

    let response = SubmitResponse {
        filename: document.filename.clone(),
        content_type: document.content_type,
        size: document.bytes.len(),
        download_url: format!("/sessions/{id}/document"),
    };
    session.document = Some(document);

    tracing::info!(session_id = %id, filename = %response.filename, "document ready");
    Ok(Json(response))
}

pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let document = sessions
        .get_mut(id)?
        .document
        .clone()
        .ok_or_else(|| ApiError::NotFound("no document has been generated yet".to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, document.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&document.filename),
            ),
        ],
        document.bytes,
    )
        .into_response())
}

/// `attachment` disposition with an ASCII fallback name and the exact
/// UTF-8 name in `filename*` (RFC 6266).
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' { c } else { '_' })
        .collect();

    let encoded = utf8_percent_encode(filename, FILENAME_SET);
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
