use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use avalia_core::schema::{FieldName, FieldValue};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FieldResponse {
    pub field: String,
    pub value: FieldValue,
}

#[derive(Deserialize)]
pub struct FieldUpdate {
    pub value: FieldValue,
}

pub async fn get_field(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, String)>,
) -> Result<Json<FieldResponse>, ApiError> {
    let field: FieldName = field.parse()?;
    let mut sessions = state.sessions.lock().await;
    let value = sessions.get_mut(id)?.form().get_field(&field);

    Ok(Json(FieldResponse {
        field: field.key(),
        value,
    }))
}

/// Write one field and echo the value actually stored, which may differ
/// from the request when a choice falls outside its catalog.
pub async fn put_field(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, String)>,
    Json(update): Json<FieldUpdate>,
) -> Result<Json<FieldResponse>, ApiError> {
    let field: FieldName = field.parse()?;
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;

    let value = session.form().set_field(field, update.value)?;
    session.document = None;

    Ok(Json(FieldResponse {
        field: field.key(),
        value,
    }))
}
