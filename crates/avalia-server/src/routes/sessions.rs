use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use avalia_core::models::record::EvaluationRecord;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub record: EvaluationRecord,
}

pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreated>), ApiError> {
    let mut sessions = state.sessions.lock().await;
    let (session_id, session) = sessions.create()?;
    let record = session.form().snapshot();

    Ok((StatusCode::CREATED, Json(SessionCreated { session_id, record })))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EvaluationRecord>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let record = sessions.get_mut(id)?.form().snapshot();
    Ok(Json(record))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.lock().await.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
