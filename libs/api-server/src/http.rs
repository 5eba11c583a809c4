use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use student_api::{NewRecord, RecordId, RecordUpdate};

use super::AppState;
use crate::error::{ApiError, Operation};
use crate::forms::{DeleteForm, InsertForm, UpdateForm};

/// 302 back to the listing page, as browsers expect after a form POST.
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

// ═══════════════════════════════════════════════════════════════
//  POST /insert  (name, value)
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_insert(
    State(state): State<AppState>,
    form: Result<Form<InsertForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form?;
    let record = NewRecord::try_from(form)?;
    let id = state
        .store
        .insert(record)
        .await
        .map_err(ApiError::store(Operation::Insert))?;
    tracing::info!(id = %id, "inserted record");
    Ok(redirect_home())
}

// ═══════════════════════════════════════════════════════════════
//  POST /update  (id, name, value)
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_update(
    State(state): State<AppState>,
    form: Result<Form<UpdateForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form?;
    let update = RecordUpdate::try_from(form)?;
    let id = update.id.clone();
    state
        .store
        .update(update)
        .await
        .map_err(ApiError::store(Operation::Update))?;
    tracing::info!(id = %id, "updated record");
    Ok(redirect_home())
}

// ═══════════════════════════════════════════════════════════════
//  POST /delete  (id)
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_delete(
    State(state): State<AppState>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form?;
    let id = RecordId::try_from(form)?;
    state
        .store
        .delete(&id)
        .await
        .map_err(ApiError::store(Operation::Delete))?;
    tracing::info!(id = %id, "deleted record");
    Ok(redirect_home())
}

// ═══════════════════════════════════════════════════════════════
//  GET /api/display-data
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_display_data(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let records = state
        .store
        .find_all()
        .await
        .map_err(ApiError::store(Operation::Fetch))?;
    Ok(axum::Json(records).into_response())
}
