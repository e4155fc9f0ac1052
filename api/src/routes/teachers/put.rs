use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::{
    service::Service,
    teacher::{TeacherService, UpdateTeacher},
};
use util::state::AppState;

use super::common::{TeacherPatch, TeacherRequest, TeacherResponse};
use crate::response::{ApiResponse, error_response, rejection_response};

/// PUT /api/teachers/{teacher_id}
///
/// Replaces the teacher. Every required field must be present; optional fields that are left
/// out are cleared.
pub async fn replace_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
    payload: Result<Json<TeacherRequest>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(req)) => apply_update(app_state, teacher_id, req.into()).await,
        Err(rejection) => rejection_response(rejection),
    }
}

/// PATCH /api/teachers/{teacher_id}
///
/// Changes only the fields present in the body. Sending `null` clears an optional field.
pub async fn patch_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
    payload: Result<Json<TeacherPatch>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(patch)) => apply_update(app_state, teacher_id, patch.into()).await,
        Err(rejection) => rejection_response(rejection),
    }
}

async fn apply_update(
    app_state: AppState,
    teacher_id: i64,
    update: UpdateTeacher,
) -> (StatusCode, Json<ApiResponse<TeacherResponse>>) {
    let service = TeacherService::new(app_state.db_clone());

    match service.update(teacher_id, update).await {
        Ok(teacher) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TeacherResponse::from(teacher),
                "Teacher updated successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
