use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::{
    service::Service,
    student::{StudentService, UpdateStudent},
};
use util::state::AppState;

use super::common::{StudentPatch, StudentRequest, StudentResponse};
use crate::response::{ApiResponse, error_response, rejection_response};

/// PUT /api/students/{student_id}
pub async fn replace_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(req)) => apply_update(app_state, student_id, req.into()).await,
        Err(rejection) => rejection_response(rejection),
    }
}

/// PATCH /api/students/{student_id}
pub async fn patch_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    payload: Result<Json<StudentPatch>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(patch)) => apply_update(app_state, student_id, patch.into()).await,
        Err(rejection) => rejection_response(rejection),
    }
}

async fn apply_update(
    app_state: AppState,
    student_id: i64,
    update: UpdateStudent,
) -> (StatusCode, Json<ApiResponse<StudentResponse>>) {
    let service = StudentService::new(app_state.db_clone());

    match service.update(student_id, update).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student updated successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
