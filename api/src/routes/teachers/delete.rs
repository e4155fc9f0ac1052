use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{service::Service, teacher::TeacherService};
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// DELETE /api/teachers/{teacher_id}
///
/// Courses taught by the teacher are kept with no teacher assigned.
pub async fn delete_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> impl IntoResponse {
    let service = TeacherService::new(app_state.db_clone());

    match service.delete(teacher_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Teacher deleted successfully")),
        ),
        Err(e) => error_response(e),
    }
}
