use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{service::Service, student::StudentService};
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// DELETE /api/students/{student_id}
///
/// Also removes every enrollment the student holds.
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let service = StudentService::new(app_state.db_clone());

    match service.delete(student_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Student deleted successfully")),
        ),
        Err(e) => error_response(e),
    }
}
