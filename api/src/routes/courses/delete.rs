use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{course::CourseService, service::Service};
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// DELETE /api/courses/{course_id}
///
/// Also removes every enrollment in the course.
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let service = CourseService::new(app_state.db_clone());

    match service.delete(course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Course deleted successfully")),
        ),
        Err(e) => error_response(e),
    }
}
