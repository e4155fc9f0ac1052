use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{enrollment::EnrollmentService, service::Service};
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// DELETE /api/enrollments/{enrollment_id}
pub async fn delete_enrollment(
    State(app_state): State<AppState>,
    Path(enrollment_id): Path<i64>,
) -> impl IntoResponse {
    let service = EnrollmentService::new(app_state.db_clone());

    match service.delete(enrollment_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Enrollment deleted successfully")),
        ),
        Err(e) => error_response(e),
    }
}
