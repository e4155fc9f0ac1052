use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{enrollment::EnrollmentService, service::Service};
use util::state::AppState;

use super::common::{EnrollmentQuery, EnrollmentResponse};
use crate::response::{ApiResponse, error_response};

/// GET /api/enrollments
///
/// Newest enrollments first.
///
/// ### Query Parameters
/// - `student_id`, `course_id`: restrict to one student or course
/// - `status`: `enrolled`, `completed`, `dropped` or `failed`
pub async fn list_enrollments(
    State(app_state): State<AppState>,
    Query(params): Query<EnrollmentQuery>,
) -> impl IntoResponse {
    let service = EnrollmentService::new(app_state.db_clone());

    match service.list(params.into()).await {
        Ok(enrollments) => {
            let data: Vec<EnrollmentResponse> = enrollments.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Enrollments retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/enrollments/{enrollment_id}
pub async fn get_enrollment(
    State(app_state): State<AppState>,
    Path(enrollment_id): Path<i64>,
) -> impl IntoResponse {
    let service = EnrollmentService::new(app_state.db_clone());

    match service.get(enrollment_id).await {
        Ok(enrollment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                EnrollmentResponse::from(enrollment),
                "Enrollment retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
