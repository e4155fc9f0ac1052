use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::{enrollment::EnrollmentService, service::Service};
use util::state::AppState;

use super::common::{EnrollmentRequest, EnrollmentResponse};
use crate::response::{ApiResponse, error_response, rejection_response};

/// POST /api/enrollments
///
/// ### Request Body
/// ```json
/// { "student": 1, "course": 2, "status": "enrolled" }
/// ```
///
/// ### Responses
/// - `201 Created` with `enrollment_date` set to today
/// - `400 Bad Request` if the student is already enrolled in the course
/// - `404 Not Found` if either the student or the course is missing
pub async fn create_enrollment(
    State(app_state): State<AppState>,
    payload: Result<Json<EnrollmentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response::<EnrollmentResponse>(rejection),
    };

    let service = EnrollmentService::new(app_state.db_clone());

    match service.create(req.into()).await {
        Ok(enrollment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                EnrollmentResponse::from(enrollment),
                "Enrollment created successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
