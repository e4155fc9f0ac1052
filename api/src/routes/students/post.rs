use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::{service::Service, student::StudentService};
use util::state::AppState;

use super::common::{StudentRequest, StudentResponse};
use crate::response::{ApiResponse, error_response, rejection_response};

/// POST /api/students
///
/// ### Request Body
/// ```json
/// {
///   "first_name": "Sam",
///   "last_name": "Lee",
///   "email": "sam@school.edu",
///   "date_of_birth": "2006-04-12",
///   "enrollment_date": "2024-01-15",
///   "status": "active"
/// }
/// ```
///
/// `status` defaults to `active`.
pub async fn create_student(
    State(app_state): State<AppState>,
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response::<StudentResponse>(rejection),
    };

    let service = StudentService::new(app_state.db_clone());

    match service.create(req.into()).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student created successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
