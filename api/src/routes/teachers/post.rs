use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::{service::Service, teacher::TeacherService};
use util::state::AppState;

use super::common::{TeacherRequest, TeacherResponse};
use crate::response::{ApiResponse, error_response, rejection_response};

/// POST /api/teachers
///
/// ### Request Body
/// ```json
/// {
///   "first_name": "Ada",
///   "last_name": "Lovelace",
///   "email": "ada@school.edu",
///   "phone": "555-0100",
///   "department": "Mathematics",
///   "specialization": "Analysis",
///   "hire_date": "2020-01-01"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored teacher
/// - `400 Bad Request` on malformed JSON, failed validation or a duplicate email
pub async fn create_teacher(
    State(app_state): State<AppState>,
    payload: Result<Json<TeacherRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response::<TeacherResponse>(rejection),
    };

    let service = TeacherService::new(app_state.db_clone());

    match service.create(req.into()).await {
        Ok(teacher) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                TeacherResponse::from(teacher),
                "Teacher created successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
