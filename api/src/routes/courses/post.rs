use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::{course::CourseService, service::Service};
use util::state::AppState;

use super::common::{CourseRequest, CourseResponse};
use crate::response::{ApiResponse, error_response, rejection_response};

/// POST /api/courses
///
/// ### Request Body
/// ```json
/// {
///   "course_name": "Introduction to Programming",
///   "course_code": "CS101",
///   "teacher": 1,
///   "credits": 3,
///   "max_capacity": 40,
///   "semester": "Fall 2024"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` for credits below 1 or a duplicate course code
/// - `404 Not Found` if `teacher` names no teacher
pub async fn create_course(
    State(app_state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response::<CourseResponse>(rejection),
    };

    let service = CourseService::new(app_state.db_clone());

    match service.create(req.into()).await {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course created successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
