use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{course::CourseService, service::Service};
use util::state::AppState;

use super::common::{CourseQuery, CourseResponse};
use crate::response::{ApiResponse, error_response};
use crate::routes::enrollments::common::EnrollmentResponse;

/// GET /api/courses
///
/// ### Query Parameters
/// - `teacher_id`: courses taught by this teacher
/// - `semester`: exact semester match
/// - `query`: substring of course name or code
pub async fn list_courses(
    State(app_state): State<AppState>,
    Query(params): Query<CourseQuery>,
) -> impl IntoResponse {
    let service = CourseService::new(app_state.db_clone());

    match service.list(params.into()).await {
        Ok(courses) => {
            let data: Vec<CourseResponse> = courses.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Courses retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/courses/{course_id}
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let service = CourseService::new(app_state.db_clone());

    match service.get(course_id).await {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}

/// GET /api/courses/{course_id}/enrollments
pub async fn get_course_enrollments(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let service = CourseService::new(app_state.db_clone());

    match service.enrollments(course_id).await {
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
