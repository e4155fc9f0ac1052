use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{service::Service, student::StudentService};
use util::state::AppState;

use super::common::{StudentQuery, StudentResponse};
use crate::response::{ApiResponse, error_response};
use crate::routes::enrollments::common::EnrollmentResponse;

/// GET /api/students
///
/// ### Query Parameters
/// - `status`: `active`, `inactive` or `graduated`
/// - `query`: substring of first name, last name or email
pub async fn list_students(
    State(app_state): State<AppState>,
    Query(params): Query<StudentQuery>,
) -> impl IntoResponse {
    let service = StudentService::new(app_state.db_clone());

    match service.list(params.into()).await {
        Ok(students) => {
            let data: Vec<StudentResponse> = students.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Students retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/students/{student_id}
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let service = StudentService::new(app_state.db_clone());

    match service.get(student_id).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}

/// GET /api/students/{student_id}/enrollments
///
/// The student's enrollments, newest first.
pub async fn get_student_enrollments(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let service = StudentService::new(app_state.db_clone());

    match service.enrollments(student_id).await {
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
