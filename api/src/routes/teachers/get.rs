use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{service::Service, teacher::TeacherService};
use util::state::AppState;

use super::common::{TeacherQuery, TeacherResponse};
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::common::CourseResponse;

/// GET /api/teachers
///
/// Lists teachers ordered by last name, then first name.
///
/// ### Query Parameters
/// - `department`: exact department match
/// - `query`: substring of first name, last name or email
pub async fn list_teachers(
    State(app_state): State<AppState>,
    Query(params): Query<TeacherQuery>,
) -> impl IntoResponse {
    let service = TeacherService::new(app_state.db_clone());

    match service.list(params.into()).await {
        Ok(teachers) => {
            let data: Vec<TeacherResponse> = teachers.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Teachers retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/{teacher_id}
///
/// - `200 OK` with the teacher
/// - `404 Not Found` if no such teacher exists
pub async fn get_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> impl IntoResponse {
    let service = TeacherService::new(app_state.db_clone());

    match service.get(teacher_id).await {
        Ok(teacher) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TeacherResponse::from(teacher),
                "Teacher retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/{teacher_id}/courses
///
/// Courses taught by the teacher, ordered by course code.
pub async fn get_teacher_courses(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> impl IntoResponse {
    let service = TeacherService::new(app_state.db_clone());

    match service.courses(teacher_id).await {
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
