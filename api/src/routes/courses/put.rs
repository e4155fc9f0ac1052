use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::{
    course::{CourseService, UpdateCourse},
    service::Service,
};
use util::state::AppState;

use super::common::{CoursePatch, CourseRequest, CourseResponse};
use crate::response::{ApiResponse, error_response, rejection_response};

/// PUT /api/courses/{course_id}
///
/// Omitting `teacher` leaves the course unassigned.
pub async fn replace_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(req)) => apply_update(app_state, course_id, req.into()).await,
        Err(rejection) => rejection_response(rejection),
    }
}

/// PATCH /api/courses/{course_id}
///
/// `"teacher": null` unassigns the teacher; leaving `teacher` out keeps it.
pub async fn patch_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    payload: Result<Json<CoursePatch>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(patch)) => apply_update(app_state, course_id, patch.into()).await,
        Err(rejection) => rejection_response(rejection),
    }
}

async fn apply_update(
    app_state: AppState,
    course_id: i64,
    update: UpdateCourse,
) -> (StatusCode, Json<ApiResponse<CourseResponse>>) {
    let service = CourseService::new(app_state.db_clone());

    match service.update(course_id, update).await {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course updated successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
