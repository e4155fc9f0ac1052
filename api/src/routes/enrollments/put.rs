use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use services::{
    enrollment::{EnrollmentService, UpdateEnrollment},
    service::Service,
};
use util::state::AppState;

use super::common::{EnrollmentPatch, EnrollmentRequest, EnrollmentResponse};
use crate::response::{ApiResponse, error_response, rejection_response};

/// PUT /api/enrollments/{enrollment_id}
pub async fn replace_enrollment(
    State(app_state): State<AppState>,
    Path(enrollment_id): Path<i64>,
    payload: Result<Json<EnrollmentRequest>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(req)) => apply_update(app_state, enrollment_id, req.into()).await,
        Err(rejection) => rejection_response(rejection),
    }
}

/// PATCH /api/enrollments/{enrollment_id}
pub async fn patch_enrollment(
    State(app_state): State<AppState>,
    Path(enrollment_id): Path<i64>,
    payload: Result<Json<EnrollmentPatch>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(patch)) => apply_update(app_state, enrollment_id, patch.into()).await,
        Err(rejection) => rejection_response(rejection),
    }
}

async fn apply_update(
    app_state: AppState,
    enrollment_id: i64,
    update: UpdateEnrollment,
) -> (StatusCode, Json<ApiResponse<EnrollmentResponse>>) {
    let service = EnrollmentService::new(app_state.db_clone());

    match service.update(enrollment_id, update).await {
        Ok(enrollment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                EnrollmentResponse::from(enrollment),
                "Enrollment updated successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
