use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Serialize;
use services::service::AppError;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": 1, "first_name": "Ada" },
///   "message": "Teacher retrieved successfully"
/// }
/// ```
///
/// Error responses carry `T::default()` as `data`.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// HTTP status for a service failure.
///
/// - `NotFound` → 404
/// - `Validation`, `ConstraintViolation`, `DuplicateEnrollment` → 400
/// - `Database` → 500
pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Validation(_)
        | AppError::ConstraintViolation { .. }
        | AppError::DuplicateEnrollment { .. } => StatusCode::BAD_REQUEST,
        AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a service failure into the standard error envelope.
pub fn error_response<T>(err: AppError) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    }
    (status, Json(ApiResponse::error(err.to_string())))
}

/// Malformed or incomplete JSON bodies are client errors.
pub fn rejection_response<T>(rejection: JsonRejection) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(rejection.body_text())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_error_kind_to_a_status() {
        assert_eq!(
            status_for(&AppError::not_found("Course", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&AppError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&AppError::constraint("email", "unique")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&AppError::DuplicateEnrollment {
                student_id: 1,
                course_id: 2
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&AppError::Database(sea_orm::DbErr::Custom("boom".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_envelope_carries_message() {
        let (status, Json(body)) =
            error_response::<Vec<i64>>(AppError::not_found("Student", 3));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert!(body.data.is_empty());
        assert_eq!(body.message, "Student 3 not found");
    }
}
