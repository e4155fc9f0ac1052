//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → health check
//! - `/teachers` → teacher records and the courses they teach
//! - `/students` → student records and their enrollments
//! - `/courses` → course records and their enrollments
//! - `/enrollments` → student/course enrollments
//!
//! Every response uses the `ApiResponse` envelope.

use crate::routes::{
    courses::course_routes, enrollments::enrollment_routes, health::health_routes,
    students::student_routes, teachers::teacher_routes,
};
use axum::Router;
use util::state::AppState;

pub mod courses;
pub mod enrollments;
pub mod health;
pub mod students;
pub mod teachers;

/// Builds the JSON API router, to be nested under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/teachers", teacher_routes())
        .nest("/students", student_routes())
        .nest("/courses", course_routes())
        .nest("/enrollments", enrollment_routes())
        .with_state(app_state)
}
