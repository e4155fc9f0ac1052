//! Server-rendered HTML pages.
//!
//! Each entity gets a list, create, detail, update and delete-confirmation page. `GET` only
//! renders; `POST` mutates and redirects to the list with `303 See Other`. A failed mutation
//! renders the form again with the error message.

use axum::{Router, response::Redirect, routing::get};
use util::state::AppState;

pub mod courses;
pub mod enrollments;
pub mod render;
pub mod students;
pub mod teachers;

pub fn page_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/students/") }))
        .merge(students::student_pages())
        .merge(teachers::teacher_pages())
        .merge(courses::course_pages())
        .merge(enrollments::enrollment_pages())
        .with_state(app_state)
}
