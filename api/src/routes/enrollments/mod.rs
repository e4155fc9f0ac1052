//! # Enrollment Routes
//!
//! - `GET    /enrollments`                    → list enrollments
//! - `POST   /enrollments`                    → enroll a student in a course
//! - `GET    /enrollments/{enrollment_id}`    → fetch one enrollment
//! - `PUT    /enrollments/{enrollment_id}`    → replace an enrollment
//! - `PATCH  /enrollments/{enrollment_id}`    → partially update an enrollment
//! - `DELETE /enrollments/{enrollment_id}`    → delete an enrollment

use axum::{Router, routing::get};
use delete::delete_enrollment;
use get::{get_enrollment, list_enrollments};
use post::create_enrollment;
use put::{patch_enrollment, replace_enrollment};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route(
            "/{enrollment_id}",
            get(get_enrollment)
                .put(replace_enrollment)
                .patch(patch_enrollment)
                .delete(delete_enrollment),
        )
}
