//! # Course Routes
//!
//! - `GET    /courses`                            → list courses
//! - `POST   /courses`                            → create a course
//! - `GET    /courses/{course_id}`                → fetch one course
//! - `PUT    /courses/{course_id}`                → replace a course
//! - `PATCH  /courses/{course_id}`                → partially update a course
//! - `DELETE /courses/{course_id}`                → delete a course and its enrollments
//! - `GET    /courses/{course_id}/enrollments`    → enrollments in the course

use axum::{Router, routing::get};
use delete::delete_course;
use get::{get_course, get_course_enrollments, list_courses};
use post::create_course;
use put::{patch_course, replace_course};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/{course_id}",
            get(get_course)
                .put(replace_course)
                .patch(patch_course)
                .delete(delete_course),
        )
        .route("/{course_id}/enrollments", get(get_course_enrollments))
}
