//! # Student Routes
//!
//! - `GET    /students`                             → list students
//! - `POST   /students`                             → create a student
//! - `GET    /students/{student_id}`                → fetch one student
//! - `PUT    /students/{student_id}`                → replace a student
//! - `PATCH  /students/{student_id}`                → partially update a student
//! - `DELETE /students/{student_id}`                → delete a student and their enrollments
//! - `GET    /students/{student_id}/enrollments`    → the student's enrollments

use axum::{Router, routing::get};
use delete::delete_student;
use get::{get_student, get_student_enrollments, list_students};
use post::create_student;
use put::{patch_student, replace_student};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{student_id}",
            get(get_student)
                .put(replace_student)
                .patch(patch_student)
                .delete(delete_student),
        )
        .route("/{student_id}/enrollments", get(get_student_enrollments))
}
