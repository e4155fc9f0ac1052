//! # Teacher Routes
//!
//! - `GET    /teachers`                        → list teachers
//! - `POST   /teachers`                        → create a teacher
//! - `GET    /teachers/{teacher_id}`           → fetch one teacher
//! - `PUT    /teachers/{teacher_id}`           → replace a teacher
//! - `PATCH  /teachers/{teacher_id}`           → partially update a teacher
//! - `DELETE /teachers/{teacher_id}`           → delete a teacher
//! - `GET    /teachers/{teacher_id}/courses`   → courses taught by the teacher

use axum::{Router, routing::get};
use delete::delete_teacher;
use get::{get_teacher, get_teacher_courses, list_teachers};
use post::create_teacher;
use put::{patch_teacher, replace_teacher};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route(
            "/{teacher_id}",
            get(get_teacher)
                .put(replace_teacher)
                .patch(patch_teacher)
                .delete(delete_teacher),
        )
        .route("/{teacher_id}/courses", get(get_teacher_courses))
}
