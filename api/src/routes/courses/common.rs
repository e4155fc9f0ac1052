//! Course request/response models.
//!
//! The assigned teacher travels as an integer id under `teacher`.

use common::deserialize_some;
use db::models::course::DEFAULT_MAX_CAPACITY;
use serde::{Deserialize, Serialize};
use services::course::{Course, CourseFilter, CreateCourse, UpdateCourse};

#[derive(Debug, Default, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub course_name: String,
    pub course_code: String,
    pub teacher: Option<i64>,
    pub description: Option<String>,
    pub credits: i32,
    pub max_capacity: i32,
    pub semester: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            course_name: course.course_name,
            course_code: course.course_code,
            teacher: course.teacher_id,
            description: course.description,
            credits: course.credits,
            max_capacity: course.max_capacity,
            semester: course.semester,
        }
    }
}

/// Body of `POST /courses` and `PUT /courses/{course_id}`.
#[derive(Debug, Deserialize)]
pub struct CourseRequest {
    pub course_name: String,
    pub course_code: String,
    pub teacher: Option<i64>,
    pub description: Option<String>,
    pub credits: i32,
    pub max_capacity: Option<i32>,
    pub semester: Option<String>,
}

impl From<CourseRequest> for CreateCourse {
    fn from(req: CourseRequest) -> Self {
        Self {
            course_name: req.course_name,
            course_code: req.course_code,
            teacher_id: req.teacher,
            description: req.description,
            credits: req.credits,
            max_capacity: req.max_capacity,
            semester: req.semester,
        }
    }
}

/// Full replacement: omitted optional fields are cleared, capacity falls back to the default.
impl From<CourseRequest> for UpdateCourse {
    fn from(req: CourseRequest) -> Self {
        Self {
            course_name: Some(req.course_name),
            course_code: Some(req.course_code),
            teacher_id: Some(req.teacher),
            description: Some(req.description),
            credits: Some(req.credits),
            max_capacity: Some(req.max_capacity.unwrap_or(DEFAULT_MAX_CAPACITY)),
            semester: Some(req.semester),
        }
    }
}

/// Body of `PATCH /courses/{course_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct CoursePatch {
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub teacher: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    pub credits: Option<i32>,
    pub max_capacity: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub semester: Option<Option<String>>,
}

impl From<CoursePatch> for UpdateCourse {
    fn from(patch: CoursePatch) -> Self {
        Self {
            course_name: patch.course_name,
            course_code: patch.course_code,
            teacher_id: patch.teacher,
            description: patch.description,
            credits: patch.credits,
            max_capacity: patch.max_capacity,
            semester: patch.semester,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseQuery {
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    pub query: Option<String>,
}

impl From<CourseQuery> for CourseFilter {
    fn from(q: CourseQuery) -> Self {
        Self {
            teacher_id: q.teacher_id,
            semester: q.semester,
            query: q.query,
        }
    }
}
