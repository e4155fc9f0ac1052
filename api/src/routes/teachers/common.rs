//! Teacher request/response models.

use common::deserialize_some;
use serde::{Deserialize, Serialize};
use services::teacher::{CreateTeacher, Teacher, TeacherFilter, UpdateTeacher};

#[derive(Debug, Default, Serialize)]
pub struct TeacherResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub hire_date: String,
}

impl From<Teacher> for TeacherResponse {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            first_name: teacher.first_name,
            last_name: teacher.last_name,
            email: teacher.email,
            phone: teacher.phone,
            department: teacher.department,
            specialization: teacher.specialization,
            hire_date: teacher.hire_date.to_string(),
        }
    }
}

/// Body of `POST /teachers` and `PUT /teachers/{teacher_id}`.
#[derive(Debug, Deserialize)]
pub struct TeacherRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub hire_date: String,
}

impl From<TeacherRequest> for CreateTeacher {
    fn from(req: TeacherRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            department: req.department,
            specialization: req.specialization,
            hire_date: req.hire_date,
        }
    }
}

/// Full replacement: omitted optional fields are cleared.
impl From<TeacherRequest> for UpdateTeacher {
    fn from(req: TeacherRequest) -> Self {
        Self {
            first_name: Some(req.first_name),
            last_name: Some(req.last_name),
            email: Some(req.email),
            phone: Some(req.phone),
            department: Some(req.department),
            specialization: Some(req.specialization),
            hire_date: Some(req.hire_date),
        }
    }
}

/// Body of `PATCH /teachers/{teacher_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct TeacherPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub department: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub specialization: Option<Option<String>>,
    pub hire_date: Option<String>,
}

impl From<TeacherPatch> for UpdateTeacher {
    fn from(patch: TeacherPatch) -> Self {
        Self {
            first_name: patch.first_name,
            last_name: patch.last_name,
            email: patch.email,
            phone: patch.phone,
            department: patch.department,
            specialization: patch.specialization,
            hire_date: patch.hire_date,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TeacherQuery {
    pub department: Option<String>,
    pub query: Option<String>,
}

impl From<TeacherQuery> for TeacherFilter {
    fn from(q: TeacherQuery) -> Self {
        Self {
            department: q.department,
            query: q.query,
        }
    }
}
