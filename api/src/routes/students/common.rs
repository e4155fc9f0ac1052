//! Student request/response models.

use common::deserialize_some;
use serde::{Deserialize, Serialize};
use services::student::{CreateStudent, Student, StudentFilter, UpdateStudent};
use db::models::student::StudentStatus;

#[derive(Debug, Default, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub enrollment_date: String,
    pub status: StudentStatus,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            phone: student.phone,
            date_of_birth: student.date_of_birth.map(|d| d.to_string()),
            enrollment_date: student.enrollment_date.to_string(),
            status: student.status,
        }
    }
}

/// Body of `POST /students` and `PUT /students/{student_id}`.
#[derive(Debug, Deserialize)]
pub struct StudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub enrollment_date: String,
    pub status: Option<StudentStatus>,
}

impl From<StudentRequest> for CreateStudent {
    fn from(req: StudentRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            date_of_birth: req.date_of_birth,
            enrollment_date: req.enrollment_date,
            status: req.status,
        }
    }
}

/// Full replacement: omitted optional fields are cleared and status falls back to `active`.
impl From<StudentRequest> for UpdateStudent {
    fn from(req: StudentRequest) -> Self {
        Self {
            first_name: Some(req.first_name),
            last_name: Some(req.last_name),
            email: Some(req.email),
            phone: Some(req.phone),
            date_of_birth: Some(req.date_of_birth),
            enrollment_date: Some(req.enrollment_date),
            status: Some(req.status.unwrap_or_default()),
        }
    }
}

/// Body of `PATCH /students/{student_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub date_of_birth: Option<Option<String>>,
    pub enrollment_date: Option<String>,
    pub status: Option<StudentStatus>,
}

impl From<StudentPatch> for UpdateStudent {
    fn from(patch: StudentPatch) -> Self {
        Self {
            first_name: patch.first_name,
            last_name: patch.last_name,
            email: patch.email,
            phone: patch.phone,
            date_of_birth: patch.date_of_birth,
            enrollment_date: patch.enrollment_date,
            status: patch.status,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentQuery {
    pub status: Option<StudentStatus>,
    pub query: Option<String>,
}

impl From<StudentQuery> for StudentFilter {
    fn from(q: StudentQuery) -> Self {
        Self {
            status: q.status,
            query: q.query,
        }
    }
}
