//! Enrollment request/response models.
//!
//! `student` and `course` travel as integer ids. `enrollment_date` is read-only.

use common::deserialize_some;
use db::models::enrollment::EnrollmentStatus;
use serde::{Deserialize, Serialize};
use services::enrollment::{CreateEnrollment, Enrollment, EnrollmentFilter, UpdateEnrollment};

#[derive(Debug, Default, Serialize)]
pub struct EnrollmentResponse {
    pub id: i64,
    pub enrollment_date: String,
    pub student: i64,
    pub course: i64,
    pub grade: Option<f64>,
    pub status: EnrollmentStatus,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            enrollment_date: enrollment.enrollment_date.to_string(),
            student: enrollment.student_id,
            course: enrollment.course_id,
            grade: enrollment.grade,
            status: enrollment.status,
        }
    }
}

/// Body of `POST /enrollments` and `PUT /enrollments/{enrollment_id}`.
#[derive(Debug, Deserialize)]
pub struct EnrollmentRequest {
    pub student: i64,
    pub course: i64,
    pub grade: Option<f64>,
    pub status: Option<EnrollmentStatus>,
}

impl From<EnrollmentRequest> for CreateEnrollment {
    fn from(req: EnrollmentRequest) -> Self {
        Self {
            student_id: req.student,
            course_id: req.course,
            grade: req.grade,
            status: req.status,
        }
    }
}

impl From<EnrollmentRequest> for UpdateEnrollment {
    fn from(req: EnrollmentRequest) -> Self {
        Self {
            student_id: Some(req.student),
            course_id: Some(req.course),
            grade: Some(req.grade),
            status: Some(req.status.unwrap_or_default()),
        }
    }
}

/// Body of `PATCH /enrollments/{enrollment_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct EnrollmentPatch {
    pub student: Option<i64>,
    pub course: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub grade: Option<Option<f64>>,
    pub status: Option<EnrollmentStatus>,
}

impl From<EnrollmentPatch> for UpdateEnrollment {
    fn from(patch: EnrollmentPatch) -> Self {
        Self {
            student_id: patch.student,
            course_id: patch.course,
            grade: patch.grade,
            status: patch.status,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EnrollmentQuery {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub status: Option<EnrollmentStatus>,
}

impl From<EnrollmentQuery> for EnrollmentFilter {
    fn from(q: EnrollmentQuery) -> Self {
        Self {
            student_id: q.student_id,
            course_id: q.course_id,
            status: q.status,
        }
    }
}
