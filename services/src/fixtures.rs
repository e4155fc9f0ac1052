//! Field sets shared by the service tests.

use crate::course::CreateCourse;
use crate::enrollment::CreateEnrollment;
use crate::student::CreateStudent;
use crate::teacher::CreateTeacher;

pub fn new_teacher(first: &str, last: &str, email: &str) -> CreateTeacher {
    CreateTeacher {
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
        hire_date: "2020-01-01".into(),
        ..Default::default()
    }
}

pub fn new_student(first: &str, last: &str, email: &str) -> CreateStudent {
    CreateStudent {
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
        enrollment_date: "2024-01-01".into(),
        ..Default::default()
    }
}

pub fn new_course(code: &str, name: &str) -> CreateCourse {
    CreateCourse {
        course_name: name.into(),
        course_code: code.into(),
        credits: 3,
        ..Default::default()
    }
}

pub fn new_enrollment(student_id: i64, course_id: i64) -> CreateEnrollment {
    CreateEnrollment {
        student_id,
        course_id,
        ..Default::default()
    }
}
