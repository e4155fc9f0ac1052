//! Student pages under `/students/`.

use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use db::models::student::StudentStatus;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use services::{
    enrollment::{EnrollmentFilter, EnrollmentService},
    service::{AppError, Service},
    student::{CreateStudent, Student, StudentFilter, StudentService, UpdateStudent},
};
use tracing::info;
use util::state::AppState;

use super::render::{self, escape, input, link, or_dash, select};
use crate::response::status_for;

pub fn student_pages() -> Router<AppState> {
    Router::new()
        .route("/students/", get(list))
        .route("/students/create/", get(create_form).post(create))
        .route("/students/{id}/", get(detail))
        .route("/students/{id}/update/", get(update_form).post(update))
        .route("/students/{id}/delete/", get(delete_confirm).post(delete))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub enrollment_date: String,
    pub status: String,
}

impl From<&Student> for StudentForm {
    fn from(s: &Student) -> Self {
        Self {
            first_name: s.first_name.clone(),
            last_name: s.last_name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone().unwrap_or_default(),
            date_of_birth: s.date_of_birth.map(|d| d.to_string()).unwrap_or_default(),
            enrollment_date: s.enrollment_date.to_string(),
            status: s.status.to_string(),
        }
    }
}

impl StudentForm {
    /// Blank status means `active`.
    fn status(&self) -> Result<StudentStatus, AppError> {
        Ok(render::parse_optional("status", &self.status)?.unwrap_or_default())
    }

    fn to_create(&self) -> Result<CreateStudent, AppError> {
        Ok(CreateStudent {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: Some(self.phone.clone()),
            date_of_birth: Some(self.date_of_birth.clone()),
            enrollment_date: self.enrollment_date.clone(),
            status: Some(self.status()?),
        })
    }

    fn to_update(&self) -> Result<UpdateStudent, AppError> {
        Ok(UpdateStudent {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            phone: Some(Some(self.phone.clone())),
            date_of_birth: Some(Some(self.date_of_birth.clone())),
            enrollment_date: Some(self.enrollment_date.clone()),
            status: Some(self.status()?),
        })
    }
}

fn status_options() -> Vec<(String, String)> {
    [
        (StudentStatus::Active, "Active"),
        (StudentStatus::Inactive, "Inactive"),
        (StudentStatus::Graduated, "Graduated"),
    ]
    .into_iter()
    .map(|(status, label)| (status.to_string(), label.to_string()))
    .collect()
}

fn form_body(action: &str, form: &StudentForm, error: Option<&str>, submit: &str) -> String {
    let status = if form.status.is_empty() {
        StudentStatus::default().to_string()
    } else {
        form.status.clone()
    };
    let fields = [
        input("First name", "first_name", "text", &form.first_name, true),
        input("Last name", "last_name", "text", &form.last_name, true),
        input("Email", "email", "email", &form.email, true),
        input("Phone", "phone", "text", &form.phone, false),
        input("Date of birth", "date_of_birth", "date", &form.date_of_birth, false),
        input("Enrollment date", "enrollment_date", "date", &form.enrollment_date, true),
        select("Status", "status", &status_options(), &status),
    ];
    format!(
        "{}\n{}\n<p>{}</p>",
        render::alert(error),
        render::form(action, &fields, submit),
        link("/students/", "Back to students")
    )
}

async fn list(State(app_state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, flash) = render::take_flash(jar);
    let service = StudentService::new(app_state.db_clone());

    let students = match service.list(StudentFilter::default()).await {
        Ok(students) => students,
        Err(e) => return render::error_page(&e),
    };

    let rows = students
        .iter()
        .map(|s| {
            vec![
                link(&format!("/students/{}/", s.id), &s.to_string()),
                escape(&s.email),
                s.status.to_string(),
                s.enrollment_date.to_string(),
                format!(
                    "{} {}",
                    link(&format!("/students/{}/update/", s.id), "Edit"),
                    link(&format!("/students/{}/delete/", s.id), "Delete")
                ),
            ]
        })
        .collect();

    let body = format!(
        "{}\n<p>{}</p>\n{}",
        render::notice(flash.as_deref()),
        link("/students/create/", "Add student"),
        render::table(
            &["Name", "Email", "Status", "Enrolled", ""],
            rows,
            "No students yet."
        )
    );
    (jar, render::page(StatusCode::OK, "Students", &body)).into_response()
}

async fn create_form() -> Response {
    let body = form_body("/students/create/", &StudentForm::default(), None, "Create");
    render::page(StatusCode::OK, "Add Student", &body)
}

async fn create(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<StudentForm>,
) -> Response {
    let service = StudentService::new(app_state.db_clone());

    let result = match form.to_create() {
        Ok(params) => service.create(params).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(student) => {
            info!(student_id = student.id, "Student {student} created from page");
            let message = format!("Student {student} created successfully!");
            render::redirect_with_flash(jar, "/students/", message)
        }
        Err(e) => {
            let body = form_body("/students/create/", &form, Some(&e.to_string()), "Create");
            render::page(status_for(&e), "Add Student", &body)
        }
    }
}

async fn detail(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = StudentService::new(app_state.db_clone());
    let enrollments = EnrollmentService::new(app_state.db_clone());

    let student = match service.get(id).await {
        Ok(student) => student,
        Err(e) => return render::error_page(&e),
    };
    let filter = EnrollmentFilter {
        student_id: Some(id),
        ..Default::default()
    };
    let details = match enrollments.list_detailed(filter).await {
        Ok(details) => details,
        Err(e) => return render::error_page(&e),
    };

    let rows = details
        .iter()
        .map(|d| {
            vec![
                link(&format!("/courses/{}/", d.course.id), &d.course.to_string()),
                d.enrollment.enrollment_date.to_string(),
                d.enrollment
                    .grade
                    .map(|g| format!("{g:.2}"))
                    .unwrap_or_else(|| "-".into()),
                link(
                    &format!("/enrollments/{}/", d.enrollment.id),
                    &d.enrollment.status.to_string(),
                ),
            ]
        })
        .collect();

    let body = format!(
        "<dl>\n<dt>Email</dt><dd>{}</dd>\n<dt>Phone</dt><dd>{}</dd>\n\
<dt>Date of birth</dt><dd>{}</dd>\n<dt>Enrollment date</dt><dd>{}</dd>\n\
<dt>Status</dt><dd>{}</dd>\n</dl>\n<h2>Enrollments</h2>\n{}\n<p>{} {} {}</p>",
        escape(&student.email),
        or_dash(student.phone.as_deref()),
        or_dash(student.date_of_birth.map(|d| d.to_string()).as_deref()),
        student.enrollment_date,
        student.status,
        render::table(
            &["Course", "Enrolled", "Grade", "Status"],
            rows,
            "Not enrolled in any courses."
        ),
        link(&format!("/students/{id}/update/"), "Edit"),
        link(&format!("/students/{id}/delete/"), "Delete"),
        link("/students/", "Back to students"),
    );
    render::page(StatusCode::OK, &student.to_string(), &body)
}

async fn update_form(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = StudentService::new(app_state.db_clone());

    match service.get(id).await {
        Ok(student) => {
            let action = format!("/students/{id}/update/");
            let body = form_body(&action, &StudentForm::from(&student), None, "Save");
            render::page(StatusCode::OK, "Edit Student", &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<StudentForm>,
) -> Response {
    let service = StudentService::new(app_state.db_clone());

    let result = match form.to_update() {
        Ok(params) => service.update(id, params).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(student) => {
            info!(student_id = student.id, "Student {student} updated from page");
            let message = format!("Student {student} updated successfully!");
            render::redirect_with_flash(jar, "/students/", message)
        }
        Err(e @ AppError::NotFound(_)) => render::error_page(&e),
        Err(e) => {
            let action = format!("/students/{id}/update/");
            let body = form_body(&action, &form, Some(&e.to_string()), "Save");
            render::page(status_for(&e), "Edit Student", &body)
        }
    }
}

async fn delete_confirm(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = StudentService::new(app_state.db_clone());

    match service.get(id).await {
        Ok(student) => {
            let body = render::confirm_delete(
                &student.to_string(),
                &format!("/students/{id}/delete/"),
                &format!("/students/{id}/"),
            );
            render::page(StatusCode::OK, "Delete Student", &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn delete(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let service = StudentService::new(app_state.db_clone());

    let student = match service.get(id).await {
        Ok(student) => student,
        Err(e) => return render::error_page(&e),
    };

    match service.delete(id).await {
        Ok(()) => {
            let message = format!("Student {student} deleted successfully!");
            render::redirect_with_flash(jar, "/students/", message)
        }
        Err(e) => render::error_page(&e),
    }
}
