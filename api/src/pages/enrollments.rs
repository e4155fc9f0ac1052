//! Enrollment pages under `/enrollments/`.

use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use db::models::enrollment::EnrollmentStatus;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use services::{
    enrollment::{
        CreateEnrollment, EnrollmentDetail, EnrollmentFilter, EnrollmentFormOptions,
        EnrollmentService, UpdateEnrollment,
    },
    service::{AppError, Service},
};
use tracing::info;
use util::state::AppState;

use super::render::{self, input, link, parse_optional, parse_required, select};
use crate::response::status_for;

pub fn enrollment_pages() -> Router<AppState> {
    Router::new()
        .route("/enrollments/", get(list))
        .route("/enrollments/create/", get(create_form).post(create))
        .route("/enrollments/{id}/", get(detail))
        .route("/enrollments/{id}/update/", get(update_form).post(update))
        .route("/enrollments/{id}/delete/", get(delete_confirm).post(delete))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnrollForm {
    pub student_id: String,
    pub course_id: String,
    pub grade: String,
    pub status: String,
}

impl EnrollForm {
    fn to_create(&self) -> Result<CreateEnrollment, AppError> {
        Ok(CreateEnrollment {
            student_id: parse_required("student_id", &self.student_id)?,
            course_id: parse_required("course_id", &self.course_id)?,
            grade: parse_optional("grade", &self.grade)?,
            status: parse_optional("status", &self.status)?,
        })
    }
}

/// Only status and grade can be changed from the page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnrollmentEditForm {
    pub grade: String,
    pub status: String,
}

impl EnrollmentEditForm {
    fn to_update(&self) -> Result<UpdateEnrollment, AppError> {
        Ok(UpdateEnrollment {
            grade: Some(parse_optional("grade", &self.grade)?),
            status: Some(parse_optional("status", &self.status)?.unwrap_or_default()),
            ..Default::default()
        })
    }
}

fn status_options() -> Vec<(String, String)> {
    [
        (EnrollmentStatus::Enrolled, "Enrolled"),
        (EnrollmentStatus::Completed, "Completed"),
        (EnrollmentStatus::Dropped, "Dropped"),
        (EnrollmentStatus::Failed, "Failed"),
    ]
    .into_iter()
    .map(|(status, label)| (status.to_string(), label.to_string()))
    .collect()
}

fn selected_status(value: &str) -> String {
    if value.is_empty() {
        EnrollmentStatus::default().to_string()
    } else {
        value.to_string()
    }
}

fn format_grade(grade: Option<f64>) -> String {
    grade.map(|g| format!("{g:.2}")).unwrap_or_else(|| "-".into())
}

fn create_body(options: &EnrollmentFormOptions, form: &EnrollForm, error: Option<&str>) -> String {
    let mut students = vec![(String::new(), "---------".to_string())];
    students.extend(
        options
            .students
            .iter()
            .map(|s| (s.id.to_string(), format!("{s} ({})", s.email))),
    );
    let mut courses = vec![(String::new(), "---------".to_string())];
    courses.extend(options.courses.iter().map(|c| (c.id.to_string(), c.to_string())));

    let fields = [
        select("Student", "student_id", &students, &form.student_id),
        select("Course", "course_id", &courses, &form.course_id),
        select("Status", "status", &status_options(), &selected_status(&form.status)),
        input("Grade", "grade", "number", &form.grade, false),
    ];
    format!(
        "{}\n{}\n<p>{}</p>",
        render::alert(error),
        render::form("/enrollments/create/", &fields, "Enroll"),
        link("/enrollments/", "Back to enrollments")
    )
}

fn edit_body(detail: &EnrollmentDetail, form: &EnrollmentEditForm, error: Option<&str>) -> String {
    let fields = [
        select("Status", "status", &status_options(), &selected_status(&form.status)),
        input("Grade", "grade", "number", &form.grade, false),
    ];
    format!(
        "{}\n<p>{}</p>\n{}\n<p>{}</p>",
        render::alert(error),
        render::escape(&detail.to_string()),
        render::form(
            &format!("/enrollments/{}/update/", detail.enrollment.id),
            &fields,
            "Save"
        ),
        link("/enrollments/", "Back to enrollments")
    )
}

/// Names both sides of a duplicate when they are among the offered choices.
fn describe_error(err: &AppError, options: &EnrollmentFormOptions) -> String {
    if let AppError::DuplicateEnrollment {
        student_id,
        course_id,
    } = err
    {
        let student = options.students.iter().find(|s| s.id == *student_id);
        let course = options.courses.iter().find(|c| c.id == *course_id);
        if let (Some(student), Some(course)) = (student, course) {
            return format!("{student} is already enrolled in {course}!");
        }
    }
    err.to_string()
}

async fn list(State(app_state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, flash) = render::take_flash(jar);
    let service = EnrollmentService::new(app_state.db_clone());

    let details = match service.list_detailed(EnrollmentFilter::default()).await {
        Ok(details) => details,
        Err(e) => return render::error_page(&e),
    };

    let rows = details
        .iter()
        .map(|d| {
            vec![
                link(&format!("/students/{}/", d.student.id), &d.student.to_string()),
                link(&format!("/courses/{}/", d.course.id), &d.course.to_string()),
                d.enrollment.enrollment_date.to_string(),
                format_grade(d.enrollment.grade),
                d.enrollment.status.to_string(),
                format!(
                    "{} {} {}",
                    link(&format!("/enrollments/{}/", d.enrollment.id), "View"),
                    link(&format!("/enrollments/{}/update/", d.enrollment.id), "Edit"),
                    link(&format!("/enrollments/{}/delete/", d.enrollment.id), "Delete")
                ),
            ]
        })
        .collect();

    let body = format!(
        "{}\n<p>{}</p>\n{}",
        render::notice(flash.as_deref()),
        link("/enrollments/create/", "Enroll a student"),
        render::table(
            &["Student", "Course", "Enrolled", "Grade", "Status", ""],
            rows,
            "No enrollments yet."
        )
    );
    (jar, render::page(StatusCode::OK, "Enrollments", &body)).into_response()
}

async fn create_form(State(app_state): State<AppState>) -> Response {
    let service = EnrollmentService::new(app_state.db_clone());

    match service.form_options().await {
        Ok(options) => {
            let body = create_body(&options, &EnrollForm::default(), None);
            render::page(StatusCode::OK, "Enroll Student", &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn create(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<EnrollForm>,
) -> Response {
    let service = EnrollmentService::new(app_state.db_clone());

    let result = match form.to_create() {
        Ok(params) => service.create(params).await,
        Err(e) => Err(e),
    };

    let err = match result {
        Ok(enrollment) => {
            info!(enrollment_id = enrollment.id, "Enrollment created from page");
            let message = match service.get_detailed(enrollment.id).await {
                Ok(detail) => format!("{detail} successfully!"),
                Err(_) => "Enrollment created successfully!".to_string(),
            };
            return render::redirect_with_flash(jar, "/enrollments/", message);
        }
        Err(e) => e,
    };

    match service.form_options().await {
        Ok(options) => {
            let message = describe_error(&err, &options);
            let body = create_body(&options, &form, Some(&message));
            render::page(status_for(&err), "Enroll Student", &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn detail(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = EnrollmentService::new(app_state.db_clone());

    let detail = match service.get_detailed(id).await {
        Ok(detail) => detail,
        Err(e) => return render::error_page(&e),
    };

    let body = format!(
        "<dl>\n<dt>Student</dt><dd>{}</dd>\n<dt>Course</dt><dd>{}</dd>\n\
<dt>Enrollment date</dt><dd>{}</dd>\n<dt>Grade</dt><dd>{}</dd>\n\
<dt>Status</dt><dd>{}</dd>\n</dl>\n<p>{} {} {}</p>",
        link(&format!("/students/{}/", detail.student.id), &detail.student.to_string()),
        link(&format!("/courses/{}/", detail.course.id), &detail.course.to_string()),
        detail.enrollment.enrollment_date,
        format_grade(detail.enrollment.grade),
        detail.enrollment.status,
        link(&format!("/enrollments/{id}/update/"), "Edit"),
        link(&format!("/enrollments/{id}/delete/"), "Delete"),
        link("/enrollments/", "Back to enrollments"),
    );
    render::page(StatusCode::OK, "Enrollment", &body)
}

async fn update_form(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = EnrollmentService::new(app_state.db_clone());

    match service.get_detailed(id).await {
        Ok(detail) => {
            let form = EnrollmentEditForm {
                grade: detail.enrollment.grade.map(|g| g.to_string()).unwrap_or_default(),
                status: detail.enrollment.status.to_string(),
            };
            render::page(StatusCode::OK, "Edit Enrollment", &edit_body(&detail, &form, None))
        }
        Err(e) => render::error_page(&e),
    }
}

async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<EnrollmentEditForm>,
) -> Response {
    let service = EnrollmentService::new(app_state.db_clone());

    let detail = match service.get_detailed(id).await {
        Ok(detail) => detail,
        Err(e) => return render::error_page(&e),
    };

    let result = match form.to_update() {
        Ok(params) => service.update(id, params).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(enrollment) => {
            info!(enrollment_id = enrollment.id, status = %enrollment.status, "Enrollment updated from page");
            let message = "Enrollment updated successfully!".to_string();
            render::redirect_with_flash(jar, "/enrollments/", message)
        }
        Err(e) => {
            let body = edit_body(&detail, &form, Some(&e.to_string()));
            render::page(status_for(&e), "Edit Enrollment", &body)
        }
    }
}

async fn delete_confirm(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = EnrollmentService::new(app_state.db_clone());

    match service.get_detailed(id).await {
        Ok(detail) => {
            let body = render::confirm_delete(
                &detail.to_string(),
                &format!("/enrollments/{id}/delete/"),
                &format!("/enrollments/{id}/"),
            );
            render::page(StatusCode::OK, "Delete Enrollment", &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn delete(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let service = EnrollmentService::new(app_state.db_clone());

    let detail = match service.get_detailed(id).await {
        Ok(detail) => detail,
        Err(e) => return render::error_page(&e),
    };

    match service.delete(id).await {
        Ok(()) => {
            let message = format!("Enrollment \"{detail}\" deleted successfully!");
            render::redirect_with_flash(jar, "/enrollments/", message)
        }
        Err(e) => render::error_page(&e),
    }
}
