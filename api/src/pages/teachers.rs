//! Teacher pages under `/teachers/`.

use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use services::{
    service::{AppError, Service},
    teacher::{CreateTeacher, Teacher, TeacherFilter, TeacherService, UpdateTeacher},
};
use tracing::info;
use util::state::AppState;

use super::render::{self, escape, input, link, or_dash};
use crate::response::status_for;

pub fn teacher_pages() -> Router<AppState> {
    Router::new()
        .route("/teachers/", get(list))
        .route("/teachers/create/", get(create_form).post(create))
        .route("/teachers/{id}/", get(detail))
        .route("/teachers/{id}/update/", get(update_form).post(update))
        .route("/teachers/{id}/delete/", get(delete_confirm).post(delete))
}

/// Submitted form fields, kept as text so a failed submit can be shown again as typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeacherForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub specialization: String,
    pub hire_date: String,
}

impl From<&Teacher> for TeacherForm {
    fn from(t: &Teacher) -> Self {
        Self {
            first_name: t.first_name.clone(),
            last_name: t.last_name.clone(),
            email: t.email.clone(),
            phone: t.phone.clone().unwrap_or_default(),
            department: t.department.clone().unwrap_or_default(),
            specialization: t.specialization.clone().unwrap_or_default(),
            hire_date: t.hire_date.to_string(),
        }
    }
}

impl From<TeacherForm> for CreateTeacher {
    fn from(f: TeacherForm) -> Self {
        Self {
            first_name: f.first_name,
            last_name: f.last_name,
            email: f.email,
            phone: Some(f.phone),
            department: Some(f.department),
            specialization: Some(f.specialization),
            hire_date: f.hire_date,
        }
    }
}

/// The page form always carries every field, so an update replaces them all.
impl From<TeacherForm> for UpdateTeacher {
    fn from(f: TeacherForm) -> Self {
        Self {
            first_name: Some(f.first_name),
            last_name: Some(f.last_name),
            email: Some(f.email),
            phone: Some(Some(f.phone)),
            department: Some(Some(f.department)),
            specialization: Some(Some(f.specialization)),
            hire_date: Some(f.hire_date),
        }
    }
}

fn form_body(action: &str, form: &TeacherForm, error: Option<&str>, submit: &str) -> String {
    let fields = [
        input("First name", "first_name", "text", &form.first_name, true),
        input("Last name", "last_name", "text", &form.last_name, true),
        input("Email", "email", "email", &form.email, true),
        input("Phone", "phone", "text", &form.phone, false),
        input("Department", "department", "text", &form.department, false),
        input("Specialization", "specialization", "text", &form.specialization, false),
        input("Hire date", "hire_date", "date", &form.hire_date, true),
    ];
    format!(
        "{}\n{}\n<p>{}</p>",
        render::alert(error),
        render::form(action, &fields, submit),
        link("/teachers/", "Back to teachers")
    )
}

async fn list(State(app_state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, flash) = render::take_flash(jar);
    let service = TeacherService::new(app_state.db_clone());

    let teachers = match service.list(TeacherFilter::default()).await {
        Ok(teachers) => teachers,
        Err(e) => return render::error_page(&e),
    };

    let rows = teachers
        .iter()
        .map(|t| {
            vec![
                link(&format!("/teachers/{}/", t.id), &t.to_string()),
                escape(&t.email),
                or_dash(t.department.as_deref()),
                t.hire_date.to_string(),
                format!(
                    "{} {}",
                    link(&format!("/teachers/{}/update/", t.id), "Edit"),
                    link(&format!("/teachers/{}/delete/", t.id), "Delete")
                ),
            ]
        })
        .collect();

    let body = format!(
        "{}\n<p>{}</p>\n{}",
        render::notice(flash.as_deref()),
        link("/teachers/create/", "Add teacher"),
        render::table(
            &["Name", "Email", "Department", "Hired", ""],
            rows,
            "No teachers yet."
        )
    );
    (jar, render::page(StatusCode::OK, "Teachers", &body)).into_response()
}

async fn create_form() -> Response {
    let body = form_body("/teachers/create/", &TeacherForm::default(), None, "Create");
    render::page(StatusCode::OK, "Add Teacher", &body)
}

async fn create(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<TeacherForm>,
) -> Response {
    let service = TeacherService::new(app_state.db_clone());

    match service.create(form.clone().into()).await {
        Ok(teacher) => {
            info!(teacher_id = teacher.id, "Teacher {teacher} created from page");
            let message = format!("Teacher {teacher} created successfully!");
            render::redirect_with_flash(jar, "/teachers/", message)
        }
        Err(e) => {
            let body = form_body("/teachers/create/", &form, Some(&e.to_string()), "Create");
            render::page(status_for(&e), "Add Teacher", &body)
        }
    }
}

async fn detail(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = TeacherService::new(app_state.db_clone());

    let teacher = match service.get(id).await {
        Ok(teacher) => teacher,
        Err(e) => return render::error_page(&e),
    };
    let courses = match service.courses(id).await {
        Ok(courses) => courses,
        Err(e) => return render::error_page(&e),
    };

    let rows = courses
        .iter()
        .map(|c| {
            vec![
                link(&format!("/courses/{}/", c.id), &c.to_string()),
                c.credits.to_string(),
                or_dash(c.semester.as_deref()),
            ]
        })
        .collect();

    let body = format!(
        "<dl>\n<dt>Email</dt><dd>{}</dd>\n<dt>Phone</dt><dd>{}</dd>\n\
<dt>Department</dt><dd>{}</dd>\n<dt>Specialization</dt><dd>{}</dd>\n\
<dt>Hire date</dt><dd>{}</dd>\n</dl>\n<h2>Courses</h2>\n{}\n<p>{} {} {}</p>",
        escape(&teacher.email),
        or_dash(teacher.phone.as_deref()),
        or_dash(teacher.department.as_deref()),
        or_dash(teacher.specialization.as_deref()),
        teacher.hire_date,
        render::table(&["Course", "Credits", "Semester"], rows, "Not teaching any courses."),
        link(&format!("/teachers/{id}/update/"), "Edit"),
        link(&format!("/teachers/{id}/delete/"), "Delete"),
        link("/teachers/", "Back to teachers"),
    );
    render::page(StatusCode::OK, &teacher.to_string(), &body)
}

async fn update_form(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = TeacherService::new(app_state.db_clone());

    match service.get(id).await {
        Ok(teacher) => {
            let action = format!("/teachers/{id}/update/");
            let body = form_body(&action, &TeacherForm::from(&teacher), None, "Save");
            render::page(StatusCode::OK, "Edit Teacher", &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<TeacherForm>,
) -> Response {
    let service = TeacherService::new(app_state.db_clone());

    match service.update(id, form.clone().into()).await {
        Ok(teacher) => {
            info!(teacher_id = teacher.id, "Teacher {teacher} updated from page");
            let message = format!("Teacher {teacher} updated successfully!");
            render::redirect_with_flash(jar, "/teachers/", message)
        }
        Err(e @ AppError::NotFound(_)) => render::error_page(&e),
        Err(e) => {
            let action = format!("/teachers/{id}/update/");
            let body = form_body(&action, &form, Some(&e.to_string()), "Save");
            render::page(status_for(&e), "Edit Teacher", &body)
        }
    }
}

async fn delete_confirm(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = TeacherService::new(app_state.db_clone());

    match service.get(id).await {
        Ok(teacher) => {
            let body = render::confirm_delete(
                &teacher.to_string(),
                &format!("/teachers/{id}/delete/"),
                &format!("/teachers/{id}/"),
            );
            render::page(StatusCode::OK, "Delete Teacher", &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn delete(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let service = TeacherService::new(app_state.db_clone());

    let teacher = match service.get(id).await {
        Ok(teacher) => teacher,
        Err(e) => return render::error_page(&e),
    };

    match service.delete(id).await {
        Ok(()) => {
            let message = format!("Teacher {teacher} deleted successfully!");
            render::redirect_with_flash(jar, "/teachers/", message)
        }
        Err(e) => render::error_page(&e),
    }
}
