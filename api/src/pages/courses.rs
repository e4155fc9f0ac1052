//! Course pages under `/courses/`.

use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use db::models::course::DEFAULT_MAX_CAPACITY;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use services::{
    course::{Course, CourseFilter, CourseService, CreateCourse, UpdateCourse},
    enrollment::{EnrollmentFilter, EnrollmentService},
    service::{AppError, Service},
    teacher::{Teacher, TeacherFilter, TeacherService},
};
use tracing::info;
use util::state::AppState;

use super::render::{self, input, link, or_dash, parse_optional, parse_required, select};
use crate::response::status_for;

pub fn course_pages() -> Router<AppState> {
    Router::new()
        .route("/courses/", get(list))
        .route("/courses/create/", get(create_form).post(create))
        .route("/courses/{id}/", get(detail))
        .route("/courses/{id}/update/", get(update_form).post(update))
        .route("/courses/{id}/delete/", get(delete_confirm).post(delete))
}

/// An empty `teacher_id` leaves the course without a teacher.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseForm {
    pub course_name: String,
    pub course_code: String,
    pub teacher_id: String,
    pub description: String,
    pub credits: String,
    pub max_capacity: String,
    pub semester: String,
}

impl From<&Course> for CourseForm {
    fn from(c: &Course) -> Self {
        Self {
            course_name: c.course_name.clone(),
            course_code: c.course_code.clone(),
            teacher_id: c.teacher_id.map(|id| id.to_string()).unwrap_or_default(),
            description: c.description.clone().unwrap_or_default(),
            credits: c.credits.to_string(),
            max_capacity: c.max_capacity.to_string(),
            semester: c.semester.clone().unwrap_or_default(),
        }
    }
}

impl CourseForm {
    fn to_create(&self) -> Result<CreateCourse, AppError> {
        Ok(CreateCourse {
            course_name: self.course_name.clone(),
            course_code: self.course_code.clone(),
            teacher_id: parse_optional("teacher_id", &self.teacher_id)?,
            description: Some(self.description.clone()),
            credits: parse_required("credits", &self.credits)?,
            max_capacity: parse_optional("max_capacity", &self.max_capacity)?,
            semester: Some(self.semester.clone()),
        })
    }

    fn to_update(&self) -> Result<UpdateCourse, AppError> {
        let max_capacity: Option<i32> = parse_optional("max_capacity", &self.max_capacity)?;
        Ok(UpdateCourse {
            course_name: Some(self.course_name.clone()),
            course_code: Some(self.course_code.clone()),
            teacher_id: Some(parse_optional("teacher_id", &self.teacher_id)?),
            description: Some(Some(self.description.clone())),
            credits: Some(parse_required("credits", &self.credits)?),
            max_capacity: Some(max_capacity.unwrap_or(DEFAULT_MAX_CAPACITY)),
            semester: Some(Some(self.semester.clone())),
        })
    }
}

fn form_body(
    action: &str,
    form: &CourseForm,
    teachers: &[Teacher],
    error: Option<&str>,
    submit: &str,
) -> String {
    let mut teacher_options = vec![(String::new(), "---------".to_string())];
    teacher_options.extend(teachers.iter().map(|t| (t.id.to_string(), t.to_string())));

    let max_capacity = if form.max_capacity.is_empty() {
        DEFAULT_MAX_CAPACITY.to_string()
    } else {
        form.max_capacity.clone()
    };

    let fields = [
        input("Course name", "course_name", "text", &form.course_name, true),
        input("Course code", "course_code", "text", &form.course_code, true),
        select("Teacher", "teacher_id", &teacher_options, &form.teacher_id),
        render::textarea("Description", "description", &form.description),
        input("Credits", "credits", "number", &form.credits, true),
        input("Max capacity", "max_capacity", "number", &max_capacity, false),
        input("Semester", "semester", "text", &form.semester, false),
    ];
    format!(
        "{}\n{}\n<p>{}</p>",
        render::alert(error),
        render::form(action, &fields, submit),
        link("/courses/", "Back to courses")
    )
}

/// Renders the form again, reloading the teacher choices.
async fn form_page(
    app_state: &AppState,
    status: StatusCode,
    title: &str,
    action: &str,
    form: &CourseForm,
    error: Option<&str>,
    submit: &str,
) -> Response {
    let teachers = TeacherService::new(app_state.db_clone());
    match teachers.list(TeacherFilter::default()).await {
        Ok(teachers) => {
            let body = form_body(action, form, &teachers, error, submit);
            render::page(status, title, &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn list(State(app_state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, flash) = render::take_flash(jar);
    let service = CourseService::new(app_state.db_clone());
    let teacher_service = TeacherService::new(app_state.db_clone());

    let courses = match service.list(CourseFilter::default()).await {
        Ok(courses) => courses,
        Err(e) => return render::error_page(&e),
    };
    let teachers = match teacher_service.list(TeacherFilter::default()).await {
        Ok(teachers) => teachers,
        Err(e) => return render::error_page(&e),
    };

    let rows = courses
        .iter()
        .map(|c| {
            let teacher = c
                .teacher_id
                .and_then(|id| teachers.iter().find(|t| t.id == id))
                .map(|t| link(&format!("/teachers/{}/", t.id), &t.to_string()))
                .unwrap_or_else(|| "-".into());
            vec![
                link(&format!("/courses/{}/", c.id), &c.to_string()),
                teacher,
                c.credits.to_string(),
                or_dash(c.semester.as_deref()),
                format!(
                    "{} {}",
                    link(&format!("/courses/{}/update/", c.id), "Edit"),
                    link(&format!("/courses/{}/delete/", c.id), "Delete")
                ),
            ]
        })
        .collect();

    let body = format!(
        "{}\n<p>{}</p>\n{}",
        render::notice(flash.as_deref()),
        link("/courses/create/", "Add course"),
        render::table(
            &["Course", "Teacher", "Credits", "Semester", ""],
            rows,
            "No courses yet."
        )
    );
    (jar, render::page(StatusCode::OK, "Courses", &body)).into_response()
}

async fn create_form(State(app_state): State<AppState>) -> Response {
    form_page(
        &app_state,
        StatusCode::OK,
        "Add Course",
        "/courses/create/",
        &CourseForm::default(),
        None,
        "Create",
    )
    .await
}

async fn create(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CourseForm>,
) -> Response {
    let service = CourseService::new(app_state.db_clone());

    let result = match form.to_create() {
        Ok(params) => service.create(params).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(course) => {
            info!(course_id = course.id, "Course {course} created from page");
            let message = format!("Course {course} created successfully!");
            render::redirect_with_flash(jar, "/courses/", message)
        }
        Err(e) => {
            form_page(
                &app_state,
                status_for(&e),
                "Add Course",
                "/courses/create/",
                &form,
                Some(&e.to_string()),
                "Create",
            )
            .await
        }
    }
}

async fn detail(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = CourseService::new(app_state.db_clone());
    let enrollments = EnrollmentService::new(app_state.db_clone());

    let course = match service.get(id).await {
        Ok(course) => course,
        Err(e) => return render::error_page(&e),
    };
    let teacher = match course.teacher_id {
        Some(teacher_id) => match TeacherService::new(app_state.db_clone()).get(teacher_id).await {
            Ok(t) => link(&format!("/teachers/{}/", t.id), &t.to_string()),
            Err(e) => return render::error_page(&e),
        },
        None => "-".to_string(),
    };
    let filter = EnrollmentFilter {
        course_id: Some(id),
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
                link(&format!("/students/{}/", d.student.id), &d.student.to_string()),
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
        "<dl>\n<dt>Teacher</dt><dd>{}</dd>\n<dt>Description</dt><dd>{}</dd>\n\
<dt>Credits</dt><dd>{}</dd>\n<dt>Max capacity</dt><dd>{}</dd>\n\
<dt>Semester</dt><dd>{}</dd>\n</dl>\n<h2>Enrolled students ({})</h2>\n{}\n<p>{} {} {}</p>",
        teacher,
        or_dash(course.description.as_deref()),
        course.credits,
        course.max_capacity,
        or_dash(course.semester.as_deref()),
        details.len(),
        render::table(
            &["Student", "Enrolled", "Grade", "Status"],
            rows,
            "No students enrolled."
        ),
        link(&format!("/courses/{id}/update/"), "Edit"),
        link(&format!("/courses/{id}/delete/"), "Delete"),
        link("/courses/", "Back to courses"),
    );
    render::page(StatusCode::OK, &course.to_string(), &body)
}

async fn update_form(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = CourseService::new(app_state.db_clone());

    match service.get(id).await {
        Ok(course) => {
            form_page(
                &app_state,
                StatusCode::OK,
                "Edit Course",
                &format!("/courses/{id}/update/"),
                &CourseForm::from(&course),
                None,
                "Save",
            )
            .await
        }
        Err(e) => render::error_page(&e),
    }
}

async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<CourseForm>,
) -> Response {
    let service = CourseService::new(app_state.db_clone());

    let result = match form.to_update() {
        Ok(params) => service.update(id, params).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(course) => {
            info!(course_id = course.id, teacher_id = ?course.teacher_id, "Course {course} updated from page");
            let message = format!("Course {course} updated successfully!");
            render::redirect_with_flash(jar, "/courses/", message)
        }
        Err(e) => {
            form_page(
                &app_state,
                status_for(&e),
                "Edit Course",
                &format!("/courses/{id}/update/"),
                &form,
                Some(&e.to_string()),
                "Save",
            )
            .await
        }
    }
}

async fn delete_confirm(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    let service = CourseService::new(app_state.db_clone());

    match service.get(id).await {
        Ok(course) => {
            let body = render::confirm_delete(
                &course.to_string(),
                &format!("/courses/{id}/delete/"),
                &format!("/courses/{id}/"),
            );
            render::page(StatusCode::OK, "Delete Course", &body)
        }
        Err(e) => render::error_page(&e),
    }
}

async fn delete(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let service = CourseService::new(app_state.db_clone());

    let course = match service.get(id).await {
        Ok(course) => course,
        Err(e) => return render::error_page(&e),
    };

    match service.delete(id).await {
        Ok(()) => {
            let message = format!("Course {course} deleted successfully!");
            render::redirect_with_flash(jar, "/courses/", message)
        }
        Err(e) => render::error_page(&e),
    }
}
