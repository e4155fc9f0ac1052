use crate::service::{AppError, ApplyChanges, Service, ToActiveModel};
use chrono::Utc;
use db::models::{
    course,
    enrollment::{ActiveModel, Column, Entity, EnrollmentStatus, Model},
    student::{self, StudentStatus},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, QueryFilter, Set, TransactionTrait,
};
use std::fmt;
use tracing::{info, warn};
use validator::Validate;

pub use db::models::enrollment::Model as Enrollment;

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateEnrollment {
    pub student_id: i64,
    pub course_id: i64,
    /// Percentage in `0.0..=100.0`; stored with two decimals.
    pub grade: Option<f64>,
    /// Defaults to `enrolled`.
    pub status: Option<EnrollmentStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEnrollment {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub grade: Option<Option<f64>>,
    pub status: Option<EnrollmentStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct EnrollmentFilter {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub status: Option<EnrollmentStatus>,
}

/// An enrollment together with the student and course it joins.
#[derive(Debug, Clone)]
pub struct EnrollmentDetail {
    pub enrollment: Model,
    pub student: student::Model,
    pub course: course::Model,
}

impl fmt::Display for EnrollmentDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} enrolled in {}", self.student, self.course)
    }
}

/// Choices offered by the enroll form.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentFormOptions {
    pub students: Vec<student::Model>,
    pub courses: Vec<course::Model>,
}

impl From<&Model> for CreateEnrollment {
    fn from(model: &Model) -> Self {
        Self {
            student_id: model.student_id,
            course_id: model.course_id,
            grade: model.grade,
            status: Some(model.status),
        }
    }
}

impl ToActiveModel<Entity> for CreateEnrollment {
    fn write_into(self, active: &mut ActiveModel) -> Result<(), AppError> {
        let grade = match self.grade {
            Some(g) if !g.is_finite() || !(0.0..=100.0).contains(&g) => {
                return Err(AppError::constraint("grade", "range"));
            }
            Some(g) => Some((g * 100.0).round() / 100.0),
            None => None,
        };

        active.student_id = Set(self.student_id);
        active.course_id = Set(self.course_id);
        active.grade = Set(grade);
        active.status = Set(self.status.unwrap_or_default());
        Ok(())
    }
}

impl ApplyChanges<CreateEnrollment> for UpdateEnrollment {
    fn apply(self, fields: &mut CreateEnrollment) {
        if let Some(student_id) = self.student_id {
            fields.student_id = student_id;
        }
        if let Some(course_id) = self.course_id {
            fields.course_id = course_id;
        }
        if let Some(grade) = self.grade {
            fields.grade = grade;
        }
        if let Some(status) = self.status {
            fields.status = Some(status);
        }
    }
}

/// Loads both sides of the pair, failing with `NotFound` for whichever is missing.
async fn resolve_pair<C>(
    db: &C,
    student_id: i64,
    course_id: i64,
) -> Result<(student::Model, course::Model), AppError>
where
    C: ConnectionTrait,
{
    let student = student::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Student", student_id))?;
    let course = course::Entity::find_by_id(course_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Course", course_id))?;
    Ok((student, course))
}

/// Surfaces a violation of the `(student_id, course_id)` index as a duplicate enrollment.
fn classify_write_error(err: DbErr, student_id: i64, course_id: i64) -> AppError {
    match AppError::from(err) {
        AppError::ConstraintViolation { field, rule }
            if rule == "unique" && field.contains("student_id") =>
        {
            warn!(student_id, course_id, "duplicate enrollment caught by unique index");
            AppError::DuplicateEnrollment {
                student_id,
                course_id,
            }
        }
        other => other,
    }
}

#[derive(Clone)]
pub struct EnrollmentService {
    db: DatabaseConnection,
}

impl EnrollmentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Same selection and order as `list`, with the student and course attached.
    pub async fn list_detailed(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<Vec<EnrollmentDetail>, AppError> {
        let enrollments = self.list(filter).await?;
        let students = enrollments.load_one(student::Entity, &self.db).await?;
        let courses = enrollments.load_one(course::Entity, &self.db).await?;

        Ok(enrollments
            .into_iter()
            .zip(students)
            .zip(courses)
            .filter_map(|((enrollment, student), course)| {
                Some(EnrollmentDetail {
                    enrollment,
                    student: student?,
                    course: course?,
                })
            })
            .collect())
    }

    pub async fn get_detailed(&self, id: i64) -> Result<EnrollmentDetail, AppError> {
        let enrollment = self.get(id).await?;
        let (student, course) =
            resolve_pair(&self.db, enrollment.student_id, enrollment.course_id).await?;
        Ok(EnrollmentDetail {
            enrollment,
            student,
            course,
        })
    }

    /// Active students and every course.
    pub async fn form_options(&self) -> Result<EnrollmentFormOptions, AppError> {
        let students = student::Entity::find_ordered()
            .filter(student::Column::Status.eq(StudentStatus::Active))
            .all(&self.db)
            .await?;
        let courses = course::Entity::find_ordered().all(&self.db).await?;
        Ok(EnrollmentFormOptions { students, courses })
    }
}

impl Service for EnrollmentService {
    type Model = Model;
    type Filter = EnrollmentFilter;
    type Create = CreateEnrollment;
    type Update = UpdateEnrollment;

    async fn list(&self, filter: EnrollmentFilter) -> Result<Vec<Model>, AppError> {
        let mut query = Entity::find_ordered();

        if let Some(student_id) = filter.student_id {
            query = query.filter(Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = filter.course_id {
            query = query.filter(Column::CourseId.eq(course_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status));
        }

        Ok(query.all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Model, AppError> {
        Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Enrollment", id))
    }

    async fn create(&self, params: CreateEnrollment) -> Result<Model, AppError> {
        let (student_id, course_id) = (params.student_id, params.course_id);
        let mut active = params.into_active_model()?;
        active.enrollment_date = Set(Utc::now().date_naive());

        let txn = self.db.begin().await?;
        let (student, course) = resolve_pair(&txn, student_id, course_id).await?;

        if Model::exists_for(&txn, student_id, course_id, None).await? {
            return Err(AppError::DuplicateEnrollment {
                student_id,
                course_id,
            });
        }

        let enrollment = active
            .insert(&txn)
            .await
            .map_err(|e| classify_write_error(e, student_id, course_id))?;
        txn.commit().await?;

        info!(enrollment_id = enrollment.id, "{student} enrolled in {course}");
        Ok(enrollment)
    }

    /// `enrollment_date` is never rewritten.
    async fn update(&self, id: i64, params: UpdateEnrollment) -> Result<Model, AppError> {
        let txn = self.db.begin().await?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Enrollment", id))?;

        let mut fields = CreateEnrollment::from(&existing);
        params.apply(&mut fields);
        fields.check()?;

        let (student_id, course_id) = (fields.student_id, fields.course_id);
        resolve_pair(&txn, student_id, course_id).await?;

        if Model::exists_for(&txn, student_id, course_id, Some(id)).await? {
            return Err(AppError::DuplicateEnrollment {
                student_id,
                course_id,
            });
        }

        let mut active: ActiveModel = existing.into();
        fields.write_into(&mut active)?;
        let enrollment = active
            .update(&txn)
            .await
            .map_err(|e| classify_write_error(e, student_id, course_id))?;
        txn.commit().await?;

        info!(enrollment_id = enrollment.id, status = %enrollment.status, "updated enrollment");
        Ok(enrollment)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found("Enrollment", id));
        }

        info!(enrollment_id = id, "deleted enrollment");
        Ok(())
    }
}
