//! Shared contract for the record services.
//!
//! Every entity gets a sub-service holding an injected `DatabaseConnection`.

use chrono::NaiveDate;
use common::format_validation_errors;
use sea_orm::{DbErr, EntityTrait, SqlErr};
use std::future::Future;
use thiserror::Error;
use validator::Validate;

/// Everything a record service can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness, range or reference rule was rejected by the store.
    #[error("{field} violates {rule} constraint")]
    ConstraintViolation { field: String, rule: String },

    /// The student already holds an enrollment for this course.
    #[error("Student {student_id} is already enrolled in course {course_id}")]
    DuplicateEnrollment { student_id: i64, course_id: i64 },

    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl AppError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        AppError::NotFound(format!("{entity} {id} not found"))
    }

    pub fn constraint(field: impl Into<String>, rule: impl Into<String>) -> Self {
        AppError::ConstraintViolation {
            field: field.into(),
            rule: rule.into(),
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(msg) = &err {
            return AppError::NotFound(msg.clone());
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                AppError::constraint(constraint_fields(&detail), "unique")
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                AppError::constraint(constraint_fields(&detail), "foreign key")
            }
            _ => {
                let text = err.to_string();
                match text.find("CHECK constraint failed") {
                    Some(at) => AppError::constraint(constraint_fields(&text[at..]), "range"),
                    None => AppError::Database(err),
                }
            }
        }
    }
}

/// Pulls column names out of a SQLite constraint message such as
/// `UNIQUE constraint failed: enrollments.student_id, enrollments.course_id`.
fn constraint_fields(detail: &str) -> String {
    let tail = match detail.find("failed:") {
        Some(at) => &detail[at + "failed:".len()..],
        None => detail,
    };

    tail.split(',')
        .filter_map(|part| {
            let token = part.split_whitespace().next()?;
            let column = token.trim_matches(|c| c == '"' || c == '`' || c == '(' || c == ')');
            let column = column.rsplit('.').next().unwrap_or(column);
            (!column.is_empty()).then(|| column.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs the `validator` rules of a field set and folds failures into `AppError::Validation`.
pub fn validate_fields<T: Validate>(fields: &T) -> Result<(), AppError> {
    fields
        .validate()
        .map_err(|e| AppError::Validation(format_validation_errors(&e)))
}

/// Parses a `YYYY-MM-DD` date, naming the offending field on failure.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "{field} must be a valid date in YYYY-MM-DD format"
        ))
    })
}

/// Trims a value and maps blank input to `None`.
pub fn clean_optional(value: Option<String>) -> Option<String> {
    common::non_empty(value)
}

/// A validated field set that can be written onto an entity's `ActiveModel`.
///
/// Creation writes onto an empty model; updates write onto the stored row, so both paths run
/// the same rules.
pub trait ToActiveModel<E>: Validate + Sized
where
    E: EntityTrait,
    E::ActiveModel: Default,
{
    /// Trims free-text fields in place so length rules see what will be stored.
    fn normalize(&mut self) {}

    /// Sets every column the field set owns. Server-managed columns are left alone.
    fn write_into(self, active: &mut E::ActiveModel) -> Result<(), AppError>;

    /// `normalize` followed by the `validator` rules.
    fn check(&mut self) -> Result<(), AppError> {
        self.normalize();
        validate_fields(&*self)
    }

    fn into_active_model(mut self) -> Result<E::ActiveModel, AppError> {
        self.check()?;
        let mut active = <E::ActiveModel as Default>::default();
        self.write_into(&mut active)?;
        Ok(active)
    }
}

/// A partial update: absent fields stay as they are, `Some(None)` clears an optional column.
pub trait ApplyChanges<F> {
    fn apply(self, fields: &mut F);
}

/// The five record operations every entity exposes.
pub trait Service: Send + Sync {
    type Model: Send;
    type Filter: Send;
    type Create: Send;
    type Update: Send;

    /// Records matching `filter`, in the entity's default order.
    fn list(
        &self,
        filter: Self::Filter,
    ) -> impl Future<Output = Result<Vec<Self::Model>, AppError>> + Send;

    /// Fails with `NotFound` when `id` is absent.
    fn get(&self, id: i64) -> impl Future<Output = Result<Self::Model, AppError>> + Send;

    fn create(
        &self,
        params: Self::Create,
    ) -> impl Future<Output = Result<Self::Model, AppError>> + Send;

    fn update(
        &self,
        id: i64,
        params: Self::Update,
    ) -> impl Future<Output = Result<Self::Model, AppError>> + Send;

    /// Applies the entity's cascade or null-out policy. Not idempotent.
    fn delete(&self, id: i64) -> impl Future<Output = Result<(), AppError>> + Send;
}
