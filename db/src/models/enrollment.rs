use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Join record between a student and a course.
///
/// `(student_id, course_id)` is unique. `enrollment_date` is written once on insert and never
/// touched again.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub enrollment_date: Date,
    /// Percentage in `0.0..=100.0`, two decimal places.
    pub grade: Option<f64>,
    pub status: EnrollmentStatus,
}

/// Informational only; no status triggers deletion.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "enrollment_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EnrollmentStatus {
    #[default]
    #[sea_orm(string_value = "enrolled")]
    Enrolled,

    #[sea_orm(string_value = "completed")]
    Completed,

    #[sea_orm(string_value = "dropped")]
    Dropped,

    #[sea_orm(string_value = "failed")]
    Failed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Newest enrollments first; ties fall back to the most recently inserted row.
    pub fn find_ordered() -> Select<Entity> {
        Entity::find()
            .order_by_desc(Column::EnrollmentDate)
            .order_by_desc(Column::Id)
    }
}

impl Model {
    /// Whether `student_id` is already enrolled in `course_id`, ignoring the row `exclude_id`.
    pub async fn exists_for<C>(
        db: &C,
        student_id: i64,
        course_id: i64,
        exclude_id: Option<i64>,
    ) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id));

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.count(db).await? > 0)
    }
}
