use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::Serialize;
use std::fmt;

use super::enrollment;

/// Capacity assigned when none is given.
pub const DEFAULT_MAX_CAPACITY: i32 = 30;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_name: String,
    #[sea_orm(unique)]
    pub course_code: String,
    /// Teacher who runs the course, if any. Not an ownership link.
    pub teacher_id: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// At least 1, enforced by a CHECK constraint.
    pub credits: i32,
    pub max_capacity: i32,
    pub semester: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_delete = "SetNull"
    )]
    Teacher,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.course_code, self.course_name)
    }
}

impl Entity {
    pub fn find_ordered() -> Select<Entity> {
        Entity::find()
            .order_by_asc(Column::CourseCode)
            .order_by_asc(Column::Id)
    }
}

impl Model {
    pub async fn find_by_code<C>(db: &C, course_code: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::CourseCode.eq(course_code))
            .one(db)
            .await
    }

    pub async fn enrollments<C>(&self, db: &C) -> Result<Vec<enrollment::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        enrollment::Entity::find_ordered()
            .filter(enrollment::Column::CourseId.eq(self.id))
            .all(db)
            .await
    }
}
