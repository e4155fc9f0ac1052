use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

use super::enrollment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub enrollment_date: Date,
    pub status: StudentStatus,
}

/// Lifecycle state of a student. Only `Active` students are offered for new enrollments.
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "student_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StudentStatus {
    #[default]
    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "inactive")]
    Inactive,

    #[sea_orm(string_value = "graduated")]
    Graduated,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Removed together with the student.
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl Entity {
    pub fn find_ordered() -> Select<Entity> {
        Entity::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::Id)
    }
}

impl Model {
    pub async fn find_by_email<C>(db: &C, email: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    /// This student's enrollments, newest first.
    pub async fn enrollments<C>(&self, db: &C) -> Result<Vec<enrollment::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        enrollment::Entity::find_ordered()
            .filter(enrollment::Column::StudentId.eq(self.id))
            .all(db)
            .await
    }
}
