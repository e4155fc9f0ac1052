use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::Serialize;
use std::fmt;

use super::course;

/// A member of staff who may teach any number of courses.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all teachers.
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub hire_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Courses taught by this teacher. Deleting the teacher nulls the reference.
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl Entity {
    /// Base query in the default listing order: last name, then first name.
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

    /// Courses referencing this teacher, ordered by course code.
    pub async fn courses<C>(&self, db: &C) -> Result<Vec<course::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.find_related(course::Entity)
            .order_by_asc(course::Column::CourseCode)
            .all(db)
            .await
    }
}
