use crate::service::{clean_optional, AppError, ApplyChanges, Service, ToActiveModel};
use db::models::{
    course::{ActiveModel, Column, Entity, Model, DEFAULT_MAX_CAPACITY},
    enrollment, teacher,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::info;
use validator::Validate;

pub use db::models::course::Model as Course;

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateCourse {
    #[validate(length(min = 1, max = 150, message = "Course name must be 1 to 150 characters"))]
    pub course_name: String,

    #[validate(length(min = 1, max = 20, message = "Course code must be 1 to 20 characters"))]
    pub course_code: String,

    pub teacher_id: Option<i64>,

    pub description: Option<String>,

    /// Must be at least 1.
    pub credits: i32,

    #[validate(range(min = 0, message = "Max capacity cannot be negative"))]
    pub max_capacity: Option<i32>,

    #[validate(length(max = 50, message = "Semester must be at most 50 characters"))]
    pub semester: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCourse {
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub teacher_id: Option<Option<i64>>,
    pub description: Option<Option<String>>,
    pub credits: Option<i32>,
    pub max_capacity: Option<i32>,
    pub semester: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    /// Substring of course name or code.
    pub query: Option<String>,
}

impl From<&Model> for CreateCourse {
    fn from(model: &Model) -> Self {
        Self {
            course_name: model.course_name.clone(),
            course_code: model.course_code.clone(),
            teacher_id: model.teacher_id,
            description: model.description.clone(),
            credits: model.credits,
            max_capacity: Some(model.max_capacity),
            semester: model.semester.clone(),
        }
    }
}

impl ToActiveModel<Entity> for CreateCourse {
    fn normalize(&mut self) {
        self.course_name = self.course_name.trim().to_string();
        self.course_code = self.course_code.trim().to_string();
    }

    fn write_into(self, active: &mut ActiveModel) -> Result<(), AppError> {
        if self.credits < 1 {
            return Err(AppError::constraint("credits", "range"));
        }

        active.course_name = Set(self.course_name);
        active.course_code = Set(self.course_code);
        active.teacher_id = Set(self.teacher_id);
        active.description = Set(clean_optional(self.description));
        active.credits = Set(self.credits);
        active.max_capacity = Set(self.max_capacity.unwrap_or(DEFAULT_MAX_CAPACITY));
        active.semester = Set(clean_optional(self.semester));
        Ok(())
    }
}

impl ApplyChanges<CreateCourse> for UpdateCourse {
    fn apply(self, fields: &mut CreateCourse) {
        if let Some(course_name) = self.course_name {
            fields.course_name = course_name;
        }
        if let Some(course_code) = self.course_code {
            fields.course_code = course_code;
        }
        if let Some(teacher_id) = self.teacher_id {
            fields.teacher_id = teacher_id;
        }
        if let Some(description) = self.description {
            fields.description = description;
        }
        if let Some(credits) = self.credits {
            fields.credits = credits;
        }
        if let Some(max_capacity) = self.max_capacity {
            fields.max_capacity = Some(max_capacity);
        }
        if let Some(semester) = self.semester {
            fields.semester = semester;
        }
    }
}

/// Fails with `NotFound` unless `teacher_id` is absent or names an existing teacher.
async fn resolve_teacher<C>(db: &C, teacher_id: Option<i64>) -> Result<(), AppError>
where
    C: ConnectionTrait,
{
    if let Some(id) = teacher_id {
        teacher::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Teacher", id))?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct CourseService {
    db: DatabaseConnection,
}

impl CourseService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrollments in course `id`, newest first.
    pub async fn enrollments(&self, id: i64) -> Result<Vec<enrollment::Model>, AppError> {
        let course = self.get(id).await?;
        Ok(course.enrollments(&self.db).await?)
    }
}

impl Service for CourseService {
    type Model = Model;
    type Filter = CourseFilter;
    type Create = CreateCourse;
    type Update = UpdateCourse;

    async fn list(&self, filter: CourseFilter) -> Result<Vec<Model>, AppError> {
        let mut query = Entity::find_ordered();

        if let Some(teacher_id) = filter.teacher_id {
            query = query.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(semester) = clean_optional(filter.semester) {
            query = query.filter(Column::Semester.eq(semester));
        }
        if let Some(q) = clean_optional(filter.query) {
            query = query.filter(
                Condition::any()
                    .add(Column::CourseName.contains(&q))
                    .add(Column::CourseCode.contains(&q)),
            );
        }

        Ok(query.all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Model, AppError> {
        Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Course", id))
    }

    async fn create(&self, params: CreateCourse) -> Result<Model, AppError> {
        let teacher_id = params.teacher_id;
        let active = params.into_active_model()?;

        let txn = self.db.begin().await?;
        resolve_teacher(&txn, teacher_id).await?;
        let course = active.insert(&txn).await?;
        txn.commit().await?;

        info!(course_id = course.id, code = %course.course_code, "created course");
        Ok(course)
    }

    async fn update(&self, id: i64, params: UpdateCourse) -> Result<Model, AppError> {
        let txn = self.db.begin().await?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Course", id))?;

        let mut fields = CreateCourse::from(&existing);
        params.apply(&mut fields);
        fields.check()?;
        resolve_teacher(&txn, fields.teacher_id).await?;

        let mut active: ActiveModel = existing.into();
        fields.write_into(&mut active)?;
        let course = active.update(&txn).await?;
        txn.commit().await?;

        info!(course_id = course.id, teacher_id = ?course.teacher_id, "updated course");
        Ok(course)
    }

    /// Removes the course together with every enrollment in it.
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Course", id))?;

        let removed = enrollment::Entity::delete_many()
            .filter(enrollment::Column::CourseId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;

        Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(course_id = id, enrollments_removed = removed, "deleted course");
        Ok(())
    }
}
