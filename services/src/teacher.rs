use crate::service::{clean_optional, parse_date, AppError, ApplyChanges, Service, ToActiveModel};
use db::models::{
    course,
    teacher::{ActiveModel, Column, Entity, Model},
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

pub use db::models::teacher::Model as Teacher;

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateTeacher {
    #[validate(length(min = 1, max = 100, message = "First name must be 1 to 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1 to 100 characters"))]
    pub last_name: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 150, message = "Email must be at most 150 characters")
    )]
    pub email: String,

    #[validate(length(max = 15, message = "Phone must be at most 15 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 100, message = "Department must be at most 100 characters"))]
    pub department: Option<String>,

    #[validate(length(max = 50, message = "Specialization must be at most 50 characters"))]
    pub specialization: Option<String>,

    /// `YYYY-MM-DD`.
    pub hire_date: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeacher {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub department: Option<Option<String>>,
    pub specialization: Option<Option<String>>,
    pub hire_date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TeacherFilter {
    pub department: Option<String>,
    /// Substring of first name, last name or email.
    pub query: Option<String>,
}

impl From<&Model> for CreateTeacher {
    fn from(model: &Model) -> Self {
        Self {
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            email: model.email.clone(),
            phone: model.phone.clone(),
            department: model.department.clone(),
            specialization: model.specialization.clone(),
            hire_date: model.hire_date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl ToActiveModel<Entity> for CreateTeacher {
    fn normalize(&mut self) {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
    }

    fn write_into(self, active: &mut ActiveModel) -> Result<(), AppError> {
        let hire_date = parse_date("hire_date", &self.hire_date)?;

        active.first_name = Set(self.first_name);
        active.last_name = Set(self.last_name);
        active.email = Set(self.email);
        active.phone = Set(clean_optional(self.phone));
        active.department = Set(clean_optional(self.department));
        active.specialization = Set(clean_optional(self.specialization));
        active.hire_date = Set(hire_date);
        Ok(())
    }
}

impl ApplyChanges<CreateTeacher> for UpdateTeacher {
    fn apply(self, fields: &mut CreateTeacher) {
        if let Some(first_name) = self.first_name {
            fields.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            fields.last_name = last_name;
        }
        if let Some(email) = self.email {
            fields.email = email;
        }
        if let Some(phone) = self.phone {
            fields.phone = phone;
        }
        if let Some(department) = self.department {
            fields.department = department;
        }
        if let Some(specialization) = self.specialization {
            fields.specialization = specialization;
        }
        if let Some(hire_date) = self.hire_date {
            fields.hire_date = hire_date;
        }
    }
}

#[derive(Clone)]
pub struct TeacherService {
    db: DatabaseConnection,
}

impl TeacherService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Courses taught by teacher `id`, by course code.
    pub async fn courses(&self, id: i64) -> Result<Vec<course::Model>, AppError> {
        let teacher = self.get(id).await?;
        Ok(teacher.courses(&self.db).await?)
    }
}

impl Service for TeacherService {
    type Model = Model;
    type Filter = TeacherFilter;
    type Create = CreateTeacher;
    type Update = UpdateTeacher;

    async fn list(&self, filter: TeacherFilter) -> Result<Vec<Model>, AppError> {
        let mut query = Entity::find_ordered();

        if let Some(department) = clean_optional(filter.department) {
            query = query.filter(Column::Department.eq(department));
        }
        if let Some(q) = clean_optional(filter.query) {
            query = query.filter(
                Condition::any()
                    .add(Column::FirstName.contains(&q))
                    .add(Column::LastName.contains(&q))
                    .add(Column::Email.contains(&q)),
            );
        }

        Ok(query.all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Model, AppError> {
        Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Teacher", id))
    }

    async fn create(&self, params: CreateTeacher) -> Result<Model, AppError> {
        let teacher = params.into_active_model()?.insert(&self.db).await?;
        info!(teacher_id = teacher.id, email = %teacher.email, "created teacher");
        Ok(teacher)
    }

    async fn update(&self, id: i64, params: UpdateTeacher) -> Result<Model, AppError> {
        let existing = self.get(id).await?;

        let mut fields = CreateTeacher::from(&existing);
        params.apply(&mut fields);
        fields.check()?;

        let mut active: ActiveModel = existing.into();
        fields.write_into(&mut active)?;
        let teacher = active.update(&self.db).await?;

        info!(teacher_id = teacher.id, "updated teacher");
        Ok(teacher)
    }

    /// Courses taught by the teacher survive with no teacher assigned.
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Teacher", id))?;

        let unassigned = course::Entity::update_many()
            .col_expr(course::Column::TeacherId, Expr::value(Option::<i64>::None))
            .filter(course::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;

        Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(teacher_id = id, courses_unassigned = unassigned, "deleted teacher");
        Ok(())
    }
}
