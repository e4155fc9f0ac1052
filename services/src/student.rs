use crate::service::{clean_optional, parse_date, AppError, ApplyChanges, Service, ToActiveModel};
use db::models::{
    enrollment,
    student::{ActiveModel, Column, Entity, Model, StudentStatus},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

pub use db::models::student::Model as Student;

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateStudent {
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

    pub date_of_birth: Option<String>,

    pub enrollment_date: String,

    /// Defaults to `active`.
    pub status: Option<StudentStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStudent {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub date_of_birth: Option<Option<String>>,
    pub enrollment_date: Option<String>,
    pub status: Option<StudentStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub status: Option<StudentStatus>,
    pub query: Option<String>,
}

impl StudentFilter {
    /// Students that may be offered for new enrollments.
    pub fn active() -> Self {
        Self {
            status: Some(StudentStatus::Active),
            query: None,
        }
    }
}

impl From<&Model> for CreateStudent {
    fn from(model: &Model) -> Self {
        Self {
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            email: model.email.clone(),
            phone: model.phone.clone(),
            date_of_birth: model.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
            enrollment_date: model.enrollment_date.format("%Y-%m-%d").to_string(),
            status: Some(model.status),
        }
    }
}

impl ToActiveModel<Entity> for CreateStudent {
    fn normalize(&mut self) {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
    }

    fn write_into(self, active: &mut ActiveModel) -> Result<(), AppError> {
        let date_of_birth = clean_optional(self.date_of_birth)
            .map(|d| parse_date("date_of_birth", &d))
            .transpose()?;
        let enrollment_date = parse_date("enrollment_date", &self.enrollment_date)?;

        active.first_name = Set(self.first_name);
        active.last_name = Set(self.last_name);
        active.email = Set(self.email);
        active.phone = Set(clean_optional(self.phone));
        active.date_of_birth = Set(date_of_birth);
        active.enrollment_date = Set(enrollment_date);
        active.status = Set(self.status.unwrap_or_default());
        Ok(())
    }
}

impl ApplyChanges<CreateStudent> for UpdateStudent {
    fn apply(self, fields: &mut CreateStudent) {
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
        if let Some(date_of_birth) = self.date_of_birth {
            fields.date_of_birth = date_of_birth;
        }
        if let Some(enrollment_date) = self.enrollment_date {
            fields.enrollment_date = enrollment_date;
        }
        if let Some(status) = self.status {
            fields.status = Some(status);
        }
    }
}

#[derive(Clone)]
pub struct StudentService {
    db: DatabaseConnection,
}

impl StudentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrollments held by student `id`, newest first.
    pub async fn enrollments(&self, id: i64) -> Result<Vec<enrollment::Model>, AppError> {
        let student = self.get(id).await?;
        Ok(student.enrollments(&self.db).await?)
    }
}

impl Service for StudentService {
    type Model = Model;
    type Filter = StudentFilter;
    type Create = CreateStudent;
    type Update = UpdateStudent;

    async fn list(&self, filter: StudentFilter) -> Result<Vec<Model>, AppError> {
        let mut query = Entity::find_ordered();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status));
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
            .ok_or_else(|| AppError::not_found("Student", id))
    }

    async fn create(&self, params: CreateStudent) -> Result<Model, AppError> {
        let student = params.into_active_model()?.insert(&self.db).await?;
        info!(student_id = student.id, email = %student.email, "created student");
        Ok(student)
    }

    async fn update(&self, id: i64, params: UpdateStudent) -> Result<Model, AppError> {
        let existing = self.get(id).await?;

        let mut fields = CreateStudent::from(&existing);
        params.apply(&mut fields);
        fields.check()?;

        let mut active: ActiveModel = existing.into();
        fields.write_into(&mut active)?;
        let student = active.update(&self.db).await?;

        info!(student_id = student.id, status = %student.status, "updated student");
        Ok(student)
    }

    /// Removes the student together with every enrollment they hold.
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Student", id))?;

        let removed = enrollment::Entity::delete_many()
            .filter(enrollment::Column::StudentId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;

        Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(student_id = id, enrollments_removed = removed, "deleted student");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseService;
    use crate::enrollment::EnrollmentService;
    use crate::fixtures::{new_course, new_enrollment, new_student};
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn status_defaults_to_active() {
        let db = setup_test_db().await;
        let service = StudentService::new(db);

        let student = service.create(new_student("Sam", "Lee", "s@x.com")).await.unwrap();
        assert_eq!(student.status, StudentStatus::Active);
        assert_eq!(student.date_of_birth, None);
        assert_eq!(student.enrollment_date.to_string(), "2024-01-01");
    }

    #[tokio::test]
    async fn invalid_email_and_dates_are_rejected() {
        let db = setup_test_db().await;
        let service = StudentService::new(db);

        let err = service
            .create(new_student("Sam", "Lee", "not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("email")));

        let err = service
            .create(CreateStudent {
                date_of_birth: Some("2001-13-40".into()),
                ..new_student("Sam", "Lee", "s@x.com")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("date_of_birth")));
    }

    #[tokio::test]
    async fn update_changes_status_and_clears_birth_date() {
        let db = setup_test_db().await;
        let service = StudentService::new(db);
        let student = service
            .create(CreateStudent {
                date_of_birth: Some("2005-06-01".into()),
                ..new_student("Sam", "Lee", "s@x.com")
            })
            .await
            .unwrap();

        let updated = service
            .update(
                student.id,
                UpdateStudent {
                    status: Some(StudentStatus::Graduated),
                    date_of_birth: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, StudentStatus::Graduated);
        assert_eq!(updated.date_of_birth, None);
        assert_eq!(updated.email, "s@x.com");
    }

    #[tokio::test]
    async fn update_with_taken_email_fails() {
        let db = setup_test_db().await;
        let service = StudentService::new(db);
        service.create(new_student("A", "A", "a@x.com")).await.unwrap();
        let b = service.create(new_student("B", "B", "b@x.com")).await.unwrap();

        let err = service
            .update(
                b.id,
                UpdateStudent {
                    email: Some("a@x.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation { ref field, .. } if field == "email"));
        assert_eq!(service.get(b.id).await.unwrap().email, "b@x.com");
    }

    #[tokio::test]
    async fn deleting_student_removes_only_their_enrollments() {
        let db = setup_test_db().await;
        let students = StudentService::new(db.clone());
        let courses = CourseService::new(db.clone());
        let enrollments = EnrollmentService::new(db);

        let s1 = students.create(new_student("A", "A", "a@x.com")).await.unwrap();
        let s2 = students.create(new_student("B", "B", "b@x.com")).await.unwrap();
        let c = courses.create(new_course("CS101", "Intro")).await.unwrap();
        enrollments.create(new_enrollment(s1.id, c.id)).await.unwrap();
        let kept = enrollments.create(new_enrollment(s2.id, c.id)).await.unwrap();

        assert_eq!(students.enrollments(s1.id).await.unwrap().len(), 1);

        students.delete(s1.id).await.unwrap();

        let remaining = courses.enrollments(c.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
        assert!(matches!(students.enrollments(s1.id).await, Err(AppError::NotFound(_))));
        assert!(courses.get(c.id).await.is_ok());
    }

    #[tokio::test]
    async fn list_filters_by_status_and_query() {
        let db = setup_test_db().await;
        let service = StudentService::new(db);

        service.create(new_student("Ann", "Zulu", "ann@x.com")).await.unwrap();
        service
            .create(CreateStudent {
                status: Some(StudentStatus::Inactive),
                ..new_student("Ben", "Young", "ben@x.com")
            })
            .await
            .unwrap();

        let active = service.list(StudentFilter::active()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].first_name, "Ann");

        let found = service
            .list(StudentFilter {
                query: Some("ben@".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "Young");

        let all = service.list(StudentFilter::default()).await.unwrap();
        assert_eq!(all[0].last_name, "Young");
    }

    #[tokio::test]
    async fn whitespace_names_are_rejected() {
        let db = setup_test_db().await;
        let service = StudentService::new(db);

        let err = service.create(new_student("   ", "  ", "s@x.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(msg) if msg.contains("name must be 1 to 100")));
        assert!(service.list(StudentFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn padded_email_is_accepted_and_trimmed() {
        let db = setup_test_db().await;
        let service = StudentService::new(db);

        let student = service.create(new_student("Sam", "Lee", " sam@x.com ")).await.unwrap();

        assert_eq!(student.email, "sam@x.com");
    }
}
