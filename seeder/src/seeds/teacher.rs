use crate::seed::Seeder;
use crate::seeds::{email_for, random_date, random_phone};
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::rngs::StdRng;
use rand::{SeedableRng, seq::SliceRandom};
use sea_orm::DatabaseConnection;
use services::service::{AppError, Service};
use services::teacher::{CreateTeacher, TeacherService};

pub struct TeacherSeeder;

const DEPARTMENTS: [(&str, &[&str]); 4] = [
    ("Computer Science", &["Algorithms", "Databases", "Networks"]),
    ("Mathematics", &["Algebra", "Statistics"]),
    ("Physics", &["Mechanics", "Optics"]),
    ("History", &["Modern History", "Archaeology"]),
];

#[async_trait::async_trait]
impl Seeder for TeacherSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let service = TeacherService::new(db.clone());
        let mut rng = StdRng::from_entropy();

        // Fixed teacher for manual testing
        service
            .create(CreateTeacher {
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                email: "grace.hopper@school.example".into(),
                phone: None,
                department: Some("Computer Science".into()),
                specialization: Some("Compilers".into()),
                hire_date: "2015-09-01".into(),
            })
            .await?;

        for n in 0..8 {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            let (department, specializations) = DEPARTMENTS[n % DEPARTMENTS.len()];

            service
                .create(CreateTeacher {
                    email: email_for(&first, &last, n, "school.example"),
                    first_name: first,
                    last_name: last,
                    phone: Some(random_phone(&mut rng)),
                    department: Some(department.to_string()),
                    specialization: specializations.choose(&mut rng).map(|s| s.to_string()),
                    hire_date: random_date(&mut rng, 2005..=2024),
                })
                .await?;
        }

        Ok(())
    }
}
