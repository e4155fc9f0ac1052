use crate::seed::Seeder;
use crate::seeds::{email_for, random_date, random_phone};
use db::models::student::StudentStatus;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;
use services::service::{AppError, Service};
use services::student::{CreateStudent, StudentService};

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let service = StudentService::new(db.clone());
        let mut rng = StdRng::from_entropy();

        for n in 0..30 {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            // Mostly active, with a few of each other status
            let status = match rng.gen_range(0..10) {
                0 => StudentStatus::Inactive,
                1 => StudentStatus::Graduated,
                _ => StudentStatus::Active,
            };

            service
                .create(CreateStudent {
                    email: email_for(&first, &last, n, "students.school.example"),
                    first_name: first,
                    last_name: last,
                    phone: rng.gen_bool(0.7).then(|| random_phone(&mut rng)),
                    date_of_birth: Some(random_date(&mut rng, 1998..=2007)),
                    enrollment_date: random_date(&mut rng, 2020..=2025),
                    status: Some(status),
                })
                .await?;
        }

        Ok(())
    }
}
