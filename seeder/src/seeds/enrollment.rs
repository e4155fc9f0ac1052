use crate::seed::Seeder;
use db::models::enrollment::EnrollmentStatus;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::DatabaseConnection;
use services::course::{CourseFilter, CourseService};
use services::enrollment::{CreateEnrollment, EnrollmentService};
use services::service::{AppError, Service};
use services::student::{StudentFilter, StudentService};

pub struct EnrollmentSeeder;

#[async_trait::async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let students = StudentService::new(db.clone())
            .list(StudentFilter::active())
            .await?;
        let courses = CourseService::new(db.clone())
            .list(CourseFilter::default())
            .await?;
        let service = EnrollmentService::new(db.clone());
        let mut rng = StdRng::from_entropy();

        for student in &students {
            let count = rng.gen_range(1..=4).min(courses.len());
            for course in courses.choose_multiple(&mut rng, count) {
                let (status, grade) = match rng.gen_range(0..6) {
                    0 => (EnrollmentStatus::Completed, Some(rng.gen_range(50.0..=100.0))),
                    1 => (EnrollmentStatus::Failed, Some(rng.gen_range(0.0..50.0))),
                    2 => (EnrollmentStatus::Dropped, None),
                    _ => (EnrollmentStatus::Enrolled, None),
                };

                service
                    .create(CreateEnrollment {
                        student_id: student.id,
                        course_id: course.id,
                        grade,
                        status: Some(status),
                    })
                    .await?;
            }
        }

        Ok(())
    }
}
