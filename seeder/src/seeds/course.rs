use crate::seed::Seeder;
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::DatabaseConnection;
use services::course::{CourseService, CreateCourse};
use services::service::{AppError, Service};
use services::teacher::{TeacherFilter, TeacherService};

pub struct CourseSeeder;

const CATALOGUE: [(&str, &str); 10] = [
    ("CS101", "Introduction to Programming"),
    ("CS201", "Data Structures"),
    ("CS301", "Operating Systems"),
    ("CS340", "Databases"),
    ("MATH110", "Calculus I"),
    ("MATH220", "Linear Algebra"),
    ("STAT200", "Probability"),
    ("PHYS101", "Classical Mechanics"),
    ("PHYS210", "Optics"),
    ("HIST150", "Modern World History"),
];

const SEMESTERS: [&str; 3] = ["Fall 2025", "Spring 2026", "Summer 2026"];

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let teachers = TeacherService::new(db.clone())
            .list(TeacherFilter::default())
            .await?;
        let service = CourseService::new(db.clone());
        let mut rng = StdRng::from_entropy();

        for (code, name) in CATALOGUE {
            // Roughly one course in five is left unassigned
            let teacher_id = if rng.gen_bool(0.8) {
                teachers.choose(&mut rng).map(|t| t.id)
            } else {
                None
            };

            service
                .create(CreateCourse {
                    course_name: name.to_string(),
                    course_code: code.to_string(),
                    teacher_id,
                    description: Some(Sentence(6..12).fake()),
                    credits: *[2, 3, 4].choose(&mut rng).unwrap_or(&3),
                    max_capacity: Some(rng.gen_range(15..=60)),
                    semester: SEMESTERS.choose(&mut rng).map(|s| s.to_string()),
                })
                .await?;
        }

        Ok(())
    }
}
