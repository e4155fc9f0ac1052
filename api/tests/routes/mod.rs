mod courses_test;
mod enrollments_test;
mod health_test;
mod students_test;
mod teachers_test;
