pub mod course;
pub mod enrollment;
pub mod student;
pub mod teacher;

pub use course::Entity as Course;
pub use enrollment::Entity as Enrollment;
pub use student::Entity as Student;
pub use teacher::Entity as Teacher;
