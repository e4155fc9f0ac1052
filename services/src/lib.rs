pub mod course;
pub mod enrollment;
pub mod service;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod fixtures;
