// Read shapes returned by the registry queries.

use crate::modules::registration::core::state::{Course, Student};

#[derive(Debug, Clone, PartialEq)]
pub struct CourseView {
    pub course_id: String,
    pub name: String,
    pub fee: f64,
}

impl From<&Course> for CourseView {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.course_id.clone(),
            name: course.name.clone(),
            fee: course.fee,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentView {
    pub student_id: String,
    pub name: String,
    pub email: String,
}

impl From<&Student> for StudentView {
    fn from(student: &Student) -> Self {
        Self {
            student_id: student.student_id.clone(),
            name: student.name.clone(),
            email: student.email.clone(),
        }
    }
}
