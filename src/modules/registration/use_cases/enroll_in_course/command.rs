// Command data type for enrolling a student in a course.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollInCourse {
    pub student_id: String,
    pub course_id: String,
}
