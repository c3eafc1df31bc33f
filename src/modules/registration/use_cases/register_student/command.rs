// Command data type for registering a student.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterStudent {
    pub student_id: String,
    pub name: String,
    pub email: String,
}
