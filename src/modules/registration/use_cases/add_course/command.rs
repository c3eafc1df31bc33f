// Command data type for adding a course to the catalogue.

#[derive(Debug, Clone, PartialEq)]
pub struct AddCourse {
    pub course_id: String,
    pub name: String,
    pub fee: f64,
}
