// Event payload: CourseAddedV1.
//
// Records that a course joined the catalogue. The fee is a snapshot and is
// never validated for sign.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct CourseAddedV1 {
    pub course_id: String,
    pub name: String,
    pub fee: f64,
}
