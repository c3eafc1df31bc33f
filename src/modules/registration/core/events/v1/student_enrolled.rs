// Event payload: StudentEnrolledV1.
//
// `fee` is the course fee at enrollment time; evolve adds exactly this amount
// to the student balance.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct StudentEnrolledV1 {
    pub student_id: String,
    pub course_id: String,
    pub fee: f64,
}
