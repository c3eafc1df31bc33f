// Event payload: StudentRegisteredV1.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct StudentRegisteredV1 {
    pub student_id: String,
    pub name: String,
    pub email: String,
}
