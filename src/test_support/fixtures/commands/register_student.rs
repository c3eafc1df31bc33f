// Shared test fixture for the RegisterStudent command.

use crate::modules::registration::use_cases::register_student::command::RegisterStudent;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterStudentDto {
    pub student_id: String,
    pub name: String,
    pub email: String,
}

pub struct RegisterStudentBuilder {
    inner: RegisterStudent,
}

impl Default for RegisterStudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterStudentBuilder {
    pub fn new() -> Self {
        let dto: RegisterStudentDto =
            serde_json::from_str(include_str!("json/register_student.json"))
                .expect("register_student.json is not a valid RegisterStudent fixture");
        Self {
            inner: RegisterStudent {
                student_id: dto.student_id,
                name: dto.name,
                email: dto.email,
            },
        }
    }

    pub fn student_id(mut self, v: impl Into<String>) -> Self {
        self.inner.student_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> RegisterStudent {
        self.inner
    }
}
