// Shared test fixture for the AddCourse command.

use crate::modules::registration::use_cases::add_course::command::AddCourse;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AddCourseDto {
    pub course_id: String,
    pub name: String,
    pub fee: f64,
}

pub struct AddCourseBuilder {
    inner: AddCourse,
}

impl Default for AddCourseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddCourseBuilder {
    pub fn new() -> Self {
        let dto: AddCourseDto = serde_json::from_str(include_str!("json/add_course.json"))
            .expect("add_course.json is not a valid AddCourse fixture");
        Self {
            inner: AddCourse {
                course_id: dto.course_id,
                name: dto.name,
                fee: dto.fee,
            },
        }
    }

    pub fn course_id(mut self, v: impl Into<String>) -> Self {
        self.inner.course_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn fee(mut self, v: f64) -> Self {
        self.inner.fee = v;
        self
    }

    pub fn build(self) -> AddCourse {
        self.inner
    }
}
