use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Course,
    Student,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Course => f.write_str("course"),
            Entity::Student => f.write_str("student"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistrationError {
    #[error("{entity} ID already exists: {id}")]
    DuplicateKey { entity: Entity, id: String },

    #[error("{entity} ID not found: {id}")]
    NotFound { entity: Entity, id: String },

    #[error("student {student_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled {
        student_id: String,
        course_id: String,
    },

    #[error(
        "payment of {payment:.2} is below the minimum of {minimum:.2} on the outstanding balance"
    )]
    InsufficientPayment { payment: f64, minimum: f64 },
}

impl RegistrationError {
    pub fn course_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: Entity::Course,
            id: id.to_string(),
        }
    }

    pub fn student_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: Entity::Student,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod registration_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        RegistrationError::DuplicateKey { entity: Entity::Course, id: "CS101".into() },
        "course ID already exists: CS101"
    )]
    #[case(RegistrationError::student_not_found("S9"), "student ID not found: S9")]
    #[case(
        RegistrationError::AlreadyEnrolled { student_id: "S1".into(), course_id: "CS101".into() },
        "student S1 is already enrolled in course CS101"
    )]
    #[case(
        RegistrationError::InsufficientPayment { payment: 150.0, minimum: 200.0 },
        "payment of 150.00 is below the minimum of 200.00 on the outstanding balance"
    )]
    #[case(
        RegistrationError::InsufficientPayment { payment: 1.0, minimum: 0.4 * 333.3 },
        "payment of 1.00 is below the minimum of 133.32 on the outstanding balance"
    )]
    fn it_should_render_a_readable_message(
        #[case] error: RegistrationError,
        #[case] expected: &str,
    ) {
        assert_eq!(error.to_string(), expected);
    }
}
