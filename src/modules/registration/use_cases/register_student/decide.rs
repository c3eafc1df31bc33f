use crate::modules::registration::core::errors::{Entity, RegistrationError};
use crate::modules::registration::core::events::RegistrationEvent;
use crate::modules::registration::core::events::v1::student_registered::StudentRegisteredV1;
use crate::modules::registration::core::state::RegistryState;
use crate::modules::registration::use_cases::register_student::command::RegisterStudent;

pub fn decide_register_student(
    state: &RegistryState,
    command: RegisterStudent,
) -> Result<Vec<RegistrationEvent>, RegistrationError> {
    if state.student(&command.student_id).is_some() {
        return Err(RegistrationError::DuplicateKey {
            entity: Entity::Student,
            id: command.student_id,
        });
    }
    Ok(vec![RegistrationEvent::StudentRegisteredV1(
        StudentRegisteredV1 {
            student_id: command.student_id,
            name: command.name,
            email: command.email,
        },
    )])
}
