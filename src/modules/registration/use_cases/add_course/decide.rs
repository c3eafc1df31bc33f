// Pure decision function for adding a course.
//
// Responsibilities
// - Reject a course id that is already in the catalogue.
// - Fee sign and name emptiness are left to the caller.

use crate::modules::registration::core::errors::{Entity, RegistrationError};
use crate::modules::registration::core::events::RegistrationEvent;
use crate::modules::registration::core::events::v1::course_added::CourseAddedV1;
use crate::modules::registration::core::state::RegistryState;
use crate::modules::registration::use_cases::add_course::command::AddCourse;

pub fn decide_add_course(
    state: &RegistryState,
    command: AddCourse,
) -> Result<Vec<RegistrationEvent>, RegistrationError> {
    if state.course(&command.course_id).is_some() {
        return Err(RegistrationError::DuplicateKey {
            entity: Entity::Course,
            id: command.course_id,
        });
    }
    Ok(vec![RegistrationEvent::CourseAddedV1(CourseAddedV1 {
        course_id: command.course_id,
        name: command.name,
        fee: command.fee,
    })])
}
