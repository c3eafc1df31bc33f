// Pure decision function for enrollment.
//
// Responsibilities
// - Resolve the student first, then the course.
// - Reject a second enrollment of the same student in the same course.
// - Carry the course fee on the event so evolve can charge it.

use crate::modules::registration::core::errors::RegistrationError;
use crate::modules::registration::core::events::RegistrationEvent;
use crate::modules::registration::core::events::v1::student_enrolled::StudentEnrolledV1;
use crate::modules::registration::core::state::RegistryState;
use crate::modules::registration::use_cases::enroll_in_course::command::EnrollInCourse;

pub fn decide_enroll(
    state: &RegistryState,
    command: EnrollInCourse,
) -> Result<Vec<RegistrationEvent>, RegistrationError> {
    let student = state
        .student(&command.student_id)
        .ok_or_else(|| RegistrationError::student_not_found(&command.student_id))?;
    let course = state
        .course(&command.course_id)
        .ok_or_else(|| RegistrationError::course_not_found(&command.course_id))?;

    if student.is_enrolled_in(&course.course_id) {
        return Err(RegistrationError::AlreadyEnrolled {
            student_id: command.student_id,
            course_id: command.course_id,
        });
    }

    Ok(vec![RegistrationEvent::StudentEnrolledV1(StudentEnrolledV1 {
        student_id: command.student_id,
        course_id: command.course_id,
        fee: course.fee,
    })])
}
