// Evolve function: combine the registry state with a new event to produce the next state.
//
// Boundaries
// - No input or output. No side effects.
// - Events that do not apply to the current state leave it unchanged.

use crate::modules::registration::core::events::RegistrationEvent;
use crate::modules::registration::core::state::{Course, RegistryState, Student};

pub fn evolve(mut state: RegistryState, event: RegistrationEvent) -> RegistryState {
    match event {
        RegistrationEvent::CourseAddedV1(e) => {
            if state.course(&e.course_id).is_none() {
                state.push_course(Course {
                    course_id: e.course_id,
                    name: e.name,
                    fee: e.fee,
                });
            }
        }
        RegistrationEvent::StudentRegisteredV1(e) => {
            if state.student(&e.student_id).is_none() {
                state.push_student(Student::new(e.student_id, e.name, e.email));
            }
        }
        RegistrationEvent::StudentEnrolledV1(e) => {
            if let Some(student) = state.student_mut(&e.student_id) {
                if !student.is_enrolled_in(&e.course_id) {
                    student.courses.push(e.course_id);
                    student.balance += e.fee;
                }
            }
        }
        RegistrationEvent::PaymentAcceptedV1(e) => {
            if let Some(student) = state.student_mut(&e.student_id) {
                student.balance -= e.amount;
            }
        }
    }
    state
}
