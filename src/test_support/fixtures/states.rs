// Canonical registry states for decider tests, built by folding events.

use crate::modules::registration::core::events::RegistrationEvent;
use crate::modules::registration::core::events::v1::course_added::CourseAddedV1;
use crate::modules::registration::core::events::v1::student_enrolled::StudentEnrolledV1;
use crate::modules::registration::core::events::v1::student_registered::StudentRegisteredV1;
use crate::modules::registration::core::evolve::evolve;
use crate::modules::registration::core::state::RegistryState;
use crate::test_support::fixtures::commands::add_course::AddCourseBuilder;
use crate::test_support::fixtures::commands::register_student::RegisterStudentBuilder;

/// CS101 (fee 500.0) in the catalogue and S1 (Alice) registered, not enrolled.
pub fn catalogue_with_one_student() -> RegistryState {
    let course = AddCourseBuilder::new().build();
    let student = RegisterStudentBuilder::new().build();
    [
        RegistrationEvent::CourseAddedV1(CourseAddedV1 {
            course_id: course.course_id,
            name: course.name,
            fee: course.fee,
        }),
        RegistrationEvent::StudentRegisteredV1(StudentRegisteredV1 {
            student_id: student.student_id,
            name: student.name,
            email: student.email,
        }),
    ]
    .into_iter()
    .fold(RegistryState::default(), evolve)
}

/// As `catalogue_with_one_student`, with S1 enrolled in CS101 and owing 500.0.
pub fn student_enrolled_in_cs101() -> RegistryState {
    evolve(
        catalogue_with_one_student(),
        RegistrationEvent::StudentEnrolledV1(StudentEnrolledV1 {
            student_id: "S1".into(),
            course_id: "CS101".into(),
            fee: 500.0,
        }),
    )
}
