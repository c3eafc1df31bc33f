// Root event enumeration for the registration ledger.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - Do not change the meaning of historical events.

pub mod v1 {
    pub mod course_added;
    pub mod payment_accepted;
    pub mod student_enrolled;
    pub mod student_registered;
}

use v1::course_added::CourseAddedV1;
use v1::payment_accepted::PaymentAcceptedV1;
use v1::student_enrolled::StudentEnrolledV1;
use v1::student_registered::StudentRegisteredV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RegistrationEvent {
    CourseAddedV1(CourseAddedV1),
    StudentRegisteredV1(StudentRegisteredV1),
    StudentEnrolledV1(StudentEnrolledV1),
    PaymentAcceptedV1(PaymentAcceptedV1),
}

impl RegistrationEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            RegistrationEvent::CourseAddedV1(_) => "CourseAdded",
            RegistrationEvent::StudentRegisteredV1(_) => "StudentRegistered",
            RegistrationEvent::StudentEnrolledV1(_) => "StudentEnrolled",
            RegistrationEvent::PaymentAcceptedV1(_) => "PaymentAccepted",
        }
    }
}
