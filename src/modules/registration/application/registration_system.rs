// The registry: the only mutator of the course catalogue and the student roster.
//
// Responsibilities
// - Turn each operation into a command and run it through its decider.
// - Append accepted events to the journal with optimistic concurrency.
// - Fold appended events into the cached state with evolve.
// - Answer queries from the cached state.

use crate::modules::registration::application::errors::ApplicationError;
use crate::modules::registration::application::views::{CourseView, StudentView};
use crate::modules::registration::core::errors::RegistrationError;
use crate::modules::registration::core::events::RegistrationEvent;
use crate::modules::registration::core::evolve::evolve;
use crate::modules::registration::core::journal::JournalEntry;
use crate::modules::registration::core::policy::PaymentPolicy;
use crate::modules::registration::core::state::RegistryState;
use crate::modules::registration::use_cases::add_course::command::AddCourse;
use crate::modules::registration::use_cases::add_course::decide::decide_add_course;
use crate::modules::registration::use_cases::enroll_in_course::command::EnrollInCourse;
use crate::modules::registration::use_cases::enroll_in_course::decide::decide_enroll;
use crate::modules::registration::use_cases::make_payment::command::MakePayment;
use crate::modules::registration::use_cases::make_payment::decide::decide_payment;
use crate::modules::registration::use_cases::register_student::command::RegisterStudent;
use crate::modules::registration::use_cases::register_student::decide::decide_register_student;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use tracing::{debug, error, info, warn};

pub const REGISTRY_STREAM: &str = "registry";

pub struct RegistrationSystem<TStore = InMemoryEventStore<JournalEntry>>
where
    TStore: EventStore<JournalEntry>,
{
    store: TStore,
    state: RegistryState,
    version: i64,
    policy: PaymentPolicy,
}

impl RegistrationSystem {
    pub fn new() -> Self {
        Self {
            store: InMemoryEventStore::new(),
            state: RegistryState::default(),
            version: 0,
            policy: PaymentPolicy::default(),
        }
    }
}

impl Default for RegistrationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl<TStore> RegistrationSystem<TStore>
where
    TStore: EventStore<JournalEntry>,
{
    /// Build a registry over `store`, replaying whatever journal it already holds.
    /// The policy is not part of the journal, so the caller supplies it again.
    pub fn rehydrate(store: TStore, policy: PaymentPolicy) -> Result<Self, ApplicationError> {
        let stream = store.load(REGISTRY_STREAM)?;
        let state = stream
            .events
            .into_iter()
            .map(|entry| entry.event)
            .fold(RegistryState::default(), evolve);
        debug!(
            version = stream.version,
            minimum_ratio = policy.minimum_ratio,
            "registry rehydrated"
        );
        Ok(Self {
            store,
            state,
            version: stream.version,
            policy,
        })
    }

    pub fn with_policy(mut self, policy: PaymentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> PaymentPolicy {
        self.policy
    }

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    pub fn store_mut(&mut self) -> &mut TStore {
        &mut self.store
    }

    pub fn add_course(
        &mut self,
        course_id: impl Into<String>,
        name: impl Into<String>,
        fee: f64,
    ) -> Result<(), ApplicationError> {
        let command = AddCourse {
            course_id: course_id.into(),
            name: name.into(),
            fee,
        };
        let course_id = command.course_id.clone();
        let decision = decide_add_course(&self.state, command);
        self.commit("add_course", decision)?;
        info!(%course_id, fee, "course added");
        Ok(())
    }

    pub fn register_student(
        &mut self,
        student_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), ApplicationError> {
        let command = RegisterStudent {
            student_id: student_id.into(),
            name: name.into(),
            email: email.into(),
        };
        let student_id = command.student_id.clone();
        let decision = decide_register_student(&self.state, command);
        self.commit("register_student", decision)?;
        info!(%student_id, "student registered");
        Ok(())
    }

    pub fn enroll_in_course(
        &mut self,
        student_id: &str,
        course_id: &str,
    ) -> Result<(), ApplicationError> {
        let command = EnrollInCourse {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
        };
        let decision = decide_enroll(&self.state, command);
        self.commit("enroll_in_course", decision)?;
        info!(student_id, course_id, "student enrolled");
        Ok(())
    }

    pub fn calculate_payment(
        &mut self,
        student_id: &str,
        payment: f64,
    ) -> Result<(), ApplicationError> {
        let command = MakePayment {
            student_id: student_id.to_string(),
            amount: payment,
        };
        let decision = decide_payment(&self.state, &self.policy, command);
        self.commit("calculate_payment", decision)?;
        info!(
            student_id,
            amount = payment,
            balance = self.check_student_balance(student_id).unwrap_or_default(),
            "payment accepted"
        );
        Ok(())
    }

    pub fn check_student_balance(&self, student_id: &str) -> Result<f64, RegistrationError> {
        self.state
            .student(student_id)
            .map(|student| student.balance)
            .ok_or_else(|| RegistrationError::student_not_found(student_id))
    }

    /// Sum of the enrolled course fees. Unlike the balance, payments do not reduce it.
    pub fn total_fee(&self, student_id: &str) -> Result<f64, RegistrationError> {
        self.state
            .student(student_id)
            .map(|student| student.total_fee(self.state.courses()))
            .ok_or_else(|| RegistrationError::student_not_found(student_id))
    }

    pub fn student_courses(&self, student_id: &str) -> Result<Vec<CourseView>, RegistrationError> {
        let student = self
            .state
            .student(student_id)
            .ok_or_else(|| RegistrationError::student_not_found(student_id))?;
        Ok(student
            .courses
            .iter()
            .filter_map(|course_id| self.state.course(course_id))
            .map(CourseView::from)
            .collect())
    }

    pub fn show_courses(&self) -> Vec<CourseView> {
        self.state.courses().iter().map(CourseView::from).collect()
    }

    pub fn show_registered_students(&self) -> Vec<StudentView> {
        self.state.students().iter().map(StudentView::from).collect()
    }

    pub fn show_students_in_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<String>, RegistrationError> {
        let course = self
            .state
            .course(course_id)
            .ok_or_else(|| RegistrationError::course_not_found(course_id))?;
        Ok(self
            .state
            .students()
            .iter()
            .filter(|student| student.is_enrolled_in(&course.course_id))
            .map(|student| student.name.clone())
            .collect())
    }

    /// Every recorded entry, in append order.
    pub fn journal(&self) -> Result<Vec<JournalEntry>, ApplicationError> {
        Ok(self.store.load(REGISTRY_STREAM)?.events)
    }

    fn commit(
        &mut self,
        operation: &'static str,
        decision: Result<Vec<RegistrationEvent>, RegistrationError>,
    ) -> Result<(), ApplicationError> {
        let events = decision.inspect_err(|error| warn!(operation, %error, "command rejected"))?;
        let entries: Vec<JournalEntry> = events.into_iter().map(JournalEntry::record).collect();

        self.store
            .append(REGISTRY_STREAM, self.version, &entries)
            .inspect_err(|error| error!(operation, %error, "journal append failed"))?;
        self.version += entries.len() as i64;

        for entry in entries {
            debug!(
                event_id = %entry.event_id,
                event_type = entry.event.event_type(),
                "event recorded"
            );
            self.state = evolve(std::mem::take(&mut self.state), entry.event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod registration_system_tests {
    use super::*;
    use crate::modules::registration::core::errors::Entity;
    use crate::shared::infrastructure::event_store::EventStoreError;
    use rstest::{fixture, rstest};

    #[fixture]
    fn system() -> RegistrationSystem {
        let mut system = RegistrationSystem::new();
        system.add_course("CS101", "Intro to CS", 500.0).unwrap();
        system.register_student("S1", "Alice", "a@x.com").unwrap();
        system
    }

    #[rstest]
    fn it_should_grow_the_catalogue_by_one_per_successful_add(mut system: RegistrationSystem) {
        system.add_course("MA201", "Linear Algebra", 350.0).unwrap();
        assert_eq!(system.show_courses().len(), 2);

        let result = system.add_course("MA201", "Duplicate", 1.0);
        assert_eq!(
            result,
            Err(ApplicationError::Domain(RegistrationError::DuplicateKey {
                entity: Entity::Course,
                id: "MA201".into(),
            }))
        );
        assert_eq!(system.show_courses().len(), 2);
    }

    #[rstest]
    fn it_should_reject_a_duplicate_student(mut system: RegistrationSystem) {
        let result = system.register_student("S1", "Someone else", "s@x.com");
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(RegistrationError::DuplicateKey {
                entity: Entity::Student,
                ..
            }))
        ));
        assert_eq!(system.show_registered_students().len(), 1);
    }

    #[rstest]
    fn it_should_charge_the_fee_exactly_once(mut system: RegistrationSystem) {
        system.enroll_in_course("S1", "CS101").unwrap();
        let second = system.enroll_in_course("S1", "CS101");
        assert!(matches!(
            second.as_ref().map_err(ApplicationError::as_domain),
            Err(Some(RegistrationError::AlreadyEnrolled { .. }))
        ));
        assert_eq!(system.check_student_balance("S1"), Ok(500.0));
    }

    #[rstest]
    fn it_should_leave_the_balance_unchanged_on_an_insufficient_payment(
        mut system: RegistrationSystem,
    ) {
        system.enroll_in_course("S1", "CS101").unwrap();
        let result = system.calculate_payment("S1", 150.0);
        assert_eq!(
            result,
            Err(ApplicationError::Domain(RegistrationError::InsufficientPayment {
                payment: 150.0,
                minimum: 200.0,
            }))
        );
        assert_eq!(system.check_student_balance("S1"), Ok(500.0));
    }

    #[rstest]
    fn it_should_keep_total_fee_apart_from_the_balance(mut system: RegistrationSystem) {
        system.enroll_in_course("S1", "CS101").unwrap();
        system.calculate_payment("S1", 200.0).unwrap();
        assert_eq!(system.check_student_balance("S1"), Ok(300.0));
        assert_eq!(system.total_fee("S1"), Ok(500.0));
    }

    #[rstest]
    fn it_should_allow_an_overpayment_to_go_negative(mut system: RegistrationSystem) {
        system.enroll_in_course("S1", "CS101").unwrap();
        system.calculate_payment("S1", 650.0).unwrap();
        assert_eq!(system.check_student_balance("S1"), Ok(-150.0));
    }

    #[rstest]
    fn it_should_list_the_courses_of_a_student(mut system: RegistrationSystem) {
        system.add_course("MA201", "Linear Algebra", 350.0).unwrap();
        system.enroll_in_course("S1", "MA201").unwrap();
        system.enroll_in_course("S1", "CS101").unwrap();
        let ids: Vec<_> = system
            .student_courses("S1")
            .unwrap()
            .into_iter()
            .map(|c| c.course_id)
            .collect();
        assert_eq!(ids, vec!["MA201", "CS101"]);
    }

    #[rstest]
    fn it_should_not_journal_rejected_commands(mut system: RegistrationSystem) {
        assert_eq!(system.journal().unwrap().len(), 2);
        let _ = system.add_course("CS101", "Duplicate", 1.0);
        let _ = system.enroll_in_course("S9", "CS101");
        let _ = system.calculate_payment("S9", 1.0);
        assert_eq!(system.journal().unwrap().len(), 2);
    }

    #[rstest]
    fn it_should_surface_an_offline_store_and_keep_the_state(mut system: RegistrationSystem) {
        system.store_mut().toggle_offline();
        let result = system.enroll_in_course("S1", "CS101");
        assert_eq!(
            result,
            Err(ApplicationError::EventStore(EventStoreError::Backend(
                "Event store offline".into()
            )))
        );
        assert_eq!(result.as_ref().map_err(ApplicationError::as_domain), Err(None));
        assert_eq!(system.check_student_balance("S1"), Ok(0.0));

        system.store_mut().toggle_offline();
        system.enroll_in_course("S1", "CS101").unwrap();
        assert_eq!(system.check_student_balance("S1"), Ok(500.0));
    }

    #[rstest]
    fn it_should_start_empty_with_the_default_policy() {
        let system = RegistrationSystem::default();
        assert!(system.show_courses().is_empty());
        assert!(system.show_registered_students().is_empty());
        assert_eq!(system.policy(), PaymentPolicy::default());
        assert!(system.journal().unwrap().is_empty());
    }

    #[rstest]
    fn it_should_reject_courses_of_an_unknown_student(system: RegistrationSystem) {
        assert_eq!(
            system.student_courses("S9"),
            Err(RegistrationError::student_not_found("S9"))
        );
    }

    #[rstest]
    fn it_should_keep_the_given_policy_when_rehydrating(mut system: RegistrationSystem) {
        system.enroll_in_course("S1", "CS101").unwrap();
        let mut store = InMemoryEventStore::<JournalEntry>::new();
        store
            .append(REGISTRY_STREAM, 0, &system.journal().unwrap())
            .unwrap();

        let mut rebuilt = RegistrationSystem::rehydrate(store, PaymentPolicy::new(0.5)).unwrap();
        assert_eq!(rebuilt.policy(), PaymentPolicy::new(0.5));
        assert!(rebuilt.calculate_payment("S1", 200.0).is_err());
        assert!(rebuilt.calculate_payment("S1", 250.0).is_ok());
    }

    #[rstest]
    fn it_should_apply_the_configured_policy() {
        let mut system = RegistrationSystem::new().with_policy(PaymentPolicy::new(0.5));
        system.add_course("CS101", "Intro to CS", 500.0).unwrap();
        system.register_student("S1", "Alice", "a@x.com").unwrap();
        system.enroll_in_course("S1", "CS101").unwrap();
        assert!(system.calculate_payment("S1", 200.0).is_err());
        assert!(system.calculate_payment("S1", 250.0).is_ok());
    }
}
