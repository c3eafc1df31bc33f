// Registry state: the catalogue of courses and the roster of students after
// folding every journal event.
//
// Boundaries
// - No input or output. Mutated only by `evolve`.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub course_id: String,
    pub name: String,
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub email: String,
    /// Enrolled course ids, in enrollment order.
    pub courses: Vec<String>,
    /// Running ledger value. Adjusted incrementally, never recomputed.
    pub balance: f64,
}

impl Student {
    pub fn new(student_id: String, name: String, email: String) -> Self {
        Self {
            student_id,
            name,
            email,
            courses: Vec::new(),
            balance: 0.0,
        }
    }

    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c == course_id)
    }

    /// Sum of the fees of the enrolled courses as currently listed in `catalogue`.
    pub fn total_fee(&self, catalogue: &[Course]) -> f64 {
        self.courses
            .iter()
            .filter_map(|id| catalogue.iter().find(|c| &c.course_id == id))
            .map(|c| c.fee)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryState {
    courses: Vec<Course>,
    students: Vec<Student>,
    student_index: HashMap<String, usize>,
}

impl RegistryState {
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Students in registration order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// First course with a matching id, by linear scan.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }

    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.student_index
            .get(student_id)
            .map(|&position| &self.students[position])
    }

    pub(crate) fn push_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub(crate) fn push_student(&mut self, student: Student) {
        self.student_index
            .insert(student.student_id.clone(), self.students.len());
        self.students.push(student);
    }

    pub(crate) fn student_mut(&mut self, student_id: &str) -> Option<&mut Student> {
        let position = *self.student_index.get(student_id)?;
        self.students.get_mut(position)
    }
}

#[cfg(test)]
mod registry_state_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalogue() -> Vec<Course> {
        vec![
            Course {
                course_id: "CS101".into(),
                name: "Intro to CS".into(),
                fee: 500.0,
            },
            Course {
                course_id: "MA201".into(),
                name: "Linear Algebra".into(),
                fee: 350.5,
            },
        ]
    }

    #[rstest]
    fn it_should_create_a_student_with_no_courses_and_zero_balance() {
        let student = Student::new("S1".into(), "Alice".into(), "a@x.com".into());
        assert!(student.courses.is_empty());
        assert_eq!(student.balance, 0.0);
        assert!(!student.is_enrolled_in("CS101"));
    }

    #[rstest]
    fn it_should_sum_the_fees_of_enrolled_courses(catalogue: Vec<Course>) {
        let mut student = Student::new("S1".into(), "Alice".into(), "a@x.com".into());
        student.courses = vec!["CS101".into(), "MA201".into()];
        assert_eq!(student.total_fee(&catalogue), 850.5);
    }

    #[rstest]
    fn it_should_look_up_students_by_id_in_registration_order() {
        let mut state = RegistryState::default();
        state.push_student(Student::new("S2".into(), "Bob".into(), "b@x.com".into()));
        state.push_student(Student::new("S1".into(), "Alice".into(), "a@x.com".into()));

        assert_eq!(state.student("S1").map(|s| s.name.as_str()), Some("Alice"));
        assert!(state.student("S3").is_none());
        let ids: Vec<_> = state.students().iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["S2", "S1"]);
    }

    #[rstest]
    fn it_should_find_the_first_matching_course(catalogue: Vec<Course>) {
        let mut state = RegistryState::default();
        for course in catalogue {
            state.push_course(course);
        }
        assert_eq!(state.course("MA201").map(|c| c.fee), Some(350.5));
        assert!(state.course("PH100").is_none());
    }
}
