// Line based menu over a registration system.
//
// Responsibilities
// - Prompt for each operation's inputs, call the registry, print the outcome.
// - Print domain failures and malformed numbers, then resume the loop.
// - Stop on the exit choice or at end of input.

use crate::modules::registration::application::registration_system::RegistrationSystem;
use crate::modules::registration::core::journal::JournalEntry;
use crate::shared::infrastructure::event_store::EventStore;
use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};
use tracing::debug;

const INVALID_NUMBER: &str = "Invalid input, please enter a number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCourse,
    RegisterStudent,
    EnrollStudent,
    MakePayment,
    CheckBalance,
    ShowCourses,
    ShowStudents,
    ShowStudentsInCourse,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddCourse,
        MenuChoice::RegisterStudent,
        MenuChoice::EnrollStudent,
        MenuChoice::MakePayment,
        MenuChoice::CheckBalance,
        MenuChoice::ShowCourses,
        MenuChoice::ShowStudents,
        MenuChoice::ShowStudentsInCourse,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddCourse => "Add Course",
            MenuChoice::RegisterStudent => "Register Student",
            MenuChoice::EnrollStudent => "Enroll Student in Course",
            MenuChoice::MakePayment => "Make Payment",
            MenuChoice::CheckBalance => "Check Student Balance",
            MenuChoice::ShowCourses => "Show All Courses",
            MenuChoice::ShowStudents => "Show Registered Students",
            MenuChoice::ShowStudentsInCourse => "Show Students in a Course",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Amounts print with at least one decimal place (`500.0`, `300.25`).
pub fn format_amount(amount: f64) -> String {
    format!("{amount:?}")
}

pub struct Menu<'a, TStore, R, W>
where
    TStore: EventStore<JournalEntry>,
{
    system: &'a mut RegistrationSystem<TStore>,
    input: R,
    output: W,
}

impl<'a, TStore, R, W> Menu<'a, TStore, R, W>
where
    TStore: EventStore<JournalEntry>,
    R: BufRead,
    W: Write,
{
    pub fn new(system: &'a mut RegistrationSystem<TStore>, input: R, output: W) -> Self {
        Self {
            system,
            input,
            output,
        }
    }

    pub fn run(mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let outcome = self.step();
            match outcome {
                Ok(true) => continue,
                Ok(false) => break,
                Err(error) if error.kind() == ErrorKind::UnexpectedEof => {
                    debug!("input closed, leaving the menu");
                    break;
                }
                Err(error) => return Err(error),
            }
        }
        self.output.flush()
    }

    /// Runs one menu round. Returns `false` once the user picked exit.
    fn step(&mut self) -> io::Result<bool> {
        let raw = self.prompt("Enter your choice: ")?;
        let Ok(number) = raw.trim().parse::<i64>() else {
            self.error(INVALID_NUMBER)?;
            return Ok(true);
        };
        let choice = u32::try_from(number).ok().and_then(MenuChoice::from_number);
        let Some(choice) = choice else {
            writeln!(self.output, "Invalid choice. Please try again.")?;
            return Ok(true);
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::AddCourse => self.add_course()?,
            MenuChoice::RegisterStudent => self.register_student()?,
            MenuChoice::EnrollStudent => self.enroll_student()?,
            MenuChoice::MakePayment => self.make_payment()?,
            MenuChoice::CheckBalance => self.check_balance()?,
            MenuChoice::ShowCourses => self.show_courses()?,
            MenuChoice::ShowStudents => self.show_students()?,
            MenuChoice::ShowStudentsInCourse => self.show_students_in_course()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting the system. Goodbye!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Menu:")?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, choice.label())?;
        }
        Ok(())
    }

    fn add_course(&mut self) -> io::Result<()> {
        let course_id = self.prompt("Enter course ID: ")?;
        let name = self.prompt("Enter course name: ")?;
        let Some(fee) = self.prompt_amount("Enter course fee: ")? else {
            return Ok(());
        };
        match self.system.add_course(course_id, name, fee) {
            Ok(()) => writeln!(self.output, "Course added successfully."),
            Err(error) => self.error(error),
        }
    }

    fn register_student(&mut self) -> io::Result<()> {
        let student_id = self.prompt("Enter student ID: ")?;
        let name = self.prompt("Enter student name: ")?;
        let email = self.prompt("Enter student email: ")?;
        match self.system.register_student(student_id, name, email) {
            Ok(()) => writeln!(self.output, "Student registered successfully."),
            Err(error) => self.error(error),
        }
    }

    fn enroll_student(&mut self) -> io::Result<()> {
        let student_id = self.prompt("Enter student ID: ")?;
        let course_id = self.prompt("Enter course ID: ")?;
        match self.system.enroll_in_course(&student_id, &course_id) {
            Ok(()) => writeln!(self.output, "Student enrolled in course successfully."),
            Err(error) => self.error(error),
        }
    }

    fn make_payment(&mut self) -> io::Result<()> {
        let student_id = self.prompt("Enter student ID: ")?;
        let Some(payment) = self.prompt_amount("Enter payment amount: ")? else {
            return Ok(());
        };
        match self.system.calculate_payment(&student_id, payment) {
            Ok(()) => writeln!(self.output, "Payment processed successfully."),
            Err(error) => self.error(error),
        }
    }

    fn check_balance(&mut self) -> io::Result<()> {
        let student_id = self.prompt("Enter student ID: ")?;
        match self.system.check_student_balance(&student_id) {
            Ok(balance) => writeln!(
                self.output,
                "Outstanding balance for student {student_id}: {}",
                format_amount(balance)
            ),
            Err(error) => self.error(error),
        }
    }

    fn show_courses(&mut self) -> io::Result<()> {
        writeln!(self.output, "Courses:")?;
        for course in self.system.show_courses() {
            writeln!(
                self.output,
                "ID: {}, Name: {}, Fee: {}",
                course.course_id,
                course.name,
                format_amount(course.fee)
            )?;
        }
        Ok(())
    }

    fn show_students(&mut self) -> io::Result<()> {
        writeln!(self.output, "Registered Students:")?;
        for student in self.system.show_registered_students() {
            writeln!(
                self.output,
                "ID: {}, Name: {}, Email: {}",
                student.student_id, student.name, student.email
            )?;
        }
        Ok(())
    }

    fn show_students_in_course(&mut self) -> io::Result<()> {
        let course_id = self.prompt("Enter course ID: ")?;
        let names = match self.system.show_students_in_course(&course_id) {
            Ok(names) => names,
            Err(error) => return self.error(error),
        };
        writeln!(self.output, "Students in course {course_id}:")?;
        for name in names {
            writeln!(self.output, "{name}")?;
        }
        Ok(())
    }

    fn error(&mut self, error: impl Display) -> io::Result<()> {
        writeln!(self.output, "Error: {error}")
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompts for a number; prints the parse failure and yields `None` when it is not one.
    fn prompt_amount(&mut self, label: &str) -> io::Result<Option<f64>> {
        let raw = self.prompt(label)?;
        match raw.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => Ok(Some(amount)),
            _ => {
                self.error(INVALID_NUMBER)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod menu_tests {
    use super::*;
    use rstest::rstest;

    fn run_script(system: &mut RegistrationSystem, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(system, script.as_bytes(), &mut output)
            .run()
            .expect("menu failed");
        String::from_utf8(output).expect("output is not utf-8")
    }

    #[rstest]
    #[case(1, Some(MenuChoice::AddCourse))]
    #[case(8, Some(MenuChoice::ShowStudentsInCourse))]
    #[case(9, Some(MenuChoice::Exit))]
    #[case(0, None)]
    #[case(10, None)]
    fn it_should_map_numbers_to_choices(#[case] number: u32, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::from_number(number), expected);
    }

    #[rstest]
    #[case(500.0, "500.0")]
    #[case(300.25, "300.25")]
    #[case(-150.0, "-150.0")]
    fn it_should_format_amounts_with_a_decimal_place(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[rstest]
    fn it_should_run_the_registration_scenario() {
        let mut system = RegistrationSystem::new();
        let script = "1\nCS101\nIntro to CS\n500\n\
                      2\nS1\nAlice\na@x.com\n\
                      3\nS1\nCS101\n\
                      4\nS1\n150\n\
                      4\nS1\n200\n\
                      5\nS1\n\
                      8\nCS101\n\
                      9\n";
        let output = run_script(&mut system, script);

        assert!(output.contains("Course added successfully."));
        assert!(output.contains("Student registered successfully."));
        assert!(output.contains("Student enrolled in course successfully."));
        assert!(output.contains(
            "Error: payment of 150.00 is below the minimum of 200.00 on the outstanding balance"
        ));
        assert!(output.contains("Payment processed successfully."));
        assert!(output.contains("Outstanding balance for student S1: 300.0"));
        assert!(output.contains("Students in course CS101:\nAlice\n"));
        assert!(output.ends_with("Exiting the system. Goodbye!\n"));
        assert_eq!(system.check_student_balance("S1"), Ok(300.0));
    }

    #[rstest]
    fn it_should_list_courses_and_students() {
        let mut system = RegistrationSystem::new();
        system.add_course("CS101", "Intro to CS", 500.0).unwrap();
        system.register_student("S1", "Alice", "a@x.com").unwrap();
        let output = run_script(&mut system, "6\n7\n9\n");
        assert!(output.contains("Courses:\nID: CS101, Name: Intro to CS, Fee: 500.0\n"));
        assert!(output.contains("Registered Students:\nID: S1, Name: Alice, Email: a@x.com\n"));
    }

    #[rstest]
    fn it_should_report_bad_input_and_keep_going() {
        let mut system = RegistrationSystem::new();
        let output = run_script(&mut system, "abc\n12\n1\nCS101\nIntro\nfree\n5\nS9\n9\n");
        assert!(output.contains(&format!("Error: {INVALID_NUMBER}")));
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Error: student ID not found: S9"));
        assert!(system.show_courses().is_empty());
    }

    #[rstest]
    #[case("-1\n9\n")]
    #[case("0\n9\n")]
    #[case("99999999999\n9\n")]
    fn it_should_treat_out_of_range_numbers_as_invalid_choices(#[case] script: &str) {
        let mut system = RegistrationSystem::new();
        let output = run_script(&mut system, script);
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(!output.contains(INVALID_NUMBER));
    }

    #[rstest]
    fn it_should_stop_quietly_at_end_of_input() {
        let mut system = RegistrationSystem::new();
        let output = run_script(&mut system, "2\nS1\n");
        assert!(!output.contains("Goodbye"));
        assert!(system.show_registered_students().is_empty());
    }
}
