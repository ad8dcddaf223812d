use crate::app::report;
use crate::core::{search, sort, stats, ConfigProvider, Roster, SearchPolicy, StudentId};
use crate::utils::error::{Result, SimsError};
use std::io::{BufRead, Write};
use std::str::FromStr;

const NO_STUDENTS: &str = "No students available. Please add a student first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    EnterGrades,
    DisplayStudents,
    SortByGrade,
    SearchById,
    HighestAndLowest,
    Histogram,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddStudent,
        MenuChoice::EnterGrades,
        MenuChoice::DisplayStudents,
        MenuChoice::SortByGrade,
        MenuChoice::SearchById,
        MenuChoice::HighestAndLowest,
        MenuChoice::Histogram,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add Student",
            MenuChoice::EnterGrades => "Enter Grades",
            MenuChoice::DisplayStudents => "Display Students",
            MenuChoice::SortByGrade => "Sort Students by Grade",
            MenuChoice::SearchById => "Search for Student by ID",
            MenuChoice::HighestAndLowest => "Calculate Highest and Lowest Grades",
            MenuChoice::Histogram => "Display Grade Distribution Histogram",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parses a 1-based menu number.
    pub fn from_input(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

/// Menu-driven session over one roster. Generic over its input and output so
/// it can be driven from stdin/stdout or from in-memory buffers.
pub struct Shell<R: BufRead, W: Write, C: ConfigProvider> {
    input: R,
    output: W,
    config: C,
    roster: Roster,
}

impl<R: BufRead, W: Write, C: ConfigProvider> Shell<R, W, C> {
    pub fn new(input: R, output: W, config: C) -> Self {
        Self {
            input,
            output,
            config,
            roster: Roster::new(),
        }
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Runs the menu until Exit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.run_loop() {
            Err(SimsError::InputClosed) => {
                tracing::info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let line = self.read_line("Enter your choice: ")?;

            let Some(choice) = MenuChoice::from_input(&line) else {
                tracing::warn!("Rejected menu input {:?}", line.trim());
                writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                continue;
            };

            tracing::debug!("Menu choice: {:?}", choice);
            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting program.")?;
                self.output.flush()?;
                return Ok(());
            }
            self.dispatch(choice)?;
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::EnterGrades => self.enter_grades(),
            MenuChoice::DisplayStudents => self.display_students(),
            MenuChoice::SortByGrade => self.sort_by_grade(),
            MenuChoice::SearchById => self.search_by_id(),
            MenuChoice::HighestAndLowest => self.highest_and_lowest(),
            MenuChoice::Histogram => self.histogram(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, choice.label())?;
        }
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        let name = self.read_line("Enter student name: ")?;
        let id: StudentId = self.prompt_number("Enter student ID: ")?;
        self.roster.add(name, id);
        Ok(())
    }

    fn enter_grades(&mut self) -> Result<()> {
        if self.report_if_empty()? {
            return Ok(());
        }

        // 暫時取出名冊，讓提示輸入時可以借用 self
        let mut roster = std::mem::take(&mut self.roster);
        let result: Result<()> = roster.iter_mut().try_for_each(|student| {
            let grade: f64 = self.prompt_number(&format!("Enter grade for {}: ", student.name))?;
            student.set_grade(grade);
            Ok(())
        });
        self.roster = roster;
        result
    }

    fn display_students(&mut self) -> Result<()> {
        if self.report_if_empty()? {
            return Ok(());
        }

        report::write_student_table(&mut self.output, self.roster.as_slice(), &self.config)?;
        Ok(())
    }

    fn sort_by_grade(&mut self) -> Result<()> {
        if self.report_if_empty()? {
            return Ok(());
        }

        sort::sort_descending_by_grade(self.roster.as_mut_slice());
        writeln!(self.output, "Students sorted by grade (descending order).")?;
        Ok(())
    }

    fn search_by_id(&mut self) -> Result<()> {
        if self.report_if_empty()? {
            return Ok(());
        }

        let target: StudentId = self.prompt_number("Enter student ID to search: ")?;
        if self.config.search_policy() == SearchPolicy::SortById {
            sort::sort_ascending_by_id(self.roster.as_mut_slice());
        }

        let found = search::find_by_id(self.roster.as_slice(), target)
            .and_then(|index| self.roster.get(index));
        match found {
            Some(student) => {
                report::write_student(&mut self.output, student, self.config.grade_precision())?
            }
            None => writeln!(self.output, "Student with ID {} not found.", target)?,
        }
        Ok(())
    }

    fn highest_and_lowest(&mut self) -> Result<()> {
        let Some(summary) = stats::summarize(self.roster.as_slice()) else {
            writeln!(self.output, "{}", NO_STUDENTS)?;
            return Ok(());
        };

        tracing::debug!("Grade summary: {:?}", summary);
        let precision = self.config.grade_precision();
        writeln!(
            self.output,
            "Highest Grade: {}",
            report::format_grade(summary.max, precision)
        )?;
        writeln!(
            self.output,
            "Lowest Grade: {}",
            report::format_grade(summary.min, precision)
        )?;
        Ok(())
    }

    fn histogram(&mut self) -> Result<()> {
        if self.report_if_empty()? {
            return Ok(());
        }

        let bins = stats::histogram(self.roster.as_slice(), self.config.histogram_bins());
        report::write_histogram(&mut self.output, &bins, self.config.bar_char())?;
        Ok(())
    }

    /// Prints the informational message when the roster is empty.
    fn report_if_empty(&mut self) -> Result<bool> {
        if self.roster.is_empty() {
            writeln!(self.output, "{}", NO_STUDENTS)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SimsError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// 讀取數字，格式錯誤時重新提示
    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    let err = SimsError::InputError {
                        message: format!("'{}' is not a valid number", line.trim()),
                    };
                    tracing::warn!("{}", err);
                    writeln!(self.output, "{}. {}", err, err.recovery_suggestion())?;
                }
            }
        }
    }
}
