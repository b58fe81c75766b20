use crate::domain::errors::InputError;
use crate::domain::models::Employee;
use crate::services::input::Console;
use crate::services::output::render_report;
use crate::services::registry::PayrollRegistry;
use std::io::{BufRead, Write};

pub const MENU: &str = "Menu\n\
1 - Full-time Employee\n\
2 - Part-time Employee\n\
3 - Contractual Employee\n\
4 - Display Payroll Report\n\
5 - Exit\n\
Enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.\n";
pub const DUPLICATE_ID: &str = "Duplicate ID! Please enter a different ID.\n";
pub const FAREWELL: &str = "Exiting...\n";

/// Which kind of employee record a menu entry collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    FullTime,
    PartTime,
    Contractual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add(EntryKind),
    Report,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(Self::Add(EntryKind::FullTime)),
            2 => Some(Self::Add(EntryKind::PartTime)),
            3 => Some(Self::Add(EntryKind::Contractual)),
            4 => Some(Self::Report),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Step {
    Continue,
    Exit,
}

/// One interactive session: the menu loop plus the registry it fills.
pub struct Session<R, W> {
    console: Console<R, W>,
    registry: PayrollRegistry,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, json: bool) -> Self {
        Self {
            console,
            registry: PayrollRegistry::new(),
            json,
        }
    }

    pub fn into_parts(self) -> (PayrollRegistry, W) {
        (self.registry, self.console.into_output())
    }

    /// Runs until the user picks Exit or standard input closes.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => break,
                Err(err) if matches!(err.downcast_ref::<InputError>(), Some(InputError::Eof)) => {
                    tracing::warn!(
                        employees = self.registry.len(),
                        "end of input, treating as exit"
                    );
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        self.console.say(FAREWELL)?;
        Ok(())
    }

    fn step(&mut self) -> anyhow::Result<Step> {
        self.console.say(MENU)?;
        // A valid number leaves the rest of its line for the next prompt.
        let Some(number) = self.console.read_number::<i32>()? else {
            self.console.say(INVALID_CHOICE)?;
            return Ok(Step::Continue);
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            tracing::warn!(number, "menu choice out of range");
            self.console.say(INVALID_CHOICE)?;
            return Ok(Step::Continue);
        };

        match choice {
            MenuChoice::Add(kind) => self.collect(kind)?,
            MenuChoice::Report => {
                let body = render_report(self.json, &self.registry)?;
                tracing::debug!(employees = self.registry.len(), "report rendered");
                self.console.say(&body)?;
            }
            MenuChoice::Exit => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    fn collect(&mut self, kind: EntryKind) -> anyhow::Result<()> {
        let id: i32 = self.console.prompt_number("Enter ID: ")?;
        if self.registry.is_duplicate_id(id) {
            tracing::warn!(id, "duplicate employee id rejected");
            self.console.say(DUPLICATE_ID)?;
            return Ok(());
        }
        let name = self.console.prompt_line("Enter Name: ")?;

        let employee = match kind {
            EntryKind::FullTime => {
                Employee::full_time(id, name, self.console.prompt_number("Enter Salary: ")?)
            }
            EntryKind::PartTime => {
                let hourly_rate = self.console.prompt_number("Enter Hourly Rate: ")?;
                let hours_worked = self.console.prompt_number("Enter Hours Worked: ")?;
                Employee::part_time(id, name, hourly_rate, hours_worked)
            }
            EntryKind::Contractual => {
                let payment = self.console.prompt_number("Enter Payment Per Project: ")?;
                let projects = self.console.prompt_number("Enter Projects Completed: ")?;
                Employee::contractual(id, name, payment, projects)
            }
        };

        self.registry.add_employee(employee)?;
        Ok(())
    }
}
