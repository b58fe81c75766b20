use crate::domain::errors::RegistryError;
use crate::domain::models::Employee;

pub const REPORT_HEADER: &str = "--- Employee Payroll Report ---\n";

/// Insertion-ordered store that owns every accepted employee.
#[derive(Debug, Default)]
pub struct PayrollRegistry {
    employees: Vec<Employee>,
}

impl PayrollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_duplicate_id(&self, id: i32) -> bool {
        self.employees.iter().any(|e| e.id() == id)
    }

    /// Appends `employee`; a duplicate id leaves the registry untouched.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), RegistryError> {
        if self.is_duplicate_id(employee.id()) {
            return Err(RegistryError::DuplicateId { id: employee.id() });
        }
        tracing::debug!(
            id = employee.id(),
            name = employee.name(),
            kind = employee.kind().label(),
            salary = employee.salary(),
            "employee added"
        );
        self.employees.push(employee);
        Ok(())
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn render_report(&self) -> String {
        let mut out = String::from(REPORT_HEADER);
        for employee in &self.employees {
            out.push_str(&employee.render());
            out.push('\n');
        }
        out
    }
}
