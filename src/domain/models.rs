use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// How an employee is paid, with the inputs of its pay rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayKind {
    FullTime {
        fixed_salary: f64,
    },
    PartTime {
        hourly_rate: f64,
        hours_worked: i32,
    },
    Contractual {
        payment_per_project: f64,
        projects_completed: i32,
    },
}

impl PayKind {
    pub fn label(&self) -> &'static str {
        match self {
            PayKind::FullTime { .. } => "full_time",
            PayKind::PartTime { .. } => "part_time",
            PayKind::Contractual { .. } => "contractual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: i32,
    name: String,
    #[serde(flatten)]
    kind: PayKind,
    salary: f64,
}

impl Employee {
    /// Builds the record and runs its pay rule, so `salary` is always settled.
    pub fn new(id: i32, name: impl Into<String>, kind: PayKind) -> Self {
        let mut employee = Self {
            id,
            name: name.into(),
            kind,
            salary: 0.0,
        };
        employee.compute_pay();
        employee
    }

    pub fn full_time(id: i32, name: impl Into<String>, fixed_salary: f64) -> Self {
        Self::new(id, name, PayKind::FullTime { fixed_salary })
    }

    pub fn part_time(
        id: i32,
        name: impl Into<String>,
        hourly_rate: f64,
        hours_worked: i32,
    ) -> Self {
        Self::new(
            id,
            name,
            PayKind::PartTime {
                hourly_rate,
                hours_worked,
            },
        )
    }

    pub fn contractual(
        id: i32,
        name: impl Into<String>,
        payment_per_project: f64,
        projects_completed: i32,
    ) -> Self {
        Self::new(
            id,
            name,
            PayKind::Contractual {
                payment_per_project,
                projects_completed,
            },
        )
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &PayKind {
        &self.kind
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn compute_pay(&mut self) {
        self.salary = match self.kind {
            PayKind::FullTime { fixed_salary } => fixed_salary,
            PayKind::PartTime {
                hourly_rate,
                hours_worked,
            } => hourly_rate * f64::from(hours_worked),
            PayKind::Contractual {
                payment_per_project,
                projects_completed,
            } => payment_per_project * f64::from(projects_completed),
        };
    }

    /// Multi-line text block; every line ends with `\n`.
    pub fn render(&self) -> String {
        let mut out = format!("Employee: {} (ID: {})\n", self.name, self.id);
        match &self.kind {
            PayKind::FullTime { .. } => {
                out.push_str(&format!("Fixed Monthly Salary: {}\n", money(self.salary)));
            }
            PayKind::PartTime {
                hourly_rate,
                hours_worked,
            } => {
                out.push_str(&format!("Hourly Wage: ${}\n", hourly_rate));
                out.push_str(&format!("Hours Worked: {}\n", hours_worked));
                out.push_str(&format!("Total Salary: {}\n", money(self.salary)));
            }
            PayKind::Contractual {
                payment_per_project,
                projects_completed,
            } => {
                out.push_str(&format!(
                    "Contract Payment Per Project: ${}\n",
                    payment_per_project
                ));
                out.push_str(&format!("Projects Completed: {}\n", projects_completed));
                out.push_str(&format!("Total Salary: {}\n", money(self.salary)));
            }
        }
        out
    }
}

/// Totals print with cents; entered rates print as typed.
fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `--json` payload for the payroll report.
#[derive(Serialize)]
pub struct PayrollReport<'a> {
    pub count: usize,
    pub employees: &'a [Employee],
}
