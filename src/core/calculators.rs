use crate::config::toml_config::FinanceConfig;
use crate::core::exceptions::parse_number;
use crate::core::{value_or_prompt, Console, Drill};
use crate::utils::error::{DrillError, Result};
use std::str::FromStr;

pub const INVALID_INTEGER: &str = "Invalid input! Please enter an integer value.";
pub const INVALID_PRIORITY: &str = "Invalid priority. Please enter high, medium, or low.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsProjection {
    pub monthly_savings: f64,
    pub annual_base: f64,
    pub interest: f64,
    pub projected_annual: f64,
}

impl SavingsProjection {
    pub fn compute(income: f64, expenses: f64, interest_rate: f64, months: u32) -> Self {
        let monthly_savings = income - expenses;
        let annual_base = monthly_savings * f64::from(months);
        let interest = annual_base * interest_rate;
        Self {
            monthly_savings,
            annual_base,
            interest,
            projected_annual: annual_base + interest,
        }
    }
}

pub struct FinanceDrill {
    pub income: Option<String>,
    pub expenses: Option<String>,
    pub finance: FinanceConfig,
}

impl Drill for FinanceDrill {
    fn name(&self) -> &'static str {
        "finance"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let income = value_or_prompt(console, self.income.as_deref(), "Enter your monthly income: ")?;
        let expenses = value_or_prompt(
            console,
            self.expenses.as_deref(),
            "Enter your total monthly expenses: ",
        )?;

        let (income, expenses) = match (parse_number(&income), parse_number(&expenses)) {
            (Ok(i), Ok(e)) => (i, e),
            (Err(e), _) | (_, Err(e)) => return console.say(&format!("Error: {}", e)),
        };

        let projection = SavingsProjection::compute(
            income,
            expenses,
            self.finance.interest_rate,
            self.finance.months,
        );
        tracing::debug!("Savings projection: {:?}", projection);

        console.say(&format!(
            "Your monthly savings are ${:.2}.",
            projection.monthly_savings
        ))?;
        console.say(&format!(
            "Projected savings after one year, with interest, is: ${:.2}.",
            projection.projected_annual
        ))
    }
}

pub fn parse_integer(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|_| DrillError::InvalidNumber {
        input: trimmed.to_string(),
    })
}

/// `size` rows of `size` glyphs, produced one row at a time; nothing for a
/// non-positive size.
pub fn draw_pattern(size: i64, glyph: char) -> impl Iterator<Item = String> {
    let size = usize::try_from(size).unwrap_or(0);
    let row: String = std::iter::repeat(glyph).take(size).collect();
    std::iter::repeat(row).take(size)
}

pub struct PatternDrill {
    pub size: Option<String>,
    pub glyph: char,
}

impl Drill for PatternDrill {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let raw = value_or_prompt(console, self.size.as_deref(), "Enter the size of the pattern: ")?;
        let size = match parse_integer(&raw) {
            Ok(size) => size,
            Err(_) => return console.say(INVALID_INTEGER),
        };

        for line in draw_pattern(size, self.glyph) {
            console.say(&line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(DrillError::ValidationError {
                message: format!("unknown priority '{}'", other),
            }),
        }
    }
}

/// Only an explicit "yes" marks a task as time-bound.
pub fn is_time_bound(answer: &str) -> bool {
    answer.to_lowercase() == "yes"
}

pub fn reminder_message(task: &str, priority: &str, time_bound: &str) -> String {
    let Ok(priority) = priority.parse::<Priority>() else {
        return INVALID_PRIORITY.to_string();
    };

    match (priority, is_time_bound(time_bound)) {
        (Priority::High, true) => format!(
            "Reminder: '{}' is a high priority task that requires immediate attention today!",
            task
        ),
        (Priority::High, false) => format!(
            "Reminder: '{}' is a high priority task. Try to complete it soon.",
            task
        ),
        (Priority::Medium, true) => format!(
            "Note: '{}' is a medium priority task that requires attention today.",
            task
        ),
        (Priority::Medium, false) => format!(
            "Note: '{}' is a medium priority task. Plan to do it when possible.",
            task
        ),
        (Priority::Low, true) => format!(
            "Note: '{}' is a low priority task, but it is time-sensitive. Don't forget it!",
            task
        ),
        (Priority::Low, false) => format!(
            "Note: '{}' is a low priority task. Consider completing it when you have free time.",
            task
        ),
    }
}

pub struct ReminderDrill {
    pub task: Option<String>,
    pub priority: Option<String>,
    pub time_bound: Option<String>,
}

impl Drill for ReminderDrill {
    fn name(&self) -> &'static str {
        "reminder"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let task = value_or_prompt(console, self.task.as_deref(), "Enter your task: ")?;
        let priority = value_or_prompt(
            console,
            self.priority.as_deref(),
            "Priority (high/medium/low): ",
        )?;
        let time_bound = value_or_prompt(
            console,
            self.time_bound.as_deref(),
            "Is it time-bound? (yes/no): ",
        )?;

        console.say(&reminder_message(&task, &priority, &time_bound))
    }
}
