use crate::core::calculators::{parse_integer, INVALID_INTEGER};
use crate::core::{value_or_prompt, Console, Drill};
use crate::utils::error::{DrillError, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

pub fn format_current(now: &NaiveDateTime) -> String {
    format!("Current date and time: {}", now.format("%Y-%m-%d %H:%M:%S"))
}

pub fn add_days(today: NaiveDate, days: i64) -> Result<NaiveDate> {
    TimeDelta::try_days(days)
        .and_then(|delta| today.checked_add_signed(delta))
        .ok_or_else(|| DrillError::Overflow {
            operation: "date offset".to_string(),
            input: days.to_string(),
        })
}

pub struct NowDrill {
    pub now: NaiveDateTime,
}

impl Drill for NowDrill {
    fn name(&self) -> &'static str {
        "now"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        console.say(&format_current(&self.now))
    }
}

pub struct FutureDateDrill {
    pub days: Option<String>,
    pub now: NaiveDateTime,
}

impl Drill for FutureDateDrill {
    fn name(&self) -> &'static str {
        "future-date"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        console.say(&format_current(&self.now))?;

        let raw = value_or_prompt(
            console,
            self.days.as_deref(),
            "Enter the number of days to add to the current date: ",
        )?;

        match parse_integer(&raw).and_then(|days| add_days(self.now.date(), days)) {
            Ok(date) => console.say(&format!("Future date: {}", date.format("%Y-%m-%d"))),
            Err(e) => {
                tracing::debug!("Rejected day offset: {}", e);
                console.say(INVALID_INTEGER)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_days_crosses_month_boundary() {
        assert_eq!(add_days(date(2024, 1, 30), 2).unwrap(), date(2024, 2, 1));
        assert_eq!(add_days(date(2024, 2, 28), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_days(date(2024, 3, 1), -1).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(matches!(
            add_days(date(2024, 1, 1), i64::MAX),
            Err(DrillError::Overflow { .. })
        ));
    }

    #[test]
    fn test_format_current() {
        let now = date(2024, 5, 6).and_hms_opt(7, 8, 9).unwrap();
        assert_eq!(format_current(&now), "Current date and time: 2024-05-06 07:08:09");
    }
}
