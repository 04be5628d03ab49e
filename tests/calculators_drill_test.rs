use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use lesson_drills::config::toml_config::FinanceConfig;
use lesson_drills::core::calculators::{FinanceDrill, PatternDrill, ReminderDrill};
use lesson_drills::core::datetime::{FutureDateDrill, NowDrill};
use lesson_drills::{Drill, ScriptedConsole};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 30)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap()
}

#[test]
fn test_finance_projection_from_prompts() -> Result<()> {
    let mut console = ScriptedConsole::new(["3000", "2000"]);
    let drill = FinanceDrill {
        income: None,
        expenses: None,
        finance: FinanceConfig::default(),
    };
    drill.run(&mut console)?;

    assert_eq!(
        console.prompts(),
        &["Enter your monthly income: ", "Enter your total monthly expenses: "]
    );
    assert_eq!(
        console.lines(),
        &[
            "Your monthly savings are $1000.00.",
            "Projected savings after one year, with interest, is: $12600.00.",
        ]
    );
    Ok(())
}

#[test]
fn test_finance_uses_configured_rate() -> Result<()> {
    let mut console = ScriptedConsole::default();
    let drill = FinanceDrill {
        income: Some("2500".to_string()),
        expenses: Some("2000".to_string()),
        finance: FinanceConfig {
            interest_rate: 0.1,
            months: 12,
        },
    };
    drill.run(&mut console)?;

    assert_eq!(
        console.lines()[1],
        "Projected savings after one year, with interest, is: $6600.00."
    );
    Ok(())
}

#[test]
fn test_finance_invalid_income() -> Result<()> {
    let mut console = ScriptedConsole::new(["lots", "2000"]);
    let drill = FinanceDrill {
        income: None,
        expenses: None,
        finance: FinanceConfig::default(),
    };
    drill.run(&mut console)?;

    assert_eq!(console.lines(), &["Error: 'lots' is not a valid number."]);
    Ok(())
}

#[test]
fn test_now_drill() -> Result<()> {
    let mut console = ScriptedConsole::default();
    NowDrill { now: fixed_now() }.run(&mut console)?;
    assert_eq!(console.lines(), &["Current date and time: 2024-01-30 08:15:00"]);
    Ok(())
}

#[test]
fn test_future_date() -> Result<()> {
    let mut console = ScriptedConsole::new(["2"]);
    let drill = FutureDateDrill {
        days: None,
        now: fixed_now(),
    };
    drill.run(&mut console)?;

    assert_eq!(
        console.prompts(),
        &["Enter the number of days to add to the current date: "]
    );
    assert_eq!(
        console.lines(),
        &["Current date and time: 2024-01-30 08:15:00", "Future date: 2024-02-01"]
    );
    Ok(())
}

#[test]
fn test_future_date_rejects_non_integer() -> Result<()> {
    for input in ["abc", "1.5", "99999999999999"] {
        let mut console = ScriptedConsole::default();
        let drill = FutureDateDrill {
            days: Some(input.to_string()),
            now: fixed_now(),
        };
        drill.run(&mut console)?;
        assert_eq!(
            console.lines().last().map(String::as_str),
            Some("Invalid input! Please enter an integer value."),
            "input {:?}",
            input
        );
    }
    Ok(())
}

#[test]
fn test_pattern_drawing() -> Result<()> {
    let mut console = ScriptedConsole::new(["3"]);
    let drill = PatternDrill {
        size: None,
        glyph: '*',
    };
    drill.run(&mut console)?;

    assert_eq!(console.prompts(), &["Enter the size of the pattern: "]);
    assert_eq!(console.lines(), &["***", "***", "***"]);
    Ok(())
}

#[test]
fn test_pattern_edge_sizes() -> Result<()> {
    let mut console = ScriptedConsole::default();
    PatternDrill {
        size: Some("0".to_string()),
        glyph: '*',
    }
    .run(&mut console)?;
    assert!(console.lines().is_empty());

    let mut console = ScriptedConsole::default();
    PatternDrill {
        size: Some("three".to_string()),
        glyph: '*',
    }
    .run(&mut console)?;
    assert_eq!(
        console.lines(),
        &["Invalid input! Please enter an integer value."]
    );
    Ok(())
}

#[test]
fn test_reminder_high_and_time_bound() -> Result<()> {
    let mut console = ScriptedConsole::new(["Submit report", "High", "YES"]);
    let drill = ReminderDrill {
        task: None,
        priority: None,
        time_bound: None,
    };
    drill.run(&mut console)?;

    assert_eq!(
        console.prompts(),
        &[
            "Enter your task: ",
            "Priority (high/medium/low): ",
            "Is it time-bound? (yes/no): ",
        ]
    );
    assert_eq!(
        console.lines(),
        &["Reminder: 'Submit report' is a high priority task that requires immediate attention today!"]
    );
    Ok(())
}

#[test]
fn test_reminder_unknown_priority() -> Result<()> {
    let mut console = ScriptedConsole::default();
    let drill = ReminderDrill {
        task: Some("Water plants".to_string()),
        priority: Some("unknown".to_string()),
        time_bound: Some("no".to_string()),
    };
    drill.run(&mut console)?;

    assert_eq!(
        console.lines(),
        &["Invalid priority. Please enter high, medium, or low."]
    );
    Ok(())
}

#[test]
fn test_reminder_priority_with_leading_space_is_invalid() -> Result<()> {
    let mut console = ScriptedConsole::new(["Stretch", " high", "yes"]);
    let drill = ReminderDrill {
        task: None,
        priority: None,
        time_bound: None,
    };
    drill.run(&mut console)?;

    assert_eq!(
        console.lines(),
        &["Invalid priority. Please enter high, medium, or low."]
    );
    Ok(())
}
