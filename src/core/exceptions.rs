use crate::core::{value_or_prompt, Console, Drill};
use crate::utils::error::{DrillError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Reads the whole file; the handle is closed when this returns.
pub fn read_file_contents<P: AsRef<Path>>(path: P) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

pub fn parse_number(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| DrillError::InvalidNumber {
        input: trimmed.to_string(),
    })
}

pub fn check_value(value: f64, max_value: f64) -> Result<f64> {
    if value > max_value {
        return Err(DrillError::ValueTooHigh {
            value,
            message: format!("The value is too high! Must be {} or less.", max_value),
        });
    }
    Ok(value)
}

pub struct ReadFileDrill {
    pub path: Option<String>,
}

impl Drill for ReadFileDrill {
    fn name(&self) -> &'static str {
        "read-file"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let filename = value_or_prompt(console, self.path.as_deref(), "Enter a filename: ")?;
        tracing::debug!("Opening {}", filename);

        match read_file_contents(&filename) {
            Ok(content) => console.say(&format!("File contents: {}", content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("File not found: {}", filename);
                console.say(&format!("Error: The file '{}' does not exist.", filename))
            }
            Err(e) => Err(DrillError::IoError(e)),
        }
    }
}

pub struct ValueCheckDrill {
    pub value: Option<String>,
    pub max_value: f64,
}

impl Drill for ValueCheckDrill {
    fn name(&self) -> &'static str {
        "check-value"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let raw = value_or_prompt(console, self.value.as_deref(), "Enter a number: ")?;

        match parse_number(&raw).and_then(|n| check_value(n, self.max_value)) {
            Ok(_) => console.say("Good number!"),
            Err(e @ (DrillError::ValueTooHigh { .. } | DrillError::InvalidNumber { .. })) => {
                tracing::debug!("Rejected input: {:?}", e);
                console.say(&format!("Error: {}", e))
            }
            Err(e) => Err(e),
        }
    }
}
