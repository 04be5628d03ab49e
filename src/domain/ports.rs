use crate::utils::error::Result;

/// Line-oriented terminal I/O used by every drill.
pub trait Console {
    /// Shows `message` and returns the next input line without its newline.
    fn prompt(&mut self, message: &str) -> Result<String>;
    fn say(&mut self, line: &str) -> Result<()>;
}

/// One self-contained teaching script.
pub trait Drill {
    fn name(&self) -> &'static str;
    fn run(&self, console: &mut dyn Console) -> Result<()>;
}

/// Returns `value` when it was supplied up front, otherwise asks for it.
pub fn value_or_prompt(console: &mut dyn Console, value: Option<&str>, message: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v.to_string()),
        None => console.prompt(message),
    }
}
