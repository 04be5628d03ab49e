use crate::domain::ports::Console;
use crate::utils::error::{DrillError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Console over any reader/writer pair; `StdConsole` is the process terminal.
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

pub type StdConsole = TerminalConsole<std::io::StdinLock<'static>, std::io::Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        TerminalConsole::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DrillError::InputClosed {
                prompt: message.trim_end().to_string(),
            });
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

/// In-memory console: answers prompts from a queue and records everything shown.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    lines: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines printed with `say`, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> Result<String> {
        self.prompts.push(message.to_string());
        self.inputs.pop_front().ok_or_else(|| DrillError::InputClosed {
            prompt: message.trim_end().to_string(),
        })
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
