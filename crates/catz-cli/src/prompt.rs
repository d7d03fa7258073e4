use std::io::{self, BufRead, Write};

use catz_core::model::{EnumDescriptor, EnumMember};
use catz_core::registry::Prompt;
use catz_core::CoreError;

/// A line-at-a-time [`Prompt`] over any reader and writer.
///
/// An empty answer keeps the current value; end of input ends the page.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "\n== {title} ==")
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn list_options(&mut self, options: &EnumDescriptor, marked: &[EnumMember]) -> io::Result<()> {
        for member in options.members() {
            let mark = if marked.contains(&member) { "*" } else { " " };
            writeln!(self.output, " {mark} {} {}", member.value, member.name)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn scale(&mut self, prompt: &str, current: i64) -> Result<i64, CoreError> {
        loop {
            write!(self.output, "{prompt}")?;
            if current != -1 {
                write!(self.output, " (was {current})")?;
            }
            write!(self.output, " [1-4] ")?;

            let Some(answer) = self.read_line()? else {
                return Ok(current);
            };
            if answer.is_empty() && current != -1 {
                return Ok(current);
            }
            if let Ok(n @ 1..=4) = answer.parse::<i64>() {
                return Ok(n);
            }
        }
    }

    fn text_list(&mut self, prompt: &str, mut current: Vec<String>) -> Result<Vec<String>, CoreError> {
        writeln!(self.output, "{prompt} (empty line to finish)")?;
        for existing in &current {
            writeln!(self.output, "  {existing}")?;
        }
        loop {
            write!(self.output, "> ")?;
            match self.read_line()? {
                Some(entry) if !entry.is_empty() => current.push(entry),
                _ => return Ok(current),
            }
        }
    }

    fn single_select(
        &mut self,
        options: &EnumDescriptor,
        current: &EnumMember,
    ) -> Result<EnumMember, CoreError> {
        self.list_options(options, std::slice::from_ref(current))?;
        loop {
            write!(self.output, "{} [{}] ", options.name(), current.value)?;
            let answer = match self.read_line()? {
                Some(a) if !a.is_empty() => a,
                _ => return Ok(current.clone()),
            };
            if let Some(member) = options.resolve(&answer) {
                return Ok(member);
            }
        }
    }

    fn multi_select(
        &mut self,
        options: &EnumDescriptor,
        mut current: Vec<EnumMember>,
    ) -> Result<Vec<EnumMember>, CoreError> {
        loop {
            self.list_options(options, &current)?;
            write!(self.output, "toggle (empty line to finish) ")?;
            let answer = match self.read_line()? {
                Some(a) if !a.is_empty() => a,
                _ => return Ok(current),
            };
            let Some(member) = options.resolve(&answer) else {
                continue;
            };
            match current.iter().position(|m| *m == member) {
                Some(i) => {
                    current.remove(i);
                }
                None => current.push(member),
            }
        }
    }
}
