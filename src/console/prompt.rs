use std::io::{BufRead, Write};
use std::str::FromStr;
use crate::core::library::{LibraryError, LibraryResult};

// Prompter reads one trimmed line per question; None means the input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn say(&mut self, text: &str) -> LibraryResult<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn ask(&mut self, label: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn ask_number<T: FromStr>(&mut self, label: &str) -> LibraryResult<Option<T>> {
        match self.ask(label)? {
            Some(text) => text.parse::<T>()
                .map(Some)
                .map_err(|_| LibraryError::validation("Invalid number! Try again.", Some(text))),
            None => Ok(None),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
