//! Line-oriented prompt over any reader/writer pair

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Numbered menu
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub title: &'static str,
    pub options: &'static [&'static str],
}

impl Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        write!(f, "{}", self.title)?;
        for (idx, option) in self.options.iter().enumerate() {
            write!(f, "\n{}. {}", idx + 1, option)?;
        }
        Ok(())
    }
}

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `label` and read one line without its terminator. End of input
    /// surfaces as an `UnexpectedEof` I/O error.
    pub fn ask(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    pub fn ask_number<T: FromStr>(&mut self, label: &str) -> AppResult<T> {
        let raw = self.ask(label)?;
        raw.trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid number", raw)))
    }

    /// Optional field: blank input is `None`.
    pub fn ask_optional(&mut self, label: &str) -> AppResult<Option<String>> {
        let raw = self.ask(label)?;
        Ok(Some(raw).filter(|s| !s.trim().is_empty()))
    }

    /// Show `menu` and read a 1-based choice within its range.
    pub fn choose(&mut self, menu: &Menu) -> AppResult<usize> {
        self.say(menu)?;
        let raw = self.ask("Enter your choice: ")?;
        match raw.trim().parse::<usize>() {
            Ok(n) if (1..=menu.options.len()).contains(&n) => Ok(n),
            _ => Err(AppError::InvalidSelection(raw)),
        }
    }

    /// Read a 1-based position into a list of `len` entries.
    pub fn pick(&mut self, label: &str, len: usize) -> AppResult<usize> {
        let raw = self.ask(label)?;
        match raw.trim().parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
            _ => Err(AppError::InvalidSelection(raw)),
        }
    }
}
