//! Interactive questions on stdin/stdout.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use crate::{error::SweepError, sweep_err, sweep_try};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of output for the user
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), SweepError> {
        sweep_try!(writeln!(self.output, "{message}"));
        Ok(())
    }

    /// Shows the question and reads one answer with surrounding whitespace removed.
    /// Returns `None` if the input has ended.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, SweepError> {
        sweep_try!(write!(self.output, "{question}"));
        sweep_try!(self.output.flush());
        let mut line = String::new();
        let read = sweep_try!(self.input.read_line(&mut line));
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Asks for the directory to scan. An empty answer selects `default`.
    pub fn target_directory(&mut self, default: &Path) -> Result<PathBuf, SweepError> {
        let question = format!(
            "Enter the folder to scan (leave empty for {}): ",
            default.display()
        );
        match self.ask(&question)? {
            None => Err(sweep_err!("no folder was entered")),
            Some(answer) if answer.is_empty() => Ok(default.to_path_buf()),
            Some(answer) => Ok(PathBuf::from(answer)),
        }
    }

    /// Yes/no question. Only `y` or `Y` counts as yes; the end of input counts as no.
    pub fn confirm(&mut self, question: &str) -> Result<bool, SweepError> {
        let answer = self.ask(&format!("{question} (y/n): "))?;
        Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y")))
    }

    /// Waits for Enter so a console window opened just for this run stays visible
    pub fn pause(&mut self) -> Result<(), SweepError> {
        self.ask("Press Enter to exit...")?;
        Ok(())
    }

    /// Direct access to the output, for reports that are not questions
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Gives back the output stream, e.g. to inspect what was written in tests
    pub fn into_output(self) -> W {
        self.output
    }
}
