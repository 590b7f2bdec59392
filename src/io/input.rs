use std::{
    fs,
    io::{self, BufRead, Read, Write},
    path::Path,
};

use colored::Colorize;

use crate::{
    io::{
        logger::{self, Status},
        validation,
    },
    zone::{
        dedup::Resolver,
        error::{InputError, ZoneError},
        record::TypedRecord,
    },
};

/// Reads the whole record set until end of input.
pub fn read_records(reader: &mut impl Read) -> Result<String, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

pub fn read_records_from_file(file_path: &Path) -> Result<String, InputError> {
    fs::read_to_string(file_path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            InputError::FileNotFound(file_path.display().to_string())
        } else {
            InputError::from(e)
        }
    })
}

/// Asks questions on `output` and reads one line answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints `question` and returns the answer without its line ending.
    pub fn ask(&mut self, question: &str) -> Result<String, InputError> {
        write!(
            self.output,
            "\n{}",
            logger::format_status(Status::Question, &question)
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask_domain(&mut self) -> Result<String, ZoneError> {
        let answer = self.ask("Domain name for all hosts in the provided zone: ")?;
        validation::validate_domain(&answer)
    }

    /// An empty answer takes `default`.
    pub fn ask_prefix(&mut self, family: &str, default: u32) -> Result<u32, ZoneError> {
        let answer = self.ask(&format!("Prefix length for {family} zones [{default}]: "))?;
        if answer.trim().is_empty() {
            return Ok(default);
        }
        validation::parse_prefix(&answer)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Resolver for Prompter<R, W> {
    fn choose(&mut self, address: &str, candidates: &[&TypedRecord]) -> Result<usize, ZoneError> {
        self.say(&format!(
            "\n{}\n",
            logger::format_status(
                Status::Warning,
                &format!("Duplicated records found for IP '{}':", address.bright_black())
            )
        ))?;
        for (index, record) in candidates.iter().enumerate() {
            self.say(&format!("{index}: {}", record.name()))?;
        }

        let answer = self.ask("Choose which one to keep: ")?;
        answer
            .trim()
            .parse::<usize>()
            .map_err(|_| ZoneError::InvalidSelection {
                input: answer.trim().to_string(),
                candidates: candidates.len(),
            })
    }
}
