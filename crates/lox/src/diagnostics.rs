use std::{fmt, io, slice, vec};

use thiserror::Error;

pub type ScanResult<T> = Result<T, ScanError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScanError {
  #[error("Unexpected character '{1}'.")]
  UnexpectedCharacter(usize, char),
  #[error("Unterminated string.")]
  UnterminatedString(usize),
}
impl ScanError {
  pub fn line(&self) -> usize {
    match self {
      ScanError::UnexpectedCharacter(line, _) => *line,
      ScanError::UnterminatedString(line) => *line,
    }
  }
}

/// Receives diagnostics produced while processing source.
pub trait Reporter {
  fn report(&mut self, line: usize, location: &str, message: &str);

  fn error(&mut self, line: usize, message: &str) {
    self.report(line, "", message);
  }

  /// Whether anything has been reported. Once true, stays true.
  fn had_error(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
  pub line: usize,
  /// Empty for lexical errors; `at end` or `at '<lexeme>'` for syntax errors.
  pub location: String,
  pub message: String,
}
impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "[line {}] Error {}: {}",
      self.line, self.location, self.message
    )
  }
}

/// Collects diagnostics in the order they were reported.
#[derive(Debug, Default)]
pub struct Diagnostics {
  entries: Vec<Diagnostic>,
  had_error: bool,
}
impl Diagnostics {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn entries(&self) -> &[Diagnostic] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
    self.entries.iter()
  }

  /// Removes and returns the recorded entries. The error flag is left set.
  pub fn take_entries(&mut self) -> Vec<Diagnostic> {
    std::mem::take(&mut self.entries)
  }

  /// Writes one rendered line per recorded entry.
  pub fn emit<W>(&self, writer: &mut W) -> io::Result<()>
  where
    W: io::Write,
  {
    for diagnostic in &self.entries {
      writeln!(writer, "{}", diagnostic)?;
    }
    Ok(())
  }
}
impl Reporter for Diagnostics {
  fn report(&mut self, line: usize, location: &str, message: &str) {
    self.entries.push(Diagnostic {
      line,
      location: location.to_string(),
      message: message.to_string(),
    });
    self.had_error = true;
  }

  fn had_error(&self) -> bool {
    self.had_error
  }
}
impl IntoIterator for Diagnostics {
  type Item = Diagnostic;
  type IntoIter = vec::IntoIter<Diagnostic>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}
impl<'a> IntoIterator for &'a Diagnostics {
  type Item = &'a Diagnostic;
  type IntoIter = slice::Iter<'a, Diagnostic>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}
