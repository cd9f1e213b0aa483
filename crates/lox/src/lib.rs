use std::{io, path::PathBuf};

use thiserror::Error;

pub use lox_ast as ast;

pub mod debug;
pub mod diagnostics;
pub mod scanner;

#[cfg(not(feature = "debug"))]
pub const DEBUG: bool = false;
#[cfg(feature = "debug")]
pub const DEBUG: bool = true;

#[cfg(not(feature = "super_debug"))]
pub const SUPER_DEBUG: bool = false;
#[cfg(feature = "super_debug")]
pub const SUPER_DEBUG: bool = true;

pub type LoxResult<T> = Result<T, LoxError>;

#[derive(Error, Debug)]
pub enum LoxError {
  #[error("An unknown error has occurred.")]
  Unknown,
  #[error("Could not read \"{}\": {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("Scanning reported {0} error(s).")]
  ScanFailed(usize),
}

/// Reads and scans the file at `path`.
///
/// Lexical errors land in `diagnostics`; only failing to read the file is an
/// `Err` here.
pub fn scan_file<P, R>(path: P, reporter: &mut R) -> LoxResult<Vec<ast::tokens::Token>>
where
  P: Into<PathBuf>,
  R: diagnostics::Reporter + ?Sized,
{
  let path = path.into();
  let source = std::fs::read_to_string(&path).map_err(|source| LoxError::Io { path, source })?;
  Ok(scanner::scan(source, reporter))
}
