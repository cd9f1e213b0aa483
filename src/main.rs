use std::{
  env,
  io::{self, Write},
  process,
};

use lox::{
  ast::tokens::Token,
  debug::dump_tokens,
  diagnostics::{Diagnostics, Reporter},
  scan_file,
  scanner::scan,
  LoxError, LoxResult, DEBUG, SUPER_DEBUG,
};
use rustyline::{
  error::ReadlineError,
  validate::{MatchingBracketValidator, ValidationContext, ValidationResult, Validator},
  Editor, Result,
};
use rustyline_derive::{Completer, Helper, Highlighter, Hinter};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Completer, Helper, Highlighter, Hinter)]
struct InputValidator {
  brackets: MatchingBracketValidator,
}

impl Validator for InputValidator {
  fn validate(&self, ctx: &mut ValidationContext) -> Result<ValidationResult> {
    self.brackets.validate(ctx)
  }
}

fn main() {
  let args: Vec<String> = env::args().skip(1).collect();
  let result = match args.as_slice() {
    [] => run_prompt(),
    [path] => run_file(path),
    _ => {
      println!("Usage: lox-cli [script]");
      process::exit(64);
    }
  };

  if let Err(err) = result {
    if !matches!(err, LoxError::ScanFailed(_)) {
      let _ = print_error(format!("{}", err));
    }
    process::exit(exit_code(&err));
  }
}

fn exit_code(err: &LoxError) -> i32 {
  match err {
    LoxError::ScanFailed(_) => 65,
    LoxError::Unknown => 70,
    LoxError::Io { .. } => 74,
  }
}

fn run_file(path: &str) -> LoxResult<()> {
  let mut diagnostics = Diagnostics::new();
  let tokens = scan_file(path, &mut diagnostics)?;
  let error_count = diagnostics.len();
  report(&tokens, path, &mut diagnostics)?;

  if diagnostics.had_error() {
    Err(LoxError::ScanFailed(error_count))
  } else {
    Ok(())
  }
}

fn run_prompt() -> LoxResult<()> {
  // set up editor
  let helper = InputValidator {
    brackets: MatchingBracketValidator::new(),
  };
  let mut rl = Editor::new();
  rl.set_helper(Some(helper));

  // one collector for the whole session, so its error flag outlives each line
  let mut diagnostics = Diagnostics::new();

  println!("Lox scanner REPL; enter source to see its tokens.");
  loop {
    match rl.readline("> ") {
      Ok(input) => {
        rl.add_history_entry(&input);
        let tokens = scan(&input, &mut diagnostics);
        report(&tokens, "repl", &mut diagnostics)?;
      }
      Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
        println!("Stopping REPL...");
        break Ok(());
      }
      Err(_) => {
        print_error("Could not read input from console.".to_string())
          .map_err(|_| LoxError::Unknown)?;
        break Ok(());
      }
    }
  }
}

/// Prints the scanned tokens, then any diagnostics not yet shown.
fn report(tokens: &[Token], name: &str, diagnostics: &mut Diagnostics) -> LoxResult<()> {
  if SUPER_DEBUG {
    dump_tokens(tokens, name);
  } else {
    for token in tokens {
      println!("{}", token);
    }
  }

  if DEBUG {
    println!("# {} tokens, {} errors", tokens.len(), diagnostics.len());
  }

  print_diagnostics(diagnostics).map_err(|_| LoxError::Unknown)?;
  diagnostics.take_entries();
  Ok(())
}

fn print_diagnostics(diagnostics: &Diagnostics) -> io::Result<()> {
  if diagnostics.is_empty() {
    return Ok(());
  }

  let mut stderr = StandardStream::stderr(ColorChoice::Auto);
  stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
  diagnostics.emit(&mut stderr)?;
  stderr.reset()
}

fn print_error(msg: String) -> io::Result<()> {
  let mut stderr = StandardStream::stderr(ColorChoice::Auto);
  stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
  writeln!(&mut stderr, "[!] {}", msg)?;
  stderr.reset()
}
