/// Scans `$source` and compares `(type, lexeme, line)` for every token,
/// including the trailing EOF. Evaluates to the diagnostics collected.
#[macro_export]
macro_rules! assert_tokens {
  ($source:expr, [$(($token_type:ident, $lexeme:expr, $line:expr)),* $(,)?]) => {{
    let mut diagnostics = lox::diagnostics::Diagnostics::new();
    let tokens = lox::scanner::scan($source, &mut diagnostics);
    let actual: Vec<(lox::ast::tokens::TokenType, &str, usize)> = tokens
      .iter()
      .map(|t| (t.token_type, t.lexeme.as_str(), t.line))
      .collect();
    let expected: Vec<(lox::ast::tokens::TokenType, &str, usize)> =
      vec![$((lox::ast::tokens::TokenType::$token_type, $lexeme, $line)),*];
    println!("scan result: {:?}", actual);
    assert_eq!(actual, expected);
    diagnostics
  }};
}

/// Scans `$source` and checks that exactly the given errors were reported,
/// in order. Evaluates to the tokens produced.
#[macro_export]
macro_rules! assert_scan_err {
  ($source:expr, $($expected:expr),+ $(,)?) => {{
    let mut diagnostics = lox::diagnostics::Diagnostics::new();
    let tokens = lox::scanner::scan($source, &mut diagnostics);
    let expected: Vec<lox::diagnostics::Diagnostic> = vec![$({
      let err: lox::diagnostics::ScanError = $expected;
      lox::diagnostics::Diagnostic {
        line: err.line(),
        location: String::new(),
        message: err.to_string(),
      }
    }),+];
    assert!(lox::diagnostics::Reporter::had_error(&diagnostics));
    assert_eq!(diagnostics.entries(), expected.as_slice());
    tokens
  }};
}
