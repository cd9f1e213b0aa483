use lox_ast::tokens::{Literal, Token, TokenType};

use crate::diagnostics::{Reporter, ScanError, ScanResult};

/// Scans all of `source`, sending lexical errors to `reporter`.
pub fn scan<S, R>(source: S, reporter: &mut R) -> Vec<Token>
where
  S: AsRef<str>,
  R: Reporter + ?Sized,
{
  Scanner::new(source.as_ref()).scan_tokens(reporter)
}

pub struct Scanner {
  source: Vec<char>,
  tokens: Vec<Token>,
  start: usize,
  current: usize,
  line: usize,
}
impl Scanner {
  pub fn new(source: &str) -> Self {
    Self {
      source: source.chars().collect(),
      tokens: Vec::new(),
      start: 0,
      current: 0,
      line: 1,
    }
  }

  /// Runs the scan to completion. Always ends with a single EOF token, no
  /// matter how many errors were reported along the way.
  pub fn scan_tokens<R>(mut self, reporter: &mut R) -> Vec<Token>
  where
    R: Reporter + ?Sized,
  {
    while !self.is_at_end() {
      self.start = self.current;
      match self.scan_token() {
        Ok(Some(token)) => self.tokens.push(token),
        Ok(None) => (),
        Err(err) => reporter.error(err.line(), &err.to_string()),
      }
    }

    self.tokens.push(Token::eof(self.line));
    self.tokens
  }

  /// Consumes one lexeme. Whitespace and comments produce no token.
  fn scan_token(&mut self) -> ScanResult<Option<Token>> {
    let current_char = self.advance();
    let token = match current_char {
      '(' => self.make_token(TokenType::LeftParen),
      ')' => self.make_token(TokenType::RightParen),
      '{' => self.make_token(TokenType::LeftBrace),
      '}' => self.make_token(TokenType::RightBrace),
      ',' => self.make_token(TokenType::Comma),
      '.' => self.make_token(TokenType::Dot),
      '-' => self.make_token(TokenType::Minus),
      '+' => self.make_token(TokenType::Plus),
      ';' => self.make_token(TokenType::Semicolon),
      '*' => self.make_token(TokenType::Star),
      '!' => self.make_compound(TokenType::BangEqual, TokenType::Bang),
      '=' => self.make_compound(TokenType::EqualEqual, TokenType::Equal),
      '<' => self.make_compound(TokenType::LessEqual, TokenType::Less),
      '>' => self.make_compound(TokenType::GreaterEqual, TokenType::Greater),
      '/' => {
        if self.current_matches('/') {
          self.skip_line_comment();
          return Ok(None);
        } else if self.current_matches('*') {
          self.skip_block_comment();
          return Ok(None);
        }
        self.make_token(TokenType::Slash)
      }
      ' ' | '\r' | '\t' => return Ok(None),
      '\n' => {
        self.line += 1;
        return Ok(None);
      }
      '"' => self.make_string()?,
      c if c.is_ascii_digit() => self.make_number(),
      c if is_alpha(c) => self.make_identifier(),
      _ => return Err(ScanError::UnexpectedCharacter(self.line, current_char)),
    };
    Ok(Some(token))
  }

  fn peek(&self) -> char {
    self.source.get(self.current).copied().unwrap_or('\0')
  }

  fn peek_next(&self) -> char {
    self.source.get(self.current + 1).copied().unwrap_or('\0')
  }

  fn is_at_end(&self) -> bool {
    self.current >= self.source.len()
  }

  fn advance(&mut self) -> char {
    let current_char = self.source[self.current];
    self.current += 1;
    current_char
  }

  fn current_matches(&mut self, expected: char) -> bool {
    if self.is_at_end() || self.source[self.current] != expected {
      false
    } else {
      self.current += 1;
      true
    }
  }

  fn lexeme(&self) -> String {
    self.source[self.start..self.current].iter().collect()
  }

  fn make_token(&self, token_type: TokenType) -> Token {
    Token::new(token_type, self.lexeme(), self.line)
  }

  fn make_compound(&mut self, with_equal: TokenType, alone: TokenType) -> Token {
    if self.current_matches('=') {
      self.make_token(with_equal)
    } else {
      self.make_token(alone)
    }
  }

  fn skip_line_comment(&mut self) {
    while self.peek() != '\n' && !self.is_at_end() {
      self.advance();
    }
  }

  /// Block comments do not nest; the first `*/` closes. Running off the end
  /// of the source simply ends the comment.
  fn skip_block_comment(&mut self) {
    while !self.is_at_end() {
      if self.peek() == '*' && self.peek_next() == '/' {
        self.current += 2;
        return;
      }
      if self.advance() == '\n' {
        self.line += 1;
      }
    }
  }

  fn make_string(&mut self) -> ScanResult<Token> {
    while self.peek() != '"' && !self.is_at_end() {
      if self.peek() == '\n' {
        self.line += 1;
      }
      self.advance();
    }

    if self.is_at_end() {
      return Err(ScanError::UnterminatedString(self.line));
    }

    // the closing quote
    self.advance();

    let value: String = self.source[(self.start + 1)..(self.current - 1)]
      .iter()
      .collect();
    Ok(Token::with_literal(
      TokenType::String,
      self.lexeme(),
      Literal::Text(value),
      self.line,
    ))
  }

  fn make_number(&mut self) -> Token {
    while self.peek().is_ascii_digit() {
      self.advance();
    }

    // also scan the fractional bit
    if self.peek() == '.' && self.peek_next().is_ascii_digit() {
      self.advance();
      while self.peek().is_ascii_digit() {
        self.advance();
      }
    }

    let lexeme = self.lexeme();
    // digits with at most one inner '.' always parse
    let value = lexeme.parse::<f64>().unwrap_or(f64::NAN);
    Token::with_literal(TokenType::Number, lexeme, Literal::Number(value), self.line)
  }

  fn make_identifier(&mut self) -> Token {
    while is_alpha_numeric(self.peek()) {
      self.advance();
    }

    let text = self.lexeme();
    let token_type = TokenType::keyword(&text).unwrap_or(TokenType::Identifier);
    Token::new(token_type, text, self.line)
  }
}

fn is_alpha(c: char) -> bool {
  c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
  is_alpha(c) || c.is_ascii_digit()
}
