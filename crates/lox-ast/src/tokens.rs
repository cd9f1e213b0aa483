use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
  // single-character tokens
  LeftParen,
  RightParen,
  LeftBrace,
  RightBrace,
  Comma,
  Dot,
  Minus,
  Plus,
  Semicolon,
  Slash,
  Star,

  // one or two character tokens
  Bang,
  BangEqual,
  Equal,
  EqualEqual,
  Greater,
  GreaterEqual,
  Less,
  LessEqual,

  // literals
  Identifier,
  String,
  Number,

  // keywords
  And,
  Class,
  Else,
  False,
  Fun,
  For,
  If,
  Nil,
  Or,
  Print,
  Return,
  Super,
  This,
  True,
  Var,
  While,

  EOF,
}
impl TokenType {
  /// Looks up a reserved word. Matching is exact and case-sensitive.
  pub fn keyword(text: &str) -> Option<TokenType> {
    Some(match text {
      "and" => TokenType::And,
      "class" => TokenType::Class,
      "else" => TokenType::Else,
      "false" => TokenType::False,
      "for" => TokenType::For,
      "fun" => TokenType::Fun,
      "if" => TokenType::If,
      "nil" => TokenType::Nil,
      "or" => TokenType::Or,
      "print" => TokenType::Print,
      "return" => TokenType::Return,
      "super" => TokenType::Super,
      "this" => TokenType::This,
      "true" => TokenType::True,
      "var" => TokenType::Var,
      "while" => TokenType::While,
      _ => return None,
    })
  }

  pub fn is_keyword(&self) -> bool {
    matches!(
      self,
      TokenType::And
        | TokenType::Class
        | TokenType::Else
        | TokenType::False
        | TokenType::Fun
        | TokenType::For
        | TokenType::If
        | TokenType::Nil
        | TokenType::Or
        | TokenType::Print
        | TokenType::Return
        | TokenType::Super
        | TokenType::This
        | TokenType::True
        | TokenType::Var
        | TokenType::While
    )
  }

  /// The upper-snake name used in token dumps, e.g. `BANG_EQUAL`.
  pub fn name(&self) -> &'static str {
    match self {
      TokenType::LeftParen => "LEFT_PAREN",
      TokenType::RightParen => "RIGHT_PAREN",
      TokenType::LeftBrace => "LEFT_BRACE",
      TokenType::RightBrace => "RIGHT_BRACE",
      TokenType::Comma => "COMMA",
      TokenType::Dot => "DOT",
      TokenType::Minus => "MINUS",
      TokenType::Plus => "PLUS",
      TokenType::Semicolon => "SEMICOLON",
      TokenType::Slash => "SLASH",
      TokenType::Star => "STAR",
      TokenType::Bang => "BANG",
      TokenType::BangEqual => "BANG_EQUAL",
      TokenType::Equal => "EQUAL",
      TokenType::EqualEqual => "EQUAL_EQUAL",
      TokenType::Greater => "GREATER",
      TokenType::GreaterEqual => "GREATER_EQUAL",
      TokenType::Less => "LESS",
      TokenType::LessEqual => "LESS_EQUAL",
      TokenType::Identifier => "IDENTIFIER",
      TokenType::String => "STRING",
      TokenType::Number => "NUMBER",
      TokenType::And => "AND",
      TokenType::Class => "CLASS",
      TokenType::Else => "ELSE",
      TokenType::False => "FALSE",
      TokenType::Fun => "FUN",
      TokenType::For => "FOR",
      TokenType::If => "IF",
      TokenType::Nil => "NIL",
      TokenType::Or => "OR",
      TokenType::Print => "PRINT",
      TokenType::Return => "RETURN",
      TokenType::Super => "SUPER",
      TokenType::This => "THIS",
      TokenType::True => "TRUE",
      TokenType::Var => "VAR",
      TokenType::While => "WHILE",
      TokenType::EOF => "EOF",
    }
  }
}
impl fmt::Display for TokenType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
  None,
  Number(f64),
  Text(String),
}
impl Default for Literal {
  fn default() -> Self {
    Literal::None
  }
}
impl fmt::Display for Literal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Literal::None => Ok(()),
      Literal::Number(num) => write!(f, "{}", num),
      Literal::Text(text) => write!(f, "{}", text),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub token_type: TokenType,
  pub lexeme: String,
  pub literal: Literal,
  pub line: usize,
}
impl Token {
  pub fn new<S>(token_type: TokenType, lexeme: S, line: usize) -> Self
  where
    S: Into<String>,
  {
    Self {
      token_type,
      lexeme: lexeme.into(),
      literal: Literal::None,
      line,
    }
  }

  pub fn with_literal<S>(token_type: TokenType, lexeme: S, literal: Literal, line: usize) -> Self
  where
    S: Into<String>,
  {
    Self {
      token_type,
      lexeme: lexeme.into(),
      literal,
      line,
    }
  }

  pub fn eof(line: usize) -> Self {
    Self::new(TokenType::EOF, "", line)
  }
}
impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {} {}", self.token_type, self.lexeme, self.literal)
  }
}
