use lox::{
  ast::tokens::{Literal, TokenType},
  diagnostics::{Diagnostics, Reporter},
  scanner::scan,
};

mod common;

#[test]
fn decimal_number() {
  let mut diagnostics = Diagnostics::new();
  let tokens = scan("123.45", &mut diagnostics);
  assert_eq!(tokens.len(), 2);
  assert_eq!(tokens[0].token_type, TokenType::Number);
  assert_eq!(tokens[0].lexeme, "123.45");
  assert_eq!(tokens[0].literal, Literal::Number(123.45));
}

#[test]
fn integer_number() {
  let mut diagnostics = Diagnostics::new();
  let tokens = scan("7", &mut diagnostics);
  assert_eq!(tokens[0].literal, Literal::Number(7.0));
}

#[test]
fn trailing_dot_is_left_alone() {
  let diagnostics = assert_tokens!("123.", [(Number, "123", 1), (Dot, ".", 1), (EOF, "", 1)]);
  assert!(!diagnostics.had_error());

  let mut diagnostics = Diagnostics::new();
  let tokens = scan("123.", &mut diagnostics);
  assert_eq!(tokens[0].literal, Literal::Number(123.0));
  assert_eq!(tokens[1].literal, Literal::None);
}

#[test]
fn leading_dot_is_not_part_of_number() {
  assert_tokens!(".5", [(Dot, ".", 1), (Number, "5", 1), (EOF, "", 1)]);
}

#[test]
fn only_one_fraction() {
  assert_tokens!(
    "1.2.3",
    [(Number, "1.2", 1), (Dot, ".", 1), (Number, "3", 1), (EOF, "", 1)]
  );
}

#[test]
fn method_call_on_number() {
  assert_tokens!(
    "12.abs",
    [
      (Number, "12", 1),
      (Dot, ".", 1),
      (Identifier, "abs", 1),
      (EOF, "", 1),
    ]
  );
}

#[test]
fn string_literal() {
  let mut diagnostics = Diagnostics::new();
  let tokens = scan(r#"print "howdy!";"#, &mut diagnostics);
  assert_eq!(tokens[1].token_type, TokenType::String);
  assert_eq!(tokens[1].lexeme, "\"howdy!\"");
  assert_eq!(tokens[1].literal, Literal::Text("howdy!".to_string()));
  assert_eq!(tokens[2].token_type, TokenType::Semicolon);
}

#[test]
fn multi_line_string() {
  assert_tokens!(
    "\"one\ntwo\" x",
    [(String, "\"one\ntwo\"", 2), (Identifier, "x", 2), (EOF, "", 2)]
  );
}

#[test]
fn strings_keep_comment_markers() {
  let mut diagnostics = Diagnostics::new();
  let tokens = scan("\"// not /* a comment\"", &mut diagnostics);
  assert_eq!(
    tokens[0].literal,
    Literal::Text("// not /* a comment".to_string())
  );
}

#[test]
fn non_literal_tokens_carry_no_value() {
  let mut diagnostics = Diagnostics::new();
  for token in scan("true nil x + (", &mut diagnostics) {
    assert_eq!(token.literal, Literal::None);
  }
}
