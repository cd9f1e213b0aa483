use lox_ast::tokens::Token;

pub fn dump_tokens(tokens: &[Token], name: &str) {
  println!("== {} ==", name);

  for (i, token) in tokens.iter().enumerate() {
    println!("{}", format_token(token, i));
  }
}

pub fn format_token(token: &Token, offset: usize) -> String {
  format!("{:0>4} #{:0>4} {}", offset, token.line, token)
}
