use crate::ast::{
  AssignExpr, BinaryExpr, CallExpr, Expr, GetExpr, GroupingExpr, LiteralExpr, LiteralValue,
  LogicalExpr, SetExpr, SuperExpr, ThisExpr, UnaryExpr, VariableExpr, Visitor,
};

/// Renders an expression tree as fully parenthesized prefix text, e.g.
/// `(* (- 123) (group 45.67))`.
#[derive(Debug, Default)]
pub struct AstPrinter;
impl AstPrinter {
  pub fn new() -> Self {
    Self
  }

  pub fn print(&mut self, expr: &Expr) -> String {
    expr.accept(self)
  }

  fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
    let mut output = format!("({}", name);
    for expr in exprs {
      output.push(' ');
      output.push_str(&expr.accept(self));
    }
    output.push(')');
    output
  }
}

impl Visitor<String> for AstPrinter {
  fn visit_assign(&mut self, expr: &AssignExpr) -> String {
    let name = format!("= {}", expr.name.lexeme);
    self.parenthesize(&name, &[&*expr.value])
  }

  fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
    self.parenthesize(&expr.operator.lexeme, &[&*expr.left, &*expr.right])
  }

  fn visit_call(&mut self, expr: &CallExpr) -> String {
    let mut exprs: Vec<&Expr> = vec![expr.callee.as_ref()];
    exprs.extend(expr.arguments.iter());
    self.parenthesize("call", &exprs)
  }

  fn visit_get(&mut self, expr: &GetExpr) -> String {
    let object = expr.object.accept(self);
    format!("(. {} {})", object, expr.name.lexeme)
  }

  fn visit_grouping(&mut self, expr: &GroupingExpr) -> String {
    self.parenthesize("group", &[&*expr.expression])
  }

  fn visit_literal(&mut self, expr: &LiteralExpr) -> String {
    match &expr.value {
      LiteralValue::Nil => "nil".to_string(),
      LiteralValue::Boolean(value) => value.to_string(),
      LiteralValue::Number(num) => num.to_string(),
      LiteralValue::String(text) => text.clone(),
    }
  }

  fn visit_logical(&mut self, expr: &LogicalExpr) -> String {
    self.parenthesize(&expr.operator.lexeme, &[&*expr.left, &*expr.right])
  }

  fn visit_set(&mut self, expr: &SetExpr) -> String {
    let object = expr.object.accept(self);
    let value = expr.value.accept(self);
    format!("(.= {} {} {})", object, expr.name.lexeme, value)
  }

  fn visit_super(&mut self, expr: &SuperExpr) -> String {
    format!("(super {})", expr.method.lexeme)
  }

  fn visit_this(&mut self, _expr: &ThisExpr) -> String {
    "this".to_string()
  }

  fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
    self.parenthesize(&expr.operator.lexeme, &[&*expr.right])
  }

  fn visit_variable(&mut self, expr: &VariableExpr) -> String {
    expr.name.lexeme.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokens::{Token, TokenType};

  fn token(token_type: TokenType, lexeme: &str) -> Token {
    Token::new(token_type, lexeme, 1)
  }

  #[test]
  fn print_binary_tree() {
    let expr = Expr::binary(
      Expr::unary(token(TokenType::Minus, "-"), Expr::literal(123.0)),
      token(TokenType::Star, "*"),
      Expr::grouping(Expr::literal(45.67)),
    );
    assert_eq!(AstPrinter::new().print(&expr), "(* (- 123) (group 45.67))");
  }

  #[test]
  fn print_property_access() {
    let object = Expr::variable(token(TokenType::Identifier, "point"));
    let get = Expr::get(object.clone(), token(TokenType::Identifier, "x"));
    assert_eq!(AstPrinter::new().print(&get), "(. point x)");

    let set = Expr::set(object, token(TokenType::Identifier, "y"), Expr::literal(2.0));
    assert_eq!(AstPrinter::new().print(&set), "(.= point y 2)");
  }

  #[test]
  fn print_calls_and_keywords() {
    let callee = Expr::super_(
      token(TokenType::Super, "super"),
      token(TokenType::Identifier, "init"),
    );
    let call = Expr::call(
      callee,
      token(TokenType::RightParen, ")"),
      vec![Expr::this(token(TokenType::This, "this")), Expr::literal("x")],
    );
    assert_eq!(AstPrinter::new().print(&call), "(call (super init) this x)");

    let empty = Expr::call(
      Expr::variable(token(TokenType::Identifier, "clock")),
      token(TokenType::RightParen, ")"),
      vec![],
    );
    assert_eq!(AstPrinter::new().print(&empty), "(call clock)");
  }

  #[test]
  fn print_assignment_and_logic() {
    let expr = Expr::assign(
      token(TokenType::Identifier, "ok"),
      Expr::logical(
        Expr::literal(LiteralValue::Nil),
        token(TokenType::Or, "or"),
        Expr::literal(false),
      ),
    );
    assert_eq!(AstPrinter::new().print(&expr), "(= ok (or nil false))");
  }
}
