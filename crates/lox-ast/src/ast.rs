use crate::tokens::{Literal, Token};

/// An operation over every kind of [Expr].
///
/// Implementors provide one handler per variant; [Expr::accept] routes each
/// node to the handler matching its own kind.
pub trait Visitor<R> {
  fn visit_assign(&mut self, expr: &AssignExpr) -> R;
  fn visit_binary(&mut self, expr: &BinaryExpr) -> R;
  fn visit_call(&mut self, expr: &CallExpr) -> R;
  fn visit_get(&mut self, expr: &GetExpr) -> R;
  fn visit_grouping(&mut self, expr: &GroupingExpr) -> R;
  fn visit_literal(&mut self, expr: &LiteralExpr) -> R;
  fn visit_logical(&mut self, expr: &LogicalExpr) -> R;
  fn visit_set(&mut self, expr: &SetExpr) -> R;
  fn visit_super(&mut self, expr: &SuperExpr) -> R;
  fn visit_this(&mut self, expr: &ThisExpr) -> R;
  fn visit_unary(&mut self, expr: &UnaryExpr) -> R;
  fn visit_variable(&mut self, expr: &VariableExpr) -> R;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Assign(AssignExpr),
  Binary(BinaryExpr),
  Call(CallExpr),
  Get(GetExpr),
  Grouping(GroupingExpr),
  Literal(LiteralExpr),
  Logical(LogicalExpr),
  Set(SetExpr),
  Super(SuperExpr),
  This(ThisExpr),
  Unary(UnaryExpr),
  Variable(VariableExpr),
}
impl Expr {
  pub fn accept<R, V>(&self, visitor: &mut V) -> R
  where
    V: Visitor<R> + ?Sized,
  {
    match self {
      Expr::Assign(expr) => visitor.visit_assign(expr),
      Expr::Binary(expr) => visitor.visit_binary(expr),
      Expr::Call(expr) => visitor.visit_call(expr),
      Expr::Get(expr) => visitor.visit_get(expr),
      Expr::Grouping(expr) => visitor.visit_grouping(expr),
      Expr::Literal(expr) => visitor.visit_literal(expr),
      Expr::Logical(expr) => visitor.visit_logical(expr),
      Expr::Set(expr) => visitor.visit_set(expr),
      Expr::Super(expr) => visitor.visit_super(expr),
      Expr::This(expr) => visitor.visit_this(expr),
      Expr::Unary(expr) => visitor.visit_unary(expr),
      Expr::Variable(expr) => visitor.visit_variable(expr),
    }
  }

  pub fn assign(name: Token, value: Expr) -> Self {
    Expr::Assign(AssignExpr {
      name,
      value: Box::new(value),
    })
  }

  pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
    Expr::Binary(BinaryExpr {
      left: Box::new(left),
      operator,
      right: Box::new(right),
    })
  }

  pub fn call(callee: Expr, paren: Token, arguments: Vec<Expr>) -> Self {
    Expr::Call(CallExpr {
      callee: Box::new(callee),
      paren,
      arguments,
    })
  }

  pub fn get(object: Expr, name: Token) -> Self {
    Expr::Get(GetExpr {
      object: Box::new(object),
      name,
    })
  }

  pub fn grouping(expression: Expr) -> Self {
    Expr::Grouping(GroupingExpr {
      expression: Box::new(expression),
    })
  }

  pub fn literal<V>(value: V) -> Self
  where
    V: Into<LiteralValue>,
  {
    Expr::Literal(LiteralExpr {
      value: value.into(),
    })
  }

  pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
    Expr::Logical(LogicalExpr {
      left: Box::new(left),
      operator,
      right: Box::new(right),
    })
  }

  pub fn set(object: Expr, name: Token, value: Expr) -> Self {
    Expr::Set(SetExpr {
      object: Box::new(object),
      name,
      value: Box::new(value),
    })
  }

  pub fn super_(keyword: Token, method: Token) -> Self {
    Expr::Super(SuperExpr { keyword, method })
  }

  pub fn this(keyword: Token) -> Self {
    Expr::This(ThisExpr { keyword })
  }

  pub fn unary(operator: Token, right: Expr) -> Self {
    Expr::Unary(UnaryExpr {
      operator,
      right: Box::new(right),
    })
  }

  pub fn variable(name: Token) -> Self {
    Expr::Variable(VariableExpr { name })
  }
}

/// `name = value`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
  pub name: Token,
  pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
  pub left: Box<Expr>,
  pub operator: Token,
  pub right: Box<Expr>,
}

/// `callee(arguments...)`; `paren` is the closing parenthesis, kept for
/// error locations.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
  pub callee: Box<Expr>,
  pub paren: Token,
  pub arguments: Vec<Expr>,
}

/// Property access, `object.name`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetExpr {
  pub object: Box<Expr>,
  pub name: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
  pub expression: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
  pub value: LiteralValue,
}

/// Short-circuiting `and` / `or`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
  pub left: Box<Expr>,
  pub operator: Token,
  pub right: Box<Expr>,
}

/// Property assignment, `object.name = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpr {
  pub object: Box<Expr>,
  pub name: Token,
  pub value: Box<Expr>,
}

/// `super.method`
#[derive(Debug, Clone, PartialEq)]
pub struct SuperExpr {
  pub keyword: Token,
  pub method: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThisExpr {
  pub keyword: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
  pub operator: Token,
  pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
  pub name: Token,
}

/// A value written directly in source.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
  Nil,
  Boolean(bool),
  Number(f64),
  String(String),
}
impl From<&Literal> for LiteralValue {
  fn from(literal: &Literal) -> Self {
    match literal {
      Literal::None => LiteralValue::Nil,
      Literal::Number(num) => LiteralValue::Number(*num),
      Literal::Text(text) => LiteralValue::String(text.clone()),
    }
  }
}
impl From<bool> for LiteralValue {
  fn from(value: bool) -> Self {
    LiteralValue::Boolean(value)
  }
}
impl From<f64> for LiteralValue {
  fn from(value: f64) -> Self {
    LiteralValue::Number(value)
  }
}
impl From<&str> for LiteralValue {
  fn from(value: &str) -> Self {
    LiteralValue::String(value.to_string())
  }
}
impl From<String> for LiteralValue {
  fn from(value: String) -> Self {
    LiteralValue::String(value)
  }
}
