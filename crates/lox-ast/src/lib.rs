pub mod ast;
pub mod printer;
pub mod tokens;
