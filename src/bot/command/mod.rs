//! Chat commands.
//!
//! A message goes through [`parser::parse`], then the [`gate`], then
//! [`dispatch::execute`]. Errors never escape a command: the handler turns
//! them into a single chat reply.

pub mod dispatch;
pub mod gate;
pub mod help;
pub mod parser;

#[cfg(test)]
mod test;

pub use parser::{parse, Command};
