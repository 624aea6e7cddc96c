// Parser module for turning Python source into syntax trees

pub mod ast;
mod python;

pub use ast::*;
pub use python::{line_of, PythonParser, SourceTree};
