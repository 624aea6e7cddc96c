//! Docwriter - Generate skeletal docstrings from Python source
//!
//! Parses a Python module, finds its classes, methods and functions, and
//! renders a documentation template for each from its signature alone.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod parser;

// Re-export main types
pub use analysis::DocAnalyzer;
pub use config::Config;
pub use error::{Error, Result};
pub use generator::DocGenerator;
pub use output::{aggregate, Report, ReportItem, TemplateFormatter};
pub use parser::{Argument, ClassSignature, FunctionSignature, ModuleDocs, PythonParser, SourceTree};
