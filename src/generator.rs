//! One-file pipeline: parse, analyze, render, aggregate

use crate::analysis::DocAnalyzer;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::{aggregate, Report, TemplateFormatter};
use crate::parser::{ModuleDocs, PythonParser};
use std::path::Path;
use tracing::debug;

/// Generates skeletal documentation for Python source files
pub struct DocGenerator {
    parser: PythonParser,
    analyzer: DocAnalyzer,
    formatter: TemplateFormatter,
    format: OutputFormat,
    separator_width: usize,
}

impl DocGenerator {
    /// Create a generator from a configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            parser: PythonParser::new()?,
            analyzer: DocAnalyzer::new(config.analysis.clone()),
            formatter: TemplateFormatter::new(&config.template)?,
            format: config.output.format,
            separator_width: config.output.separator_width,
        })
    }

    /// Parse and analyze source text, rendering every signature's block
    pub fn document_source(&mut self, source: &str, path: &Path) -> Result<ModuleDocs> {
        let tree = self.parser.parse_source(source, path)?;
        let mut docs = self.analyzer.analyze(&tree);
        self.formatter.format_module(&mut docs)?;
        debug!(
            file = %path.display(),
            classes = docs.classes.len(),
            methods = docs.methods.len(),
            functions = docs.functions.len(),
            "rendered documentation blocks"
        );
        Ok(docs)
    }

    /// Ordered report for source text
    pub fn report(&mut self, source: &str, path: &Path) -> Result<Report> {
        let docs = self.document_source(source, path)?;
        Ok(aggregate(&docs, self.separator_width))
    }

    /// Final output text for source text, in the configured format
    pub fn generate(&mut self, source: &str, path: &Path) -> Result<String> {
        let docs = self.document_source(source, path)?;
        match self.format {
            OutputFormat::Text => Ok(aggregate(&docs, self.separator_width).to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&docs)?),
        }
    }

    /// Final output text for a file on disk
    pub fn generate_file(&mut self, path: &Path) -> Result<String> {
        let source = std::fs::read_to_string(path)?;
        self.generate(&source, path)
    }
}
