// Report assembly: orders rendered blocks and separators

use crate::parser::ModuleDocs;
use std::fmt;

pub const DEFAULT_SEPARATOR_WIDTH: usize = 80;

/// One piece of a report body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportItem {
    /// A rendered documentation block
    Block(String),
    /// Full-width `-` line, between methods and after free functions
    MinorSeparator,
    /// Full-width `=` line, closing a class group
    MajorSeparator,
}

/// Final text report for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub file_name: String,
    pub items: Vec<ReportItem>,
    pub separator_width: usize,
}

impl Report {
    pub fn new(file_name: &str, separator_width: usize) -> Self {
        Self {
            file_name: file_name.to_string(),
            items: Vec::new(),
            separator_width,
        }
    }

    pub fn push_block(&mut self, block: impl Into<String>) {
        self.items.push(ReportItem::Block(block.into()));
    }

    pub fn push(&mut self, item: ReportItem) {
        self.items.push(item);
    }

    /// Rendered blocks only, in report order
    pub fn blocks(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            ReportItem::Block(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Report text: header, top separator, then every item preceded by a
    /// blank line
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minor = "-".repeat(self.separator_width);
        let major = "=".repeat(self.separator_width);

        writeln!(f, "Docstrings for {}", self.file_name)?;
        writeln!(f, "{}", major)?;

        for item in &self.items {
            let text = match item {
                ReportItem::Block(block) => block.as_str(),
                ReportItem::MinorSeparator => minor.as_str(),
                ReportItem::MajorSeparator => major.as_str(),
            };
            writeln!(f)?;
            writeln!(f, "{}", text)?;
        }

        Ok(())
    }
}

/// Order the rendered documentation of a module.
///
/// Each class block is followed by its methods, each method preceded by a
/// `-` line, and the group is closed by a `=` line. Free functions come
/// last, each followed by a `-` line. Signatures without a rendered block
/// contribute an empty block.
pub fn aggregate(docs: &ModuleDocs, separator_width: usize) -> Report {
    let mut report = Report::new(&docs.file_name, separator_width);

    for class in &docs.classes {
        report.push_block(class.rendered_doc.clone().unwrap_or_default());

        for method in docs.methods_of(&class.name) {
            report.push(ReportItem::MinorSeparator);
            report.push_block(method.rendered_doc.clone().unwrap_or_default());
        }

        report.push(ReportItem::MajorSeparator);
    }

    for func in &docs.functions {
        report.push_block(func.rendered_doc.clone().unwrap_or_default());
        report.push(ReportItem::MinorSeparator);
    }

    report
}
