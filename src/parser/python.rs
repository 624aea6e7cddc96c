// Python parser using tree-sitter

use crate::analysis::walk::TreeWalk;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// Parser for Python source files
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new Python parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_python::language();
        parser.set_language(&language).map_err(|e| {
            Error::Parser(format!("Failed to set Python language: {}", e))
        })?;
        Ok(Self { parser })
    }

    /// Parse a Python file
    pub fn parse_file(&mut self, path: &Path) -> Result<SourceTree> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        })?;

        self.parse_source(&source, path)
    }

    /// Parse Python source code.
    ///
    /// Source that does not form a valid module is rejected; no partial
    /// tree is handed out.
    pub fn parse_source(&mut self, source: &str, path: impl Into<PathBuf>) -> Result<SourceTree> {
        let path = path.into();
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parse(&path, "parser produced no syntax tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error_line(root).unwrap_or(1);
            return Err(Error::parse(&path, format!("invalid syntax at line {}", line)));
        }

        Ok(SourceTree {
            path,
            source: source.to_string(),
            tree,
        })
    }
}

/// A successfully parsed module together with the text it came from
pub struct SourceTree {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceTree {
    /// The `module` node
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used in report headers
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// 1-based line of the first ERROR or MISSING node
fn first_error_line(root: Node<'_>) -> Option<usize> {
    TreeWalk::new(root)
        .find(|n| n.is_error() || n.is_missing())
        .map(|n| n.start_position().row + 1)
}

/// 1-based line a node starts on
pub fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<SourceTree> {
        let mut parser = PythonParser::new().unwrap();
        parser.parse_source(source, "test.py")
    }

    #[test]
    fn test_parser_new() {
        let parser = PythonParser::new();
        assert!(parser.is_ok());
    }

    #[test]
    fn test_empty_file() {
        let tree = parse("").unwrap();
        assert_eq!(tree.root().kind(), "module");
        assert_eq!(tree.root().named_child_count(), 0);
    }

    #[test]
    fn test_text_of_node() {
        let tree = parse("def hello(): pass\n").unwrap();
        let func = tree.root().named_child(0).unwrap();
        let name = func.child_by_field_name("name").unwrap();
        assert_eq!(tree.text(name), "hello");
        assert_eq!(line_of(func), 1);
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let result = parse("def ok():\n    pass\n\ndef broken(:\n    pass\n");
        match result {
            Err(Error::Parse { path, message }) => {
                assert_eq!(path, PathBuf::from("test.py"));
                assert!(message.contains("invalid syntax"));
            }
            Err(other) => panic!("Expected parse error, got {other}"),
            Ok(_) => panic!("Expected parse error"),
        }
    }

    #[test]
    fn test_file_name_strips_directories() {
        let mut parser = PythonParser::new().unwrap();
        let tree = parser.parse_source("x = 1\n", "pkg/sub/module.py").unwrap();
        assert_eq!(tree.file_name(), "module.py");
        assert_eq!(tree.path(), Path::new("pkg/sub/module.py"));
    }

    #[test]
    fn test_parse_missing_file() {
        let mut parser = PythonParser::new().unwrap();
        let result = parser.parse_file(Path::new("/nonexistent/script.py"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
