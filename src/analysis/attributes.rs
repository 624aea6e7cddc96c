//! Class-level facts gathered from the initializer

use super::signature::{function_arguments, strip_receiver};
use super::walk::named_of_kind;
use crate::config::AnalysisConfig;
use crate::parser::{line_of, ClassSignature, SourceTree};
use tree_sitter::Node;

/// Build the signature of a `class_definition` node.
///
/// Initializer arguments and attributes stay empty when the class has no
/// initializer.
pub fn analyze_class(node: Node<'_>, tree: &SourceTree, config: &AnalysisConfig) -> ClassSignature {
    let name = node
        .child_by_field_name("name")
        .map(|n| tree.text(n))
        .unwrap_or_default();
    let mut class = ClassSignature::new(name, line_of(node));

    if let Some(init) = find_initializer(node, tree, &config.initializer_name) {
        class.init_args = function_arguments(init, tree);
        strip_receiver(&mut class.init_args, &config.receiver_names);
        class.attributes = collect_attributes(init, tree);
    }

    class
}

/// The initializer among the class body's own statements.
///
/// Later definitions shadow earlier ones, so the last match wins.
pub fn find_initializer<'tree>(
    class: Node<'tree>,
    tree: &SourceTree,
    initializer_name: &str,
) -> Option<Node<'tree>> {
    let body = class.child_by_field_name("body")?;
    let mut cursor = body.walk();
    let found = body
        .named_children(&mut cursor)
        .filter_map(|stmt| match stmt.kind() {
            "function_definition" => Some(stmt),
            "decorated_definition" => stmt
                .child_by_field_name("definition")
                .filter(|d| d.kind() == "function_definition"),
            _ => None,
        })
        .filter(|func| {
            func.child_by_field_name("name")
                .map(|n| tree.text(n) == initializer_name)
                .unwrap_or(false)
        })
        .last();
    found
}

/// Attribute names of every attribute access in the initializer body,
/// in source order, duplicates kept
pub fn collect_attributes(init: Node<'_>, tree: &SourceTree) -> Vec<String> {
    let Some(body) = init.child_by_field_name("body") else {
        return Vec::new();
    };

    named_of_kind(body, "attribute")
        .filter_map(|attr| attr.child_by_field_name("attribute"))
        .map(|name| tree.text(name).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Argument, PythonParser};

    fn parse(source: &str) -> SourceTree {
        let mut parser = PythonParser::new().unwrap();
        parser.parse_source(source, "test.py").unwrap()
    }

    fn analyze(source: &str) -> ClassSignature {
        let tree = parse(source);
        let class = named_of_kind(tree.root(), "class_definition").next().unwrap();
        analyze_class(class, &tree, &AnalysisConfig::default())
    }

    #[test]
    fn test_class_without_initializer() {
        let class = analyze("class Empty:\n    def other(self, x):\n        self.y = x\n");
        assert_eq!(class.name, "Empty");
        assert_eq!(class.line, 1);
        assert!(class.init_args.is_empty());
        assert!(class.attributes.is_empty());
    }

    #[test]
    fn test_initializer_arguments_and_attributes() {
        let source = "\
class Point:
    def __init__(self, x: int, y):
        self.x = x
        self.y = y
";
        let class = analyze(source);
        assert_eq!(class.init_args, vec![Argument::typed("x", "int"), Argument::new("y")]);
        assert_eq!(class.attributes, vec!["x", "y"]);
    }

    #[test]
    fn test_duplicate_assignments_are_kept() {
        let source = "\
class Counter:
    def __init__(self, start):
        self.count = 0
        if start:
            self.count = start
";
        let class = analyze(source);
        assert_eq!(class.attributes, vec!["count", "count"]);
    }

    #[test]
    fn test_every_attribute_access_is_recorded() {
        let source = "\
class Config:
    def __init__(self, path):
        self.path = os.path.abspath(path)
";
        let class = analyze(source);
        assert_eq!(class.attributes, vec!["path", "abspath", "path"]);
    }

    #[test]
    fn test_decorated_initializer_is_found() {
        let source = "\
class A:
    @trace
    def __init__(self, value):
        self.value = value
";
        let class = analyze(source);
        assert_eq!(class.init_args, vec![Argument::new("value")]);
        assert_eq!(class.attributes, vec!["value"]);
    }

    #[test]
    fn test_last_initializer_wins() {
        let source = "\
class A:
    def __init__(self, first):
        self.first = first

    def __init__(self, second):
        self.second = second
";
        let class = analyze(source);
        assert_eq!(class.init_args, vec![Argument::new("second")]);
        assert_eq!(class.attributes, vec!["second"]);
    }

    #[test]
    fn test_nested_initializer_is_not_the_class_initializer() {
        let source = "\
class A:
    def build(self):
        def __init__(self, hidden):
            self.hidden = hidden
";
        let class = analyze(source);
        assert!(class.init_args.is_empty());
        assert!(class.attributes.is_empty());
    }
}
