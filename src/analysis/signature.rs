//! Argument, return, yield and raise extraction for function definitions

use super::walk::scoped_of_kind;
use crate::config::AnalysisConfig;
use crate::parser::{line_of, Argument, FunctionSignature, SourceTree};
use tracing::trace;
use tree_sitter::Node;

/// Build the signature of a `function_definition` node.
///
/// `owning_class` is set for methods; only methods lose their receiver and
/// only methods named like the initializer get the canned documentation.
pub fn analyze_function(
    node: Node<'_>,
    owning_class: Option<&str>,
    tree: &SourceTree,
    config: &AnalysisConfig,
) -> FunctionSignature {
    let name = node
        .child_by_field_name("name")
        .map(|n| tree.text(n))
        .unwrap_or_default();

    let mut sig = FunctionSignature::new(name, line_of(node));
    sig.owning_class = owning_class.map(str::to_string);
    sig.args = function_arguments(node, tree);

    if sig.is_method() {
        strip_receiver(&mut sig.args, &config.receiver_names);
    }

    if let Some(body) = node.child_by_field_name("body") {
        sig.returns = find_returns(body, tree);
        sig.yields = find_yields(body, tree);
        sig.raises = find_raises(body, tree);
    }

    if sig.is_method() && sig.name == config.initializer_name {
        let doc = initializer_doc(&sig);
        sig.set_rendered_doc(doc);
    }

    sig
}

/// Canned block for initializers, which are described on the class itself
pub fn initializer_doc(sig: &FunctionSignature) -> String {
    format!(
        "{}\n\n\"\"\"See the {} class documentation for details.\n\"\"\"",
        sig.header(),
        sig.owning_class.as_deref().unwrap_or_default()
    )
}

/// Formal parameters of a function definition, in declaration order
pub fn function_arguments(node: Node<'_>, tree: &SourceTree) -> Vec<Argument> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut cursor = params.walk();
    let args = params
        .named_children(&mut cursor)
        .filter_map(|param| parse_parameter(param, tree))
        .collect();
    args
}

/// Drop the first argument if it is named like a receiver
pub fn strip_receiver(args: &mut Vec<Argument>, receiver_names: &[String]) {
    let is_receiver = args
        .first()
        .map(|first| receiver_names.iter().any(|r| *r == first.name))
        .unwrap_or(false);
    if is_receiver {
        args.remove(0);
    }
}

fn parse_parameter(param: Node<'_>, tree: &SourceTree) -> Option<Argument> {
    match param.kind() {
        "identifier" => Some(Argument::new(tree.text(param))),
        "list_splat_pattern" | "dictionary_splat_pattern" => {
            splat_name(param, tree).map(|name| Argument::new(&name))
        }
        "default_parameter" => {
            let name = param.child_by_field_name("name")?;
            (name.kind() == "identifier").then(|| Argument::new(tree.text(name)))
        }
        "typed_parameter" | "typed_default_parameter" => {
            let name_node = if param.kind() == "typed_default_parameter" {
                param.child_by_field_name("name")?
            } else {
                param.named_child(0)?
            };
            let name = match name_node.kind() {
                "identifier" => tree.text(name_node).to_string(),
                "list_splat_pattern" | "dictionary_splat_pattern" => splat_name(name_node, tree)?,
                _ => return None,
            };
            let type_hint = param
                .child_by_field_name("type")
                .and_then(|t| simple_type(t, tree));
            Some(Argument {
                name,
                type_hint: type_hint.map(str::to_string),
            })
        }
        // `*` and `/` separators, comments
        _ => None,
    }
}

/// `*args` / `**kwargs` with their stars
fn splat_name(node: Node<'_>, tree: &SourceTree) -> Option<String> {
    let prefix = if node.kind() == "dictionary_splat_pattern" { "**" } else { "*" };
    let inner = node.named_child(0).filter(|n| n.kind() == "identifier")?;
    Some(format!("{}{}", prefix, tree.text(inner)))
}

/// Annotation text when the annotation is a single identifier
fn simple_type<'a>(type_node: Node<'_>, tree: &'a SourceTree) -> Option<&'a str> {
    if type_node.named_child_count() != 1 {
        return None;
    }
    let inner = type_node.named_child(0)?;
    (inner.kind() == "identifier").then(|| tree.text(inner))
}

fn find_returns(body: Node<'_>, tree: &SourceTree) -> Vec<String> {
    let mut returns = Vec::new();
    for stmt in scoped_of_kind(body, "return_statement") {
        let Some(value) = first_expression(stmt) else {
            continue;
        };
        match identifier_names(value, tree) {
            Some(names) => returns.extend(names),
            None => trace!(line = line_of(stmt), "return value is not a plain name"),
        }
    }
    returns
}

fn find_yields(body: Node<'_>, tree: &SourceTree) -> Vec<String> {
    let mut yields = Vec::new();
    for expr in scoped_of_kind(body, "yield") {
        if is_yield_from(expr) {
            continue;
        }
        let Some(value) = first_expression(expr) else {
            continue;
        };
        match identifier_names(value, tree) {
            Some(names) => yields.extend(names),
            None => trace!(line = line_of(expr), "yielded value is not a plain name"),
        }
    }
    yields
}

fn find_raises(body: Node<'_>, tree: &SourceTree) -> Vec<String> {
    let mut raises = Vec::new();
    for stmt in scoped_of_kind(body, "raise_statement") {
        let Some(exc) = first_expression(stmt) else {
            continue;
        };
        match bare_identifier(exc, tree) {
            Some(name) => raises.push(name),
            None => trace!(line = line_of(stmt), "raised exception is not a plain name"),
        }
    }
    raises
}

/// First named, non-comment child
fn first_expression(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let first = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    first
}

fn is_yield_from(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "from");
    found
}

/// Name of an expression that is exactly one identifier.
///
/// Parentheses are transparent: `(x)` is the identifier `x`.
pub fn bare_identifier(node: Node<'_>, tree: &SourceTree) -> Option<String> {
    match node.kind() {
        "identifier" => Some(tree.text(node).to_string()),
        "parenthesized_expression" => bare_identifier(first_expression(node)?, tree),
        _ => None,
    }
}

/// Names of an expression that is an identifier or a group of identifiers.
///
/// Returns `None` when any part is not a bare identifier: `x, f(y)`
/// documents nothing rather than only `x`.
pub fn identifier_names(node: Node<'_>, tree: &SourceTree) -> Option<Vec<String>> {
    match node.kind() {
        "identifier" => Some(vec![tree.text(node).to_string()]),
        "parenthesized_expression" => identifier_names(first_expression(node)?, tree),
        "expression_list" | "tuple" | "list" | "set" => {
            let mut cursor = node.walk();
            let names = node
                .named_children(&mut cursor)
                .filter(|child| child.kind() != "comment")
                .map(|child| bare_identifier(child, tree))
                .collect();
            names
        }
        _ => None,
    }
}
