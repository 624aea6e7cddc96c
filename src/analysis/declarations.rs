//! Partition a module into classes, methods and free functions

use super::walk::named_of_kind;
use crate::parser::SourceTree;
use std::collections::HashSet;
use tree_sitter::Node;

/// A function definition reachable from a class, tagged with its owner
#[derive(Debug, Clone)]
pub struct MethodCandidate<'tree> {
    pub node: Node<'tree>,
    pub class_name: String,
}

/// Declaration nodes of one module, each list in source order
#[derive(Debug, Default)]
pub struct Declarations<'tree> {
    pub classes: Vec<Node<'tree>>,
    pub methods: Vec<MethodCandidate<'tree>>,
    pub functions: Vec<Node<'tree>>,
}

/// Find every class, method and free function in the module.
///
/// Classes are collected from the whole tree, nested ones included. A
/// function is a method of its nearest enclosing class. Every other function,
/// however deeply nested inside other functions, is free. Methods are removed
/// from the free list by node identity so same-named functions elsewhere are
/// left alone.
pub fn classify<'tree>(tree: &'tree SourceTree) -> Declarations<'tree> {
    let root = tree.root();
    let classes: Vec<Node<'tree>> = named_of_kind(root, "class_definition").collect();

    let mut methods = Vec::new();
    for class in &classes {
        let class_name = class
            .child_by_field_name("name")
            .map(|n| tree.text(n).to_string())
            .unwrap_or_default();

        for func in named_of_kind(*class, "function_definition") {
            if enclosing_class(func).map(|c| c.id()) == Some(class.id()) {
                methods.push(MethodCandidate {
                    node: func,
                    class_name: class_name.clone(),
                });
            }
        }
    }

    let method_ids: HashSet<usize> = methods.iter().map(|m| m.node.id()).collect();
    let functions = named_of_kind(root, "function_definition")
        .filter(|f| !method_ids.contains(&f.id()))
        .collect();

    Declarations {
        classes,
        methods,
        functions,
    }
}

/// Nearest `class_definition` ancestor of a node
pub fn enclosing_class<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.kind() == "class_definition" {
            return Some(parent);
        }
        current = parent.parent();
    }
    None
}
