// Signature types extracted from parsed Python code
//
// These types hold the facts a documentation block is rendered from.
// They are serializable so a run can be emitted as JSON.

use serde::{Deserialize, Serialize};

/// A formal parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Argument {
    /// Parameter name (`*args` / `**kwargs` keep their stars)
    pub name: String,
    /// Type annotation, only when it is a single identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
}

impl Argument {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_hint: None,
        }
    }

    pub fn typed(name: &str, type_hint: &str) -> Self {
        Self {
            name: name.to_string(),
            type_hint: Some(type_hint.to_string()),
        }
    }
}

/// A function or method definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionSignature {
    /// Function name
    pub name: String,
    /// Enclosing class name, set only for methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_class: Option<String>,
    /// Line of the `def` keyword
    pub line: usize,
    /// Parameters, receiver already removed for methods
    pub args: Vec<Argument>,
    /// Names returned by `return` statements
    pub returns: Vec<String>,
    /// Names produced by `yield` expressions
    pub yields: Vec<String>,
    /// Names raised by `raise` statements
    pub raises: Vec<String>,
    /// Rendered documentation block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_doc: Option<String>,
}

impl FunctionSignature {
    pub fn new(name: &str, line: usize) -> Self {
        Self {
            name: name.to_string(),
            owning_class: None,
            line,
            args: Vec::new(),
            returns: Vec::new(),
            yields: Vec::new(),
            raises: Vec::new(),
            rendered_doc: None,
        }
    }

    pub fn is_method(&self) -> bool {
        self.owning_class.is_some()
    }

    /// Set the rendered documentation unless one is already present.
    /// Returns whether the value was stored.
    pub fn set_rendered_doc(&mut self, doc: String) -> bool {
        if self.rendered_doc.is_some() {
            return false;
        }
        self.rendered_doc = Some(doc);
        true
    }

    /// `Owner.name(a, b) at line L:`
    pub fn header(&self) -> String {
        let owner = self
            .owning_class
            .as_deref()
            .map(|c| format!("{}.", c))
            .unwrap_or_default();
        format!(
            "{}{}({}) at line {}:",
            owner,
            self.name,
            arg_names(&self.args).join(", "),
            self.line
        )
    }
}

/// A class definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassSignature {
    /// Class name
    pub name: String,
    /// Line of the `class` keyword
    pub line: usize,
    /// Initializer parameters, receiver removed
    pub init_args: Vec<Argument>,
    /// Attribute names accessed in the initializer, duplicates kept
    pub attributes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_doc: Option<String>,
}

impl ClassSignature {
    pub fn new(name: &str, line: usize) -> Self {
        Self {
            name: name.to_string(),
            line,
            init_args: Vec::new(),
            attributes: Vec::new(),
            rendered_doc: None,
        }
    }

    pub fn header(&self) -> String {
        format!(
            "{}({}) at line {}:",
            self.name,
            arg_names(&self.init_args).join(", "),
            self.line
        )
    }
}

/// Everything documented for one source file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModuleDocs {
    /// File name shown in the report header
    pub file_name: String,
    /// Classes in declaration order
    pub classes: Vec<ClassSignature>,
    /// Methods in discovery order (class by class)
    pub methods: Vec<FunctionSignature>,
    /// Free functions in declaration order
    pub functions: Vec<FunctionSignature>,
}

impl ModuleDocs {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.methods.is_empty() && self.functions.is_empty()
    }

    /// Methods owned by the class named `class_name`, in discovery order
    pub fn methods_of<'a>(
        &'a self,
        class_name: &'a str,
    ) -> impl Iterator<Item = &'a FunctionSignature> + 'a {
        self.methods
            .iter()
            .filter(move |m| m.owning_class.as_deref() == Some(class_name))
    }
}

fn arg_names(args: &[Argument]) -> Vec<&str> {
    args.iter().map(|a| a.name.as_str()).collect()
}
