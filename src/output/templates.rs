// Template engine for rendering documentation blocks

use crate::config::TemplateConfig;
use crate::error::Result;
use crate::parser::{Argument, ClassSignature, FunctionSignature, ModuleDocs};
use serde::Serialize;
use tera::{Context, Tera};

/// Layout shared by function and class blocks. Sections only appear when
/// they have entries; the description is followed by one blank line when
/// any section is present.
const BLOCK_TEMPLATE: &str = r##"{{ header }}

"""{{ description }}
{% if sections %}
{% for section in sections %}{{ section.title }}:
{% for entry in section.entries %}    {{ entry.name }}{% if entry.kind %} ({{ entry.kind }}){% endif %}: {{ entry.description }}
{% endfor %}{% endfor %}{% endif %}""""##;

pub const FUNCTION_TEMPLATE_NAME: &str = "function.txt";
pub const CLASS_TEMPLATE_NAME: &str = "class.txt";

/// A titled list of documented names
#[derive(Debug, Serialize)]
struct Section {
    title: &'static str,
    entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
struct Entry {
    name: String,
    /// Shown in parentheses; `None` for raised exceptions
    kind: Option<String>,
    description: String,
}

/// Template engine wrapping Tera with the block layout
pub struct TemplateFormatter {
    tera: Tera,
    placeholders: TemplateConfig,
}

impl TemplateFormatter {
    /// Create a formatter with the embedded templates, overridden by any
    /// `function.txt` / `class.txt` found in the configured directory
    pub fn new(config: &TemplateConfig) -> Result<Self> {
        let mut defaults = Tera::default();
        defaults.add_raw_templates(vec![
            (FUNCTION_TEMPLATE_NAME, BLOCK_TEMPLATE),
            (CLASS_TEMPLATE_NAME, BLOCK_TEMPLATE),
        ])?;

        let mut tera = match &config.directory {
            Some(dir) => {
                let pattern = format!("{}/**/*.txt", dir.display());
                let mut custom = Tera::new(&pattern)?;
                custom.extend(&defaults)?;
                custom
            }
            None => defaults,
        };
        tera.autoescape_on(vec![]);

        Ok(Self {
            tera,
            placeholders: config.clone(),
        })
    }

    /// Render the block for a function or method
    pub fn render_function(&self, func: &FunctionSignature) -> Result<String> {
        let p = &self.placeholders;
        let mut sections = Vec::new();
        push_section(&mut sections, "Arguments", self.argument_entries(&func.args));
        push_section(
            &mut sections,
            "Returns",
            self.value_entries(&func.returns, &p.return_description),
        );
        push_section(
            &mut sections,
            "Yields",
            self.value_entries(&func.yields, &p.yield_description),
        );
        push_section(
            &mut sections,
            "Raises",
            func.raises
                .iter()
                .map(|exc| Entry {
                    name: exc.clone(),
                    kind: None,
                    description: p.raise_description.clone(),
                })
                .collect(),
        );

        let mut context = Context::new();
        context.insert("header", &func.header());
        context.insert("name", &func.name);
        context.insert("owner", &func.owning_class);
        context.insert("line", &func.line);
        context.insert("args", &arg_names(&func.args));
        context.insert("description", &p.function_description);
        context.insert("sections", &sections);

        Ok(self.tera.render(FUNCTION_TEMPLATE_NAME, &context)?)
    }

    /// Render the block for a class
    pub fn render_class(&self, class: &ClassSignature) -> Result<String> {
        let p = &self.placeholders;
        let mut sections = Vec::new();
        push_section(
            &mut sections,
            "Initializer arguments",
            self.argument_entries(&class.init_args),
        );
        push_section(
            &mut sections,
            "Attributes",
            self.value_entries(&class.attributes, &p.attribute_description),
        );

        let mut context = Context::new();
        context.insert("header", &class.header());
        context.insert("name", &class.name);
        context.insert("owner", &Option::<String>::None);
        context.insert("line", &class.line);
        context.insert("args", &arg_names(&class.init_args));
        context.insert("description", &p.class_description);
        context.insert("sections", &sections);

        Ok(self.tera.render(CLASS_TEMPLATE_NAME, &context)?)
    }

    /// Fill in `rendered_doc` for every signature that has none yet
    pub fn format_module(&self, docs: &mut ModuleDocs) -> Result<()> {
        for class in &mut docs.classes {
            if class.rendered_doc.is_none() {
                class.rendered_doc = Some(self.render_class(class)?);
            }
        }

        for func in docs.methods.iter_mut().chain(docs.functions.iter_mut()) {
            if func.rendered_doc.is_none() {
                let doc = self.render_function(func)?;
                func.set_rendered_doc(doc);
            }
        }

        Ok(())
    }

    fn argument_entries(&self, args: &[Argument]) -> Vec<Entry> {
        let p = &self.placeholders;
        args.iter()
            .map(|arg| Entry {
                name: arg.name.clone(),
                kind: Some(
                    arg.type_hint
                        .clone()
                        .unwrap_or_else(|| p.type_placeholder.clone()),
                ),
                description: p.argument_description.clone(),
            })
            .collect()
    }

    fn value_entries(&self, names: &[String], description: &str) -> Vec<Entry> {
        names
            .iter()
            .map(|name| Entry {
                name: name.clone(),
                kind: Some(self.placeholders.type_placeholder.clone()),
                description: description.to_string(),
            })
            .collect()
    }
}

fn push_section(sections: &mut Vec<Section>, title: &'static str, entries: Vec<Entry>) {
    if !entries.is_empty() {
        sections.push(Section { title, entries });
    }
}

fn arg_names(args: &[Argument]) -> Vec<&str> {
    args.iter().map(|a| a.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn formatter() -> TemplateFormatter {
        TemplateFormatter::new(&TemplateConfig::default()).unwrap()
    }

    #[test]
    fn test_function_without_sections() {
        let func = FunctionSignature::new("noop", 4);
        let doc = formatter().render_function(&func).unwrap();
        assert_eq!(doc, "noop() at line 4:\n\n\"\"\"<function description>\n\"\"\"");
    }

    #[test]
    fn test_function_with_all_sections() {
        let mut func = FunctionSignature::new("read", 10);
        func.owning_class = Some("Reader".to_string());
        func.args = vec![Argument::typed("path", "str"), Argument::new("size")];
        func.returns = vec!["data".to_string()];
        func.yields = vec!["chunk".to_string()];
        func.raises = vec!["IOError".to_string()];

        let doc = formatter().render_function(&func).unwrap();
        let expected = "\
Reader.read(path, size) at line 10:

\"\"\"<function description>

Arguments:
    path (str): <argument description>
    size (<type>): <argument description>
Returns:
    data (<type>): <return value description>
Yields:
    chunk (<type>): <yielded value description>
Raises:
    IOError: <exception description>
\"\"\"";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_sections_keep_fixed_order_and_skip_empty() {
        let mut func = FunctionSignature::new("f", 1);
        func.raises = vec!["KeyError".to_string()];
        func.returns = vec!["a".to_string(), "b".to_string()];

        let doc = formatter().render_function(&func).unwrap();
        let returns = doc.find("Returns:").unwrap();
        let raises = doc.find("Raises:").unwrap();
        assert!(returns < raises);
        assert!(!doc.contains("Arguments:"));
        assert!(!doc.contains("Yields:"));
        assert!(doc.contains("    a (<type>): <return value description>\n    b (<type>)"));
    }

    #[test]
    fn test_class_block() {
        let mut class = ClassSignature::new("Point", 1);
        class.init_args = vec![Argument::typed("x", "int"), Argument::new("y")];
        class.attributes = vec!["x".to_string(), "x".to_string()];

        let doc = formatter().render_class(&class).unwrap();
        let expected = "\
Point(x, y) at line 1:

\"\"\"<class description>

Initializer arguments:
    x (int): <argument description>
    y (<type>): <argument description>
Attributes:
    x (<type>): <attribute description>
    x (<type>): <attribute description>
\"\"\"";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_class_without_initializer() {
        let class = ClassSignature::new("Marker", 7);
        let doc = formatter().render_class(&class).unwrap();
        assert_eq!(doc, "Marker() at line 7:\n\n\"\"\"<class description>\n\"\"\"");
    }

    #[test]
    fn test_placeholders_are_not_escaped() {
        let mut func = FunctionSignature::new("f", 1);
        func.args = vec![Argument::new("a")];
        let doc = formatter().render_function(&func).unwrap();
        assert!(doc.contains("a (<type>): <argument description>"));
        assert!(!doc.contains("&lt;"));
    }

    #[test]
    fn test_custom_placeholders() {
        let config = TemplateConfig {
            function_description: "Summary.".to_string(),
            type_placeholder: "TYPE".to_string(),
            ..Default::default()
        };
        let mut func = FunctionSignature::new("f", 1);
        func.args = vec![Argument::new("a")];
        let doc = TemplateFormatter::new(&config).unwrap().render_function(&func).unwrap();
        assert!(doc.contains("\"\"\"Summary.\n"));
        assert!(doc.contains("a (TYPE):"));
    }

    #[test]
    fn test_format_module_keeps_preset_docs() {
        let mut docs = ModuleDocs::new("m.py");
        let mut init = FunctionSignature::new("__init__", 2);
        init.owning_class = Some("A".to_string());
        init.set_rendered_doc("canned".to_string());
        docs.methods.push(init);
        docs.functions.push(FunctionSignature::new("f", 5));
        docs.classes.push(ClassSignature::new("A", 1));

        formatter().format_module(&mut docs).unwrap();

        assert_eq!(docs.methods[0].rendered_doc.as_deref(), Some("canned"));
        assert!(docs.functions[0].rendered_doc.as_deref().unwrap().starts_with("f() at line 5:"));
        assert!(docs.classes[0].rendered_doc.is_some());
    }

    #[test]
    fn test_template_directory_override() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("function.txt"),
            "{{ name }}/{{ args | join(sep=\"|\") }}@{{ line }}",
        )
        .unwrap();
        let config = TemplateConfig {
            directory: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let formatter = TemplateFormatter::new(&config).unwrap();

        let mut func = FunctionSignature::new("f", 3);
        func.args = vec![Argument::new("a"), Argument::new("b")];
        assert_eq!(formatter.render_function(&func).unwrap(), "f/a|b@3");

        let class = ClassSignature::new("C", 1);
        assert!(formatter.render_class(&class).unwrap().starts_with("C() at line 1:"));
    }
}
