// Analysis module for extracting documentation facts from syntax trees

pub mod attributes;
pub mod declarations;
pub mod signature;
pub mod walk;

pub use attributes::analyze_class;
pub use declarations::{classify, Declarations, MethodCandidate};
pub use signature::analyze_function;
pub use walk::TreeWalk;

use crate::config::AnalysisConfig;
use crate::parser::{ModuleDocs, SourceTree};
use tracing::debug;

/// Turns one parsed module into its classes, methods and free functions
pub struct DocAnalyzer {
    config: AnalysisConfig,
}

impl DocAnalyzer {
    /// Create a new analyzer with the given settings
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze a parsed module.
    ///
    /// Each call is independent; nothing is cached between modules.
    pub fn analyze(&self, tree: &SourceTree) -> ModuleDocs {
        let decls = classify(tree);
        debug!(
            file = %tree.path().display(),
            classes = decls.classes.len(),
            methods = decls.methods.len(),
            functions = decls.functions.len(),
            "classified declarations"
        );

        let mut docs = ModuleDocs::new(&tree.file_name());

        docs.classes = decls
            .classes
            .iter()
            .map(|class| analyze_class(*class, tree, &self.config))
            .collect();

        docs.methods = decls
            .methods
            .iter()
            .map(|m| analyze_function(m.node, Some(m.class_name.as_str()), tree, &self.config))
            .collect();

        docs.functions = decls
            .functions
            .iter()
            .map(|f| analyze_function(*f, None, tree, &self.config))
            .collect();

        docs
    }
}

impl Default for DocAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
