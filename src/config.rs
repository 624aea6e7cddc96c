use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub analysis: AnalysisConfig,
    pub template: TemplateConfig,
}

/// Input file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Accepted source extensions, without the leading dot
    pub extensions: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Width of the `=` and `-` separator lines
    pub separator_width: usize,
}

/// Declaration analysis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// First-parameter names dropped from method signatures
    pub receiver_names: Vec<String>,
    /// Method name that receives the canned initializer text
    pub initializer_name: String,
}

/// Placeholder texts and template overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory with `function.txt` / `class.txt` overrides
    pub directory: Option<PathBuf>,
    pub function_description: String,
    pub class_description: String,
    pub argument_description: String,
    pub return_description: String,
    pub yield_description: String,
    pub raise_description: String,
    pub attribute_description: String,
    pub type_placeholder: String,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Extension the output file must carry for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["py".to_string(), "pyw".to_string()],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            separator_width: 80,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            receiver_names: vec!["self".to_string(), "class".to_string()],
            initializer_name: "__init__".to_string(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            directory: None,
            function_description: "<function description>".to_string(),
            class_description: "<class description>".to_string(),
            argument_description: "<argument description>".to_string(),
            return_description: "<return value description>".to_string(),
            yield_description: "<yielded value description>".to_string(),
            raise_description: "<exception description>".to_string(),
            attribute_description: "<attribute description>".to_string(),
            type_placeholder: "<type>".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, format: Option<String>) {
        if let Some(fmt) = format {
            self.output.format = match fmt.as_str() {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Text,
            };
        }
    }

    /// Whether `path` carries one of the accepted source extensions
    pub fn accepts_input(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.input.extensions.iter().any(|e| e == ext))
            .unwrap_or(false)
    }

    /// Whether `path` carries the extension required by the output format
    pub fn accepts_output(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.output.format.extension())
            .unwrap_or(false)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.input.extensions.is_empty() {
            return Err(Error::config_validation("at least one input extension required"));
        }

        if self.output.separator_width == 0 {
            return Err(Error::config_validation("separator_width must be at least 1"));
        }

        if self.analysis.receiver_names.iter().any(|n| n.trim().is_empty()) {
            return Err(Error::config_validation("receiver names cannot be empty"));
        }

        if self.analysis.initializer_name.trim().is_empty() {
            return Err(Error::config_validation("initializer_name cannot be empty"));
        }

        Ok(())
    }
}
