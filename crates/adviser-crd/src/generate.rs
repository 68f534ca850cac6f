//! Generation driver: one document in, one `List` of CRDs out

use std::fmt;
use std::str::FromStr;

use adviser_schema::ResolveOptions;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::extract::ResourceKind;
use crate::list::KubeList;
use crate::source::DocumentSource;

/// Serialization format of the generated manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Builds the CRD list for every [`ResourceKind`]
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: ResolveOptions,
}

impl Generator {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Generate all CRDs from an already loaded document
    ///
    /// Fails on the first kind that cannot be extracted; there is no
    /// partial output.
    pub fn generate(&self, document: &JsonValue) -> Result<KubeList> {
        let items = ResourceKind::ALL
            .iter()
            .map(|kind| kind.extract(document, self.options))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Generated {} CRDs", items.len());
        Ok(KubeList::new(items))
    }

    /// Load the document once from `source` and generate all CRDs
    pub async fn generate_from(&self, source: &dyn DocumentSource) -> Result<KubeList> {
        let document = source.load().await?;
        self.generate(&document)
    }
}

/// Serialize a list; JSON is pretty-printed with two-space indentation
pub fn render(list: &KubeList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(list)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(list)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("toml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "json");
    }

    #[test]
    fn test_render_json_is_two_space_indented() {
        let list = KubeList::new(vec![]);
        let json = render(&list, OutputFormat::Json).unwrap();
        assert!(json.starts_with("{\n  \"apiVersion\": \"v1\""));
    }

    #[test]
    fn test_render_yaml() {
        let list = KubeList::new(vec![]);
        let yaml = render(&list, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("apiVersion: v1"));
        assert!(yaml.contains("kind: List"));
    }
}
