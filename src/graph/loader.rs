//! Structure loader - file loading and parsing
//!
//! This module handles loading agent structure documents from JSON or YAML
//! files. The format is chosen by file extension; in-memory parsing is
//! exposed separately for callers that already hold the document text.

use super::types::AgentSpec;
use crate::error::AgentGraphError;
use std::fs;
use std::path::Path;

/// Loads agent structure documents from JSON or YAML files
pub struct StructureLoader;

impl StructureLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load an agent structure from a file, picking the parser by extension
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<AgentSpec, AgentGraphError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::parse_yaml(&content),
            _ => Self::parse_json(&content),
        }
    }

    /// Parse an agent structure from a JSON string
    pub fn parse_json(content: &str) -> Result<AgentSpec, AgentGraphError> {
        let spec: AgentSpec = serde_json::from_str(content)?;
        Ok(spec)
    }

    /// Parse an agent structure from a YAML string
    pub fn parse_yaml(content: &str) -> Result<AgentSpec, AgentGraphError> {
        let spec: AgentSpec = serde_yaml::from_str(content)?;
        Ok(spec)
    }
}

impl Default for StructureLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_with_child() {
        let json = r#"{
            "name": "Root",
            "instructions": "go",
            "handoffs": [{"name": "Child", "instructions": "help"}]
        }"#;
        let spec = StructureLoader::parse_json(json).unwrap();
        assert_eq!(spec.name.as_deref(), Some("Root"));
        assert_eq!(spec.instructions.as_deref(), Some("go"));
        assert!(spec.tools.is_empty());
        assert_eq!(spec.handoffs.len(), 1);
        assert_eq!(spec.handoffs[0].name.as_deref(), Some("Child"));
        assert!(spec.handoffs[0].tools.is_empty());
        assert!(spec.handoffs[0].handoffs.is_empty());
    }

    #[test]
    fn test_parse_tools_preserved_in_order() {
        let json = r#"{
            "name": "A",
            "instructions": "x",
            "tools": ["search", "fetch", "summarize"]
        }"#;
        let spec = StructureLoader::parse_json(json).unwrap();
        assert_eq!(spec.tools, vec!["search", "fetch", "summarize"]);
    }

    #[test]
    fn test_parse_unknown_keys_tolerated() {
        let json = r#"{"name": "A", "instructions": "x", "model": "gpt-4o"}"#;
        let spec = StructureLoader::parse_json(json).unwrap();
        assert_eq!(spec.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_parse_yaml_structure() {
        let yaml = r#"
name: Root
instructions: go
handoffs:
  - name: Child
    instructions: help
    tools:
      - search
"#;
        let spec = StructureLoader::parse_yaml(yaml).unwrap();
        assert_eq!(spec.name.as_deref(), Some("Root"));
        assert_eq!(spec.handoffs[0].tools, vec!["search"]);
    }

    #[test]
    fn test_parse_non_mapping_returns_error() {
        let result = StructureLoader::parse_json(r#""just a string""#);
        assert!(matches!(result, Err(AgentGraphError::Json(_))));

        let result = StructureLoader::parse_json("[1, 2, 3]");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_handoffs_not_a_sequence_returns_error() {
        let json = r#"{"name": "A", "instructions": "x", "handoffs": "oops"}"#;
        let result = StructureLoader::parse_json(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_returns_io_error() {
        let result = StructureLoader::new().load("no_such_structure.json");
        assert!(matches!(result, Err(AgentGraphError::Io(_))));
    }
}
