// SPDX-License-Identifier: MIT

//! Typed error handling for agentgraph-rs
//!
//! A small closed hierarchy: structural problems in the loaded agent
//! hierarchy live in [`GraphError`], rendering problems in [`RenderError`],
//! and everything else is wrapped transparently at the top level.

use thiserror::Error;

/// Top-level error type for agentgraph-rs
#[derive(Debug, Error)]
pub enum AgentGraphError {
    /// Structural errors in the agent hierarchy
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Errors from the rendering pipeline
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parse errors on the input structure
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parse errors on the input structure
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while building the agent tree
#[derive(Debug, Error)]
pub enum GraphError {
    /// A required field is absent from an agent entry
    #[error("Missing field `{field}` at {path}")]
    MissingField { field: &'static str, path: String },

    /// An agent name recurs along its own ancestor path
    #[error("Cyclic agent structure detected: {0:?}")]
    CyclicStructure(Vec<String>),

    /// Nesting exceeds the configured depth bound
    #[error("Maximum nesting depth {limit} exceeded at {path}")]
    DepthExceeded { limit: usize, path: String },
}

/// Errors raised while rendering a graph
#[derive(Debug, Error)]
pub enum RenderError {
    /// The Graphviz `dot` executable could not be spawned
    #[error("Graphviz executable not found (set GRAPHVIZ_DOT or use the `dot` format)")]
    GraphvizNotFound,

    /// Graphviz ran but exited with a failure
    #[error("Graphviz exited with status {status}: {stderr}")]
    GraphvizFailed { status: i32, stderr: String },

    /// Requested output format is not supported
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// I/O errors while writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Create a missing-field error for the given tree position
    pub fn missing_field(field: &'static str, path: impl Into<String>) -> Self {
        Self::MissingField {
            field,
            path: path.into(),
        }
    }
}
