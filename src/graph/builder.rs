// SPDX-License-Identifier: MIT

//! Tree builder - constructs agent trees from parsed structures
//!
//! Depth-first pre-order construction: every handoff entry becomes an owned
//! child node, in input order, so the resulting tree has the same shape as
//! the document it came from.

use super::types::{AgentNode, AgentSpec};
use crate::error::GraphError;

/// Default bound on handoff nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Builds validated [`AgentNode`] trees from [`AgentSpec`] documents
pub struct TreeBuilder {
    max_depth: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Build the agent tree for a parsed structure.
    ///
    /// `name` and `instructions` are required on every entry; a missing key
    /// fails with the offending position. A name recurring along its own
    /// ancestor path is rejected as cyclic rather than recursed into.
    pub fn build(&self, spec: &AgentSpec) -> Result<AgentNode, GraphError> {
        let mut path: Vec<String> = Vec::new();
        self.build_node(spec, &mut path)
    }

    fn build_node(&self, spec: &AgentSpec, path: &mut Vec<String>) -> Result<AgentNode, GraphError> {
        let name = spec
            .name
            .clone()
            .ok_or_else(|| GraphError::missing_field("name", display_path(path)))?;

        if path.iter().any(|ancestor| ancestor == &name) {
            let mut cycle = path.clone();
            cycle.push(name);
            return Err(GraphError::CyclicStructure(cycle));
        }

        path.push(name.clone());

        if path.len() > self.max_depth {
            let err = GraphError::DepthExceeded {
                limit: self.max_depth,
                path: display_path(path),
            };
            path.pop();
            return Err(err);
        }

        let instructions = match &spec.instructions {
            Some(instructions) => instructions.clone(),
            None => {
                let err = GraphError::missing_field("instructions", display_path(path));
                path.pop();
                return Err(err);
            }
        };

        let mut handoffs = Vec::with_capacity(spec.handoffs.len());
        for child in &spec.handoffs {
            match self.build_node(child, path) {
                Ok(node) => handoffs.push(node),
                Err(err) => {
                    path.pop();
                    return Err(err);
                }
            }
        }

        path.pop();

        Ok(AgentNode {
            name,
            instructions,
            tools: spec.tools.clone(),
            handoffs,
        })
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.join(" -> ")
    }
}
