// SPDX-License-Identifier: MIT

//! Schema types for agent structure documents
//!
//! [`AgentSpec`] is the externally-supplied shape of one agent and its
//! nested handoffs; [`AgentNode`] is its fully-resolved in-memory
//! counterpart produced by the tree builder.

use serde::{Deserialize, Serialize};

/// One agent entry as it appears in a structure document.
///
/// `name` and `instructions` are optional here so the builder can report a
/// missing key with its position in the tree instead of failing inside the
/// deserializer.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AgentSpec {
    pub name: Option<String>,
    pub instructions: Option<String>,
    /// Opaque tool identifiers attached to this agent
    #[serde(default)]
    pub tools: Vec<String>,
    /// Nested agents this one delegates to
    #[serde(default)]
    pub handoffs: Vec<AgentSpec>,
}

/// A fully-resolved agent with its handoffs materialized as owned children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentNode {
    pub name: String,
    pub instructions: String,
    pub tools: Vec<String>,
    pub handoffs: Vec<AgentNode>,
}

impl AgentNode {
    /// Total number of agents in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.handoffs.iter().map(AgentNode::node_count).sum::<usize>()
    }

    /// Height of this subtree (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self
            .handoffs
            .iter()
            .map(AgentNode::depth)
            .max()
            .unwrap_or(0)
    }
}

fn spec(name: &str, instructions: &str, handoffs: Vec<AgentSpec>) -> AgentSpec {
    AgentSpec {
        name: Some(name.to_string()),
        instructions: Some(instructions.to_string()),
        tools: Vec::new(),
        handoffs,
    }
}

/// The bundled demo hierarchy written by the `scaffold` command: a linear
/// delegation chain from a coordinating agent down to a visualization picker.
pub fn sample_spec() -> AgentSpec {
    spec(
        "MainAgent",
        "Coordinates the whole delegation chain.",
        vec![spec(
            "ParseQuestionAgent",
            "Parses the natural-language question and identifies the relevant tables and columns.",
            vec![spec(
                "GetUniqueNounsAgent",
                "Extracts the exact textual values of the identified columns.",
                vec![spec(
                    "GenerateSqlAgent",
                    "Generates the raw SQL query from the gathered context.",
                    vec![spec(
                        "ValidateSqlAgent",
                        "Checks the SQL syntax and corrects it when needed.",
                        vec![spec(
                            "ChooseVisualizationAgent",
                            "Chooses how to visualize the query results.",
                            vec![],
                        )],
                    )],
                )],
            )],
        )],
    )
}
