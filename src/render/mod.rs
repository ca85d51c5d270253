// SPDX-License-Identifier: MIT

//! Graph rendering - DOT generation and image output
//!
//! [`dot`] produces Graphviz DOT source from an agent tree; a [`Renderer`]
//! turns that source into an output file. The `png`/`svg` renderers shell
//! out to the external `dot` tool, the `dot` renderer writes the source
//! itself.

pub mod dot;
mod graphviz;

pub use graphviz::{renderer_for, DotFileRenderer, GraphvizRenderer};

use crate::error::{AgentGraphError, RenderError};
use crate::graph::AgentNode;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Turns DOT source into an output file
#[async_trait]
pub trait Renderer: Send + Sync + std::fmt::Debug {
    /// File extension this renderer produces ("png", "svg", "dot", ...)
    fn extension(&self) -> &str;

    /// Render the DOT source to the given output path
    async fn render(&self, dot_source: &str, output: &Path) -> Result<(), RenderError>;
}

/// Render an agent tree to `<filename>.<ext>` in the requested format.
///
/// Returns the path of the written file.
pub async fn draw_graph(
    root: &AgentNode,
    filename: &str,
    format: &str,
) -> Result<PathBuf, AgentGraphError> {
    let renderer = renderer_for(format)?;
    let dot_source = dot::to_dot(root);

    let output = PathBuf::from(format!("{}.{}", filename, renderer.extension()));
    log::debug!("Rendering '{}' to {}", root.name, output.display());
    renderer.render(&dot_source, &output).await?;

    Ok(output)
}
