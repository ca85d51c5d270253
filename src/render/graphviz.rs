// SPDX-License-Identifier: MIT

//! Renderer implementations
//!
//! `GraphvizRenderer` pipes DOT source through the external `dot` process
//! for raster/vector output; `DotFileRenderer` writes the source itself.

use super::Renderer;
use crate::error::RenderError;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Graphviz binary, resolved once. Override with GRAPHVIZ_DOT.
static DOT_COMMAND: Lazy<String> =
    Lazy::new(|| std::env::var("GRAPHVIZ_DOT").unwrap_or_else(|_| "dot".to_string()));

/// Select a renderer for the requested output format
pub fn renderer_for(format: &str) -> Result<Box<dyn Renderer>, RenderError> {
    match format {
        "png" | "svg" => Ok(Box::new(GraphvizRenderer::new(format.to_string()))),
        "dot" => Ok(Box::new(DotFileRenderer)),
        other => Err(RenderError::UnsupportedFormat(other.to_string())),
    }
}

/// Renders DOT source by invoking the external `dot` tool
#[derive(Debug)]
pub struct GraphvizRenderer {
    format: String,
}

impl GraphvizRenderer {
    pub fn new(format: String) -> Self {
        Self { format }
    }
}

#[async_trait]
impl Renderer for GraphvizRenderer {
    fn extension(&self) -> &str {
        &self.format
    }

    async fn render(&self, dot_source: &str, output: &Path) -> Result<(), RenderError> {
        log::debug!("Spawning {} -T{}", DOT_COMMAND.as_str(), self.format);

        let mut child = Command::new(DOT_COMMAND.as_str())
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RenderError::GraphvizNotFound
                } else {
                    RenderError::Io(e)
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(dot_source.as_bytes()).await?;
        }

        let result = child.wait_with_output().await?;
        if !result.status.success() {
            return Err(RenderError::GraphvizFailed {
                status: result.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Writes the DOT source as-is, for use without Graphviz installed
#[derive(Debug)]
pub struct DotFileRenderer;

#[async_trait]
impl Renderer for DotFileRenderer {
    fn extension(&self) -> &str {
        "dot"
    }

    async fn render(&self, dot_source: &str, output: &Path) -> Result<(), RenderError> {
        tokio::fs::write(output, dot_source).await?;
        Ok(())
    }
}
