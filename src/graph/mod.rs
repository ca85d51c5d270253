// SPDX-License-Identifier: MIT

//! Agent structure loading and tree construction
//!
//! This module turns external structure documents into validated,
//! fully-owned agent trees ready for rendering.

pub mod builder;
pub mod loader;
pub mod types;

pub use builder::TreeBuilder;
pub use loader::StructureLoader;
pub use types::{sample_spec, AgentNode, AgentSpec};
