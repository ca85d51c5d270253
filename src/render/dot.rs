// SPDX-License-Identifier: MIT

//! DOT source generation for agent trees
//!
//! The emitted digraph follows the visual language of agent-framework
//! visualizers: `__start__`/`__end__` sentinel ellipses, one filled box per
//! agent, one ellipse per tool attached with a dotted edge, and a solid
//! edge per handoff.

use crate::graph::AgentNode;
use std::fmt::Write as _;

/// Generate Graphviz DOT source for an agent tree
pub fn to_dot(root: &AgentNode) -> String {
    let mut dot = String::from("digraph AgentGraph {\n");
    dot.push_str("    graph [splines=true];\n");
    dot.push_str("    node [fontname=\"Arial\"];\n");
    dot.push_str("    edge [penwidth=1.5];\n");
    dot.push_str(
        "    \"__start__\" [shape=ellipse, style=filled, fillcolor=lightblue, width=0.5, height=0.3];\n",
    );
    dot.push_str(
        "    \"__end__\" [shape=ellipse, style=filled, fillcolor=lightblue, width=0.5, height=0.3];\n",
    );

    write_nodes(root, &mut dot);

    let _ = writeln!(dot, "    \"__start__\" -> \"{}\";", escape(&root.name));
    write_edges(root, &mut dot);

    dot.push_str("}\n");
    dot
}

fn write_nodes(node: &AgentNode, dot: &mut String) {
    let name = escape(&node.name);
    let _ = writeln!(
        dot,
        "    \"{}\" [label=\"{}\", shape=box, style=filled, fillcolor=lightyellow];",
        name, name
    );
    for tool in &node.tools {
        let tool = escape(tool);
        let _ = writeln!(
            dot,
            "    \"{}\" [label=\"{}\", shape=ellipse, style=filled, fillcolor=lightgreen];",
            tool, tool
        );
    }
    for child in &node.handoffs {
        write_nodes(child, dot);
    }
}

fn write_edges(node: &AgentNode, dot: &mut String) {
    let name = escape(&node.name);
    for tool in &node.tools {
        let _ = writeln!(
            dot,
            "    \"{}\" -> \"{}\" [style=dotted, penwidth=1.5];",
            name,
            escape(tool)
        );
    }
    if node.handoffs.is_empty() {
        let _ = writeln!(dot, "    \"{}\" -> \"__end__\";", name);
    }
    for child in &node.handoffs {
        let _ = writeln!(dot, "    \"{}\" -> \"{}\";", name, escape(&child.name));
        write_edges(child, dot);
    }
}

/// Escape a string for use inside a double-quoted DOT identifier or label
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, tools: &[&str], handoffs: Vec<AgentNode>) -> AgentNode {
        AgentNode {
            name: name.to_string(),
            instructions: format!("{} instructions", name),
            tools: tools.iter().map(|t| t.to_string()).collect(),
            handoffs,
        }
    }

    #[test]
    fn test_single_agent_graph() {
        let dot = to_dot(&node("Solo", &[], vec![]));
        assert!(dot.starts_with("digraph AgentGraph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains(
            "\"Solo\" [label=\"Solo\", shape=box, style=filled, fillcolor=lightyellow];"
        ));
        assert!(dot.contains("\"__start__\" -> \"Solo\";"));
        assert!(dot.contains("\"Solo\" -> \"__end__\";"));
    }

    #[test]
    fn test_handoff_edges_follow_child_order() {
        let dot = to_dot(&node(
            "Root",
            &[],
            vec![node("A", &[], vec![]), node("B", &[], vec![])],
        ));
        assert!(dot.contains("\"Root\" -> \"A\";"));
        assert!(dot.contains("\"Root\" -> \"B\";"));
        // Parent is no longer a leaf
        assert!(!dot.contains("\"Root\" -> \"__end__\";"));
        assert!(dot.contains("\"A\" -> \"__end__\";"));
        assert!(dot.contains("\"B\" -> \"__end__\";"));

        let a = dot.find("\"Root\" -> \"A\";").unwrap();
        let b = dot.find("\"Root\" -> \"B\";").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_tool_nodes_are_dotted_ellipses() {
        let dot = to_dot(&node("Agent", &["search"], vec![]));
        assert!(dot.contains(
            "\"search\" [label=\"search\", shape=ellipse, style=filled, fillcolor=lightgreen];"
        ));
        assert!(dot.contains("\"Agent\" -> \"search\" [style=dotted, penwidth=1.5];"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let dot = to_dot(&node("He said \"hi\"", &[], vec![]));
        assert!(dot.contains("\\\"hi\\\""));
        assert!(!dot.contains("\"He said \"hi\"\""));

        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("line\nbreak"), "line\\nbreak");
    }
}
