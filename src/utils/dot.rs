//! DOT format utilities for graph visualization.
//!
//! This module provides a small writer for Graphviz DOT output. Graphs render
//! themselves through [`DotWriter`] so that quoting and escaping live in one place.

use std::fmt::Write;

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// Handles quotes, backslashes, newlines and angle brackets.
#[must_use]
pub(crate) fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Incremental builder for a `digraph` document.
///
/// Statements are emitted in call order, which keeps the output deterministic
/// for a given graph.
pub(crate) struct DotWriter {
    out: String,
}

impl DotWriter {
    /// Opens a new `digraph` with the given (escaped) name.
    pub(crate) fn new(name: &str) -> Self {
        let mut out = String::new();
        let _ = writeln!(out, "digraph \"{}\" {{", escape_dot(name));
        DotWriter { out }
    }

    /// Emits a node statement.
    pub(crate) fn node(&mut self, id: &str, label: &str) {
        let _ = writeln!(
            self.out,
            "    \"{}\" [label=\"{}\"];",
            escape_dot(id),
            escape_dot(label)
        );
    }

    /// Emits an edge statement.
    pub(crate) fn edge(&mut self, from: &str, to: &str, label: &str) {
        let _ = writeln!(
            self.out,
            "    \"{}\" -> \"{}\" [label=\"{}\"];",
            escape_dot(from),
            escape_dot(to),
            escape_dot(label)
        );
    }

    /// Closes the document and returns the rendered text.
    pub(crate) fn finish(mut self) -> String {
        self.out.push_str("}\n");
        self.out
    }
}
