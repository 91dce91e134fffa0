//! Internal helpers shared by the graph types.

pub(crate) mod dot;

pub(crate) use dot::DotWriter;
