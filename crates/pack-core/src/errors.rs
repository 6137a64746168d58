//! Error types for the Pack layout crates.

use thiserror::Error;

/// Errors raised when assigning or reading style properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("Invalid value {value} for property {property}; Valid values are: {choices}")]
    InvalidValue {
        property: String,
        value: String,
        choices: String,
    },

    #[error("Unknown property '{name}'")]
    UnknownProperty { name: String },

    #[error("Invalid value for shorthand property {property}: expected 1 to 4 values, got {count}")]
    InvalidShorthand { property: String, count: usize },
}

/// Errors raised when parsing colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Unknown color {value}")]
    Unknown { value: String },
}

/// Errors raised when restructuring a layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Node {node} is a leaf and cannot have children")]
    LeafNode { node: usize },

    #[error("Node {node} already has a parent")]
    AlreadyParented { node: usize },

    #[error("Adding node {child} under node {parent} would create a cycle")]
    WouldCycle { parent: usize, child: usize },

    #[error("Node {child} is not a child of node {parent}")]
    NotAChild { parent: usize, child: usize },
}
