//! Core value types for the Pack box layout.
//!
//! This crate provides the foundational types shared by the style and layout crates:
//! - Keyword enums (direction, alignment, text direction, ...)
//! - Colors and CSS color parsing
//! - Font descriptions
//! - Error types

pub mod color;
pub mod errors;
pub mod font;
pub mod types;

pub use color::*;
pub use errors::*;
pub use font::{Font, SYSTEM_DEFAULT_FONT_SIZE};
pub use types::*;
