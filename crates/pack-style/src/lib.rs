//! Validated style declarations for the Pack box layout.
//!
//! A [`Pack`] holds the properties the layout engine reads (direction,
//! alignment, explicit sizes, flex, padding) alongside appearance
//! properties (colors, fonts, text alignment, visibility) that are pushed
//! to an [`Applicator`] as they change.
//!
//! # Example
//!
//! ```
//! use pack_core::Direction;
//! use pack_style::Pack;
//!
//! let mut style = Pack::new().with_direction(Direction::Column).with_padding(&[10]);
//! style.set("flex", 1).unwrap();
//! assert_eq!(style.to_string(), "direction: column; flex: 1; padding-bottom: 10; padding-left: 10; padding-right: 10; padding-top: 10");
//! ```

mod applicator;
mod choices;
mod pack;
mod property;
mod value;

pub use applicator::Applicator;
pub use choices::Choices;
pub use pack::Pack;
pub use property::{Effect, Property, PropertyDef, NONE, PADDING, PROPERTIES, TRANSPARENT};
pub use value::StyleValue;
