//! Colors and style definitions for themes.

mod color;
mod definition;
mod value;

pub use color::{rgb_to_ansi256, ColorDef};
pub use definition::StyleDef;
pub use value::StyleValue;
