//! Themes: table glyphs and the palette of named styles.
//!
//! The renderer reads two well-known palette entries, [`HEADER_STYLE`] and
//! [`STRIPE_STYLE`]. Any other entry is available to value transforms
//! through [`Palette::paint`].

mod palette;
#[allow(clippy::module_inception)]
mod theme;

pub use palette::Palette;
pub use theme::{Theme, HEADER_STYLE, STRIPE_STYLE};
