//! Reusable view components

mod cards;
mod glyph;
mod nav;
mod sections;

pub use cards::*;
pub use glyph::Glyph;
pub use nav::{activate, Navbar};
pub use sections::*;
