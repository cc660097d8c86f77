//! Bundled fixed-width bitmap fonts.

pub(crate) mod catalog;
mod glyphs;
