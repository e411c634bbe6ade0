//! Ochre Typography
//!
//! Responsive sizing for the component layer: breakpoint classification
//! from screen dimensions and a type scale normalized against a
//! reference device width. Everything recomputes deterministically from
//! the dimensions passed in; there is no cached or ambient state.

mod breakpoint;
mod scale;

pub use breakpoint::{Breakpoint, COMPACT_MAX_DP, EXPANDED_MIN_DP, WIDE_MIN_DP};
pub use scale::{scale_font, TextStyle, TypeScale, REFERENCE_WIDTH_DP};
