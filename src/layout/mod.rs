//! Layout Module
//!
//! Measures and wraps text for a terminal grid. Everything here is a pure
//! function of its input; widths are recomputed on every redraw because the
//! terminal may have been resized in between.

pub mod text_measure;

pub use text_measure::{
    char_width, flow, flow_height, flow_into, line_width, placed_width, string_width,
};
