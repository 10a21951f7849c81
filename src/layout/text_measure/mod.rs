//! Text measurement for terminal layout.
//!
//! - [`width`]: display width of characters and strings in cells
//! - [`flow`]: wrapping text to a maximum width

pub mod flow;
pub mod width;

pub use flow::{flow, flow_height, flow_into};
pub use width::{char_width, line_width, placed_width, string_width};
