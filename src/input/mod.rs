//! Input handling.
//!
//! - [`events`]: the closed key/resize event set and crossterm conversion
//! - [`reader`]: the terminal reader thread
//! - [`debounce`]: the typed-index matcher thread

pub mod debounce;
pub mod events;
pub mod reader;

pub use debounce::{key_space, resolve, Choice, Debouncer};
pub use events::{convert_event, convert_key_event, InputEvent, Key};
pub use reader::InputReader;
