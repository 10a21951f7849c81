//! Error type for the picker library.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no options to choose from")]
    NoOptions,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to spawn {name} thread: {source}")]
    Spawn {
        name: &'static str,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
