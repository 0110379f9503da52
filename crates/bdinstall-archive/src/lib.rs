//! Zip extraction through an external 7-Zip process.
//!
//! No in-process decompression: the archive is handed to `7z` and its
//! stdout is streamed back line by line as progress text.

pub use error::{Error, Result};
pub use extract::Zip;

mod error;
mod extract;
