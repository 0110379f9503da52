//! Platform helpers for the installer: standard user directories,
//! target OS classification, and a thin external command wrapper.

pub use error::{Error, Result};

pub mod command;
pub mod dir;
mod error;
pub mod os;
