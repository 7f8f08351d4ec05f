//! # Linal IO Library
//!
//! Text-stream entry and table output for matrix values, built only on the
//! capability interface exported by `linal-core`.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{LinalIoError, Result};
pub use reader::{fill_from_tokens, read_dense};
pub use writer::{table_to_string, write_table};
