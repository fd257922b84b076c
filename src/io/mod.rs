//! Text I/O for molecule descriptions, sample records and coordinate blocks.
//!
//! - [`description`] – key/value and TOML molecule descriptions.
//! - [`record`] – `count / energy / atom lines` records, read and written
//!   losslessly.
//! - [`coords`] – bare coordinate blocks and single energy values read from a
//!   whitespace token stream.

use std::fmt;

pub mod coords;
pub mod description;
pub mod error;
pub mod record;
pub mod tokens;

pub use description::Description;
pub use error::Error;
pub use tokens::TokenReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Description,
    DescriptionToml,
    Record,
    Coordinates,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Description => write!(f, "description"),
            Format::DescriptionToml => write!(f, "TOML description"),
            Format::Record => write!(f, "record"),
            Format::Coordinates => write!(f, "coordinate block"),
        }
    }
}
