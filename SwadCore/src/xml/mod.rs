//! Generic XML tree parser and printer

pub mod error;
pub mod parser;
pub mod printer;
pub mod tree;

use std::path::Path;

pub use error::{XmlError, XmlErrorKind};
pub use parser::{MAX_DEPTH, parse, parse_str};
pub use printer::{Escape, print_tree};
pub use tree::{XmlAttribute, XmlElement};

use crate::error::{Error, Result};

/// Read and parse an XML file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<XmlElement> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::PathNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    tracing::debug!("parsing {}", path.display());
    Ok(parse(&bytes)?)
}
