use std::io::{self, Read};

use crate::error::Result;
use crate::types::InputSource;

pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => read_from(io::stdin().lock()),
        InputSource::Literal(text) => Ok(text.clone()),
    }
}

// One identifier per read; the line terminator is not part of it.
fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    let trimmed = buf.trim();
    if trimmed.is_empty() {
        eprintln!("Warning: no identifier read from stdin");
    }
    Ok(trimmed.to_string())
}
