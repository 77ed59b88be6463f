use crate::io::read_input;
use ulid_uuid::error::Result;
use ulid_uuid::types::{Conversion, InputSource, Mode};

pub fn run_convert(input: &InputSource, mode: Mode) -> Result<String> {
    run_convert_json(input, mode).map(|c| c.output)
}

pub fn run_convert_json(input: &InputSource, mode: Mode) -> Result<Conversion> {
    let text = read_input(input)?;
    ulid_uuid::convert_with(&text, mode)
}
