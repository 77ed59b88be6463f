use std::io::{self, Write};

use crate::error::Result;

pub struct OutputConfig {
    pub newline: bool,
}

pub fn write_output(text: &str, config: &OutputConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_to(&mut handle, text, config)
}

fn write_to<W: Write>(out: &mut W, text: &str, config: &OutputConfig) -> Result<()> {
    out.write_all(text.as_bytes())?;
    if config.newline {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
