mod convert;

pub use convert::{run_convert, run_convert_json};

use crate::io::{write_output, OutputConfig};
use ulid_uuid::error::Result;
use ulid_uuid::types::{InputSource, Mode};

pub trait CommandHandler {
    fn execute(&self) -> Result<()>;
}

pub struct ConvertCommand {
    pub input: InputSource,
    pub mode: Mode,
    pub newline: bool,
    pub json: bool,
}

impl CommandHandler for ConvertCommand {
    fn execute(&self) -> Result<()> {
        let config = OutputConfig {
            newline: self.newline,
        };

        if self.json {
            let result = run_convert_json(&self.input, self.mode)?;
            let rendered = serde_json::to_string_pretty(&result)?;
            return write_output(&rendered, &config);
        }

        let converted = run_convert(&self.input, self.mode)?;
        write_output(&converted, &config)
    }
}
