use clap::Parser;

use crate::types::Mode;

#[derive(Parser)]
#[command(name = "ulid_uuid")]
#[command(about = "Convert a ULID to a UUID, or a UUID/GUID to a ULID")]
#[command(override_usage = "ulid_uuid [-hn] [UUID|GUID|ULID]")]
#[command(version)]
pub struct Cli {
    #[arg(value_name = "UUID|GUID|ULID", help = "Identifier to convert, or - to read it from stdin")]
    pub input: Option<String>,

    #[arg(short = 'n', help = "Do not print the trailing newline")]
    pub no_newline: bool,

    #[arg(long, short = 'l', help = "Trim whitespace, accept Crockford aliases, braced and URN UUIDs")]
    pub lenient: bool,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.lenient {
            Mode::Lenient
        } else {
            Mode::Strict
        }
    }
}
