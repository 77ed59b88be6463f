pub mod codec;
pub mod detect;
pub mod error;
pub mod types;

pub use detect::{check_type, classify};
pub use error::{ErrorClass, Result, UlidUuidError};
pub use types::{CaseSensitivity, CodecMeta, Conversion, IdBytes, IdKind, InputSource, Mode};

/// Converts a ULID into its UUID text, or a UUID/GUID into its ULID text.
pub fn convert(input: &str) -> Result<String> {
    check_type(input, Mode::Strict).map(|c| c.output)
}

/// Like [`convert`], with an explicit parsing mode and the full result record.
pub fn convert_with(input: &str, mode: Mode) -> Result<Conversion> {
    check_type(input, mode)
}
