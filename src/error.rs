use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    InvalidInput = 1,
    IoError = 12,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    Exact(usize),
    OneOf(&'static [usize]),
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::Exact(n) => write!(f, "exactly {}", n),
            LengthConstraint::OneOf(options) => {
                let joined: Vec<String> = options.iter().map(|n| n.to_string()).collect();
                write!(f, "one of {}", joined.join(", "))
            }
        }
    }
}

/// Failure classes reported by the codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Length or character set matches no known format.
    Shape,
    /// ULID-shaped input whose value does not fit in 128 bits.
    Range,
    /// UUID-shaped input with non-hex digits or misplaced hyphens.
    Hex,
    /// Errors outside the codecs (usage, I/O, serialization).
    Other,
}

#[derive(Debug, Error)]
pub enum UlidUuidError {
    #[error("invalid {format} length: expected {expected}, got {actual}")]
    InvalidLength {
        format: &'static str,
        expected: LengthConstraint,
        actual: usize,
    },

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("ULID out of range")]
    OutOfRange,

    #[error("invalid hex digit '{char}' at position {position}")]
    InvalidHex { char: char, position: usize },

    #[error("misplaced hyphen at position {position}")]
    InvalidHyphen { position: usize },

    #[error("not valid ULID|UUID|GUID: {cause}")]
    Conversion {
        #[source]
        cause: Box<UlidUuidError>,
    },

    #[error("{message}")]
    Usage { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UlidUuidError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            UlidUuidError::Io(_) => ExitCode::IoError,
            _ => ExitCode::InvalidInput,
        }
    }

    /// The failure class; a conversion error reports the class of its cause.
    pub fn class(&self) -> ErrorClass {
        match self {
            UlidUuidError::InvalidLength { .. } | UlidUuidError::InvalidCharacter { .. } => ErrorClass::Shape,
            UlidUuidError::OutOfRange => ErrorClass::Range,
            UlidUuidError::InvalidHex { .. } | UlidUuidError::InvalidHyphen { .. } => ErrorClass::Hex,
            UlidUuidError::Conversion { cause } => cause.class(),
            UlidUuidError::Usage { .. } | UlidUuidError::Io(_) | UlidUuidError::Json(_) => ErrorClass::Other,
        }
    }

    pub fn invalid_length(format: &'static str, expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidLength {
            format,
            expected,
            actual,
        }
    }

    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn invalid_hex(ch: char, pos: usize) -> Self {
        Self::InvalidHex {
            char: ch,
            position: pos,
        }
    }

    pub fn conversion(cause: UlidUuidError) -> Self {
        Self::Conversion {
            cause: Box::new(cause),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UlidUuidError>;
