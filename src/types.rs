use serde::Serialize;

/// The canonical intermediate form shared by both codecs.
pub type IdBytes = [u8; 16];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Strict,
    Lenient,
}

/// Shape of an input string, decided before any decoding happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    Ulid,
    Uuid,
    Guid,
    Unrecognized,
}

impl IdKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdKind::Ulid => "ULID",
            IdKind::Uuid => "UUID",
            IdKind::Guid => "GUID",
            IdKind::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseSensitivity {
    Lower,
    Upper,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: &'static str,
    pub lengths: &'static [usize],
    /// Case emitted by `encode`; decoding is always case-insensitive.
    pub case_sensitivity: CaseSensitivity,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub schema_version: u32,
    pub input: String,
    pub kind: IdKind,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s => InputSource::Literal(s.to_string()),
        }
    }
}
