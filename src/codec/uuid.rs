use ::uuid::Uuid as UuidValue;

use super::{util, Codec};
use crate::error::{LengthConstraint, Result, UlidUuidError};
use crate::types::{CaseSensitivity, CodecMeta, IdBytes, IdKind, Mode};

const HEX_ALPHABET: &str = "0123456789abcdef";
const URN_PREFIX: &str = "urn:uuid:";
pub const UUID_LEN: usize = 36;
pub const GUID_LEN: usize = 32;

// Offsets of the separators in the 8-4-4-4-12 form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Unwraps the lenient forms, returning the bare text and how many chars preceded it.
fn unwrap_lenient(input: &str) -> (&str, usize) {
    let (trimmed, offset) = util::clean_with_offset(input, Mode::Lenient);
    if let Some(inner) = trimmed.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        return (inner, offset + 1);
    }
    match util::strip_prefix_ignore_case(trimmed, URN_PREFIX) {
        Some(rest) => (rest, offset + URN_PREFIX.len()),
        None => (trimmed, offset),
    }
}

fn unwrap_with_offset(input: &str, mode: Mode) -> (&str, usize) {
    match mode {
        Mode::Strict => (input, 0),
        Mode::Lenient => unwrap_lenient(input),
    }
}

fn is_separator(pos: usize) -> bool {
    HYPHEN_POSITIONS.contains(&pos)
}

// uuid::Error carries no position, so rescan for the first offending char.
fn diagnose(text: &str, offset: usize) -> UlidUuidError {
    let hyphenated = text.chars().count() == UUID_LEN;
    for (pos, ch) in text.chars().enumerate() {
        let separator = hyphenated && is_separator(pos);
        match (ch, separator) {
            ('-', true) => {}
            ('-', false) | (_, true) => return UlidUuidError::InvalidHyphen { position: offset + pos },
            (c, false) if c.is_ascii_hexdigit() => {}
            (c, false) => return UlidUuidError::invalid_hex(c, offset + pos),
        }
    }
    UlidUuidError::invalid_length("UUID", LengthConstraint::OneOf(&[GUID_LEN, UUID_LEN]), text.chars().count())
}

pub fn encode_uuid(bytes: &IdBytes) -> String {
    UuidValue::from_bytes(*bytes).hyphenated().to_string()
}

pub fn decode_uuid(input: &str, mode: Mode) -> Result<IdBytes> {
    let (text, offset) = unwrap_with_offset(input, mode);

    // The uuid crate also takes braced and URN text; those only pass through lenient unwrapping.
    let len = text.chars().count();
    if len != UUID_LEN && len != GUID_LEN {
        return Err(UlidUuidError::invalid_length(
            "UUID",
            LengthConstraint::OneOf(&[GUID_LEN, UUID_LEN]),
            len,
        ));
    }

    UuidValue::try_parse(text)
        .map(|uuid| uuid.into_bytes())
        .map_err(|_| diagnose(text, offset))
}

pub struct Uuid;

impl Codec for Uuid {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "uuid",
            aliases: &["guid"],
            alphabet: HEX_ALPHABET,
            lengths: &[GUID_LEN, UUID_LEN],
            case_sensitivity: CaseSensitivity::Lower,
            description: "UUID, 8-4-4-4-12 hex groups, or 32 bare hex digits as GUID",
        }
    }

    fn encode(&self, input: &IdBytes) -> String {
        encode_uuid(input)
    }

    fn decode(&self, input: &str, mode: Mode) -> Result<IdBytes> {
        decode_uuid(input, mode)
    }

    fn shape(&self, input: &str, mode: Mode) -> Option<IdKind> {
        let text = self.normalize(input, mode);
        match text.chars().count() {
            UUID_LEN if text.chars().enumerate().all(|(pos, ch)| (ch == '-') == is_separator(pos)) => {
                Some(IdKind::Uuid)
            }
            GUID_LEN if text.chars().all(|ch| ch.is_ascii_alphanumeric()) => Some(IdKind::Guid),
            _ => None,
        }
    }

    fn normalize<'a>(&self, input: &'a str, mode: Mode) -> &'a str {
        unwrap_with_offset(input, mode).0
    }
}
