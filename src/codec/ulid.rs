use ::ulid::Ulid as UlidValue;

use super::{util, Codec};
use crate::error::{LengthConstraint, Result, UlidUuidError};
use crate::types::{CaseSensitivity, CodecMeta, IdBytes, IdKind, Mode};

const ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
pub const ULID_LEN: usize = 26;

// 26 symbols carry 130 bits, so the leading one may only use the low 3.
const MAX_LEADING: char = '7';

fn normalize_symbol(ch: char, mode: Mode) -> char {
    match (mode, ch.to_ascii_uppercase()) {
        (Mode::Lenient, 'O') => '0',
        (Mode::Lenient, 'I' | 'L') => '1',
        (_, upper) => upper,
    }
}

pub(crate) fn is_symbol(ch: char, mode: Mode) -> bool {
    ALPHABET.contains(normalize_symbol(ch, mode))
}

// The ulid crate reports no position, so rescan for the first offending char.
fn diagnose(cleaned: &str, offset: usize, mode: Mode) -> UlidUuidError {
    let len = cleaned.chars().count();
    if len != ULID_LEN {
        return UlidUuidError::invalid_length("ULID", LengthConstraint::Exact(ULID_LEN), len);
    }
    match cleaned.chars().enumerate().find(|&(_, ch)| !is_symbol(ch, mode)) {
        Some((pos, ch)) => UlidUuidError::invalid_char(ch, offset + pos),
        None => UlidUuidError::OutOfRange,
    }
}

pub fn encode_ulid(bytes: &IdBytes) -> String {
    UlidValue::from_bytes(*bytes).to_string()
}

pub fn decode_ulid(input: &str, mode: Mode) -> Result<IdBytes> {
    let (cleaned, offset) = util::clean_with_offset(input, mode);
    if cleaned.chars().count() != ULID_LEN || !cleaned.chars().all(|ch| is_symbol(ch, mode)) {
        return Err(diagnose(cleaned, offset, mode));
    }

    let normalized: String = cleaned.chars().map(|ch| normalize_symbol(ch, mode)).collect();

    let ulid = UlidValue::from_string(&normalized).map_err(|_| diagnose(cleaned, offset, mode))?;

    if !normalized.starts_with(|ch: char| ch <= MAX_LEADING) {
        return Err(UlidUuidError::OutOfRange);
    }

    Ok(ulid.to_bytes())
}

pub struct Ulid;

impl Codec for Ulid {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "ulid",
            aliases: &["crockford32"],
            alphabet: ALPHABET,
            lengths: &[ULID_LEN],
            case_sensitivity: CaseSensitivity::Upper,
            description: "ULID, 26 Crockford Base32 symbols",
        }
    }

    fn encode(&self, input: &IdBytes) -> String {
        encode_ulid(input)
    }

    fn decode(&self, input: &str, mode: Mode) -> Result<IdBytes> {
        decode_ulid(input, mode)
    }

    fn shape(&self, input: &str, mode: Mode) -> Option<IdKind> {
        let cleaned = self.normalize(input, mode);
        let fits = cleaned.chars().count() == ULID_LEN
            && cleaned.chars().all(|ch| is_symbol(ch, mode));
        fits.then_some(IdKind::Ulid)
    }
}
