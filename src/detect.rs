use crate::codec::{self, util, Codec, Ulid, Uuid, GUID_LEN, ULID_LEN, UUID_LEN};
use crate::error::{LengthConstraint, Result, UlidUuidError};
use crate::types::{Conversion, IdKind, Mode};

/// Decides which identifier family `input` belongs to, by shape alone.
pub fn classify(input: &str, mode: Mode) -> IdKind {
    codec::all()
        .iter()
        .find_map(|c| c.shape(input, mode))
        .unwrap_or(IdKind::Unrecognized)
}

// Picks the most specific reason an unclassifiable input was refused.
fn explain_unrecognized(input: &str, mode: Mode) -> UlidUuidError {
    for c in codec::all() {
        let len = c.normalize(input, mode).chars().count();
        if c.meta().lengths.contains(&len) {
            if let Err(e) = c.decode(input, mode) {
                return e;
            }
        }
    }
    UlidUuidError::invalid_length(
        "ULID|UUID|GUID",
        LengthConstraint::OneOf(&[ULID_LEN, GUID_LEN, UUID_LEN]),
        util::clean_for_mode(input, mode).chars().count(),
    )
}

/// Converts a ULID to its UUID form, or a UUID/GUID to its ULID form.
///
/// Every failure is reported as [`UlidUuidError::Conversion`]; the codec error
/// that caused it is kept as the source.
pub fn check_type(input: &str, mode: Mode) -> Result<Conversion> {
    let kind = classify(input, mode);
    let (source, target) = match kind {
        IdKind::Ulid => (&Ulid as &dyn Codec, &Uuid as &dyn Codec),
        IdKind::Uuid | IdKind::Guid => (&Uuid as &dyn Codec, &Ulid as &dyn Codec),
        IdKind::Unrecognized => {
            return Err(UlidUuidError::conversion(explain_unrecognized(input, mode)));
        }
    };

    let bytes = source.decode(input, mode).map_err(UlidUuidError::conversion)?;

    Ok(Conversion {
        schema_version: 1,
        input: input.to_string(),
        kind,
        output: target.encode(&bytes),
    })
}
