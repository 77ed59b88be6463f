mod ulid;
pub(crate) mod util;
mod uuid;

pub use self::ulid::{decode_ulid, encode_ulid, Ulid, ULID_LEN};
pub use self::uuid::{decode_uuid, encode_uuid, Uuid, GUID_LEN, UUID_LEN};

use crate::error::Result;
use crate::types::{CodecMeta, IdBytes, IdKind, Mode};

pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &IdBytes) -> String;
    fn decode(&self, input: &str, mode: Mode) -> Result<IdBytes>;

    /// Classifies `input` by length and separators only; `None` if the shape is foreign.
    fn shape(&self, input: &str, mode: Mode) -> Option<IdKind>;

    fn normalize<'a>(&self, input: &'a str, mode: Mode) -> &'a str {
        util::clean_for_mode(input, mode)
    }

    fn name(&self) -> &'static str {
        self.meta().name
    }
}

static CODECS: [&dyn Codec; 2] = [&Ulid, &Uuid];

/// Every codec, in classification order.
pub fn all() -> &'static [&'static dyn Codec] {
    &CODECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codecs_listed_in_order() {
        let names: Vec<&str> = all().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["ulid", "uuid"]);
    }

    #[test]
    fn test_codec_lengths_are_disjoint() {
        let ulid = Ulid.meta();
        let uuid = Uuid.meta();
        assert!(ulid.lengths.iter().all(|len| !uuid.lengths.contains(len)));
    }

    #[test]
    fn test_codecs_share_bytes() {
        let bytes = Ulid.decode("08A1YW3WAH8SNTQVYGDB2EP69T", Mode::Strict).unwrap();
        assert_eq!(Uuid.encode(&bytes), "08507dc1-f151-466b-abef-d06ac4eb193a");
        assert_eq!(Ulid.encode(&Uuid.decode(&Uuid.encode(&bytes), Mode::Strict).unwrap()), "08A1YW3WAH8SNTQVYGDB2EP69T");
    }
}
