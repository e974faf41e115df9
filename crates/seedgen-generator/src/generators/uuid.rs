//! UUID value generator.

use rand::Rng;
use seedgen_core::FieldValue;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
///
/// Drawing the bytes from the caller's RNG (instead of `Uuid::new_v4`)
/// keeps seeded generation deterministic.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> FieldValue {
    FieldValue::Text(uuid_from_rng(rng).to_string())
}

/// Build a v4 UUID from 16 RNG bytes.
pub fn uuid_from_rng<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}
