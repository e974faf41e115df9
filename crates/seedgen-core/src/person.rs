//! Injected capability for person-like free text.

use rand::RngCore;

/// Source of person-like free text (names, emails, phone numbers).
///
/// The record generator does not fabricate realistic person data itself;
/// it delegates to an implementation of this trait. Implementations draw
/// all randomness from the RNG handed in by the caller, so a seeded
/// generator stays deterministic end to end.
///
/// The default implementation lives in the `seedgen-faker` crate.
pub trait PersonSource {
    /// Generate a full display name, e.g. `"Priya Sharma"`.
    fn full_name(&self, rng: &mut dyn RngCore) -> String;

    /// Generate an email address.
    fn email(&self, rng: &mut dyn RngCore) -> String;

    /// Generate a phone number as a digit string.
    fn phone(&self, rng: &mut dyn RngCore) -> String;
}
