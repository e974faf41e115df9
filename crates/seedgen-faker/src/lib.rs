//! Wordlist-backed person data source for seedgen.
//!
//! This crate provides [`Wordbook`], the default implementation of the
//! [`PersonSource`] capability used by the record generator for free-text
//! fields (name, email, phone number). All randomness comes from the RNG
//! handed in per call, so a seeded generator produces the same people on
//! every run.
//!
//! The wordlists are small and embedded; values are plausible rather than
//! realistic, which is all database seeding needs. Duplicates across
//! records are expected and permitted.

mod wordlists;

use rand::{Rng, RngCore};
use seedgen_core::PersonSource;
use wordlists::{EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES};

/// Default person source backed by embedded wordlists.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wordbook;

impl Wordbook {
    /// Create a new wordbook person source.
    pub fn new() -> Self {
        Self
    }
}

impl PersonSource for Wordbook {
    fn full_name(&self, rng: &mut dyn RngCore) -> String {
        format!("{} {}", pick(FIRST_NAMES, rng), pick(LAST_NAMES, rng))
    }

    fn email(&self, rng: &mut dyn RngCore) -> String {
        let first = pick(FIRST_NAMES, rng).to_lowercase();
        let last = pick(LAST_NAMES, rng).to_lowercase();
        let number: u16 = rng.gen_range(1..1000);
        let domain = pick(EMAIL_DOMAINS, rng);
        format!("{first}.{last}{number}@{domain}")
    }

    fn phone(&self, rng: &mut dyn RngCore) -> String {
        // MSISDN-style digit string: 11 digits, no leading zero
        let mut digits = String::with_capacity(11);
        digits.push(char::from_digit(rng.gen_range(1..10), 10).unwrap());
        for _ in 1..11 {
            digits.push(char::from_digit(rng.gen_range(0..10), 10).unwrap());
        }
        digits
    }
}

fn pick(list: &[&'static str], rng: &mut dyn RngCore) -> &'static str {
    list[rng.gen_range(0..list.len())]
}
