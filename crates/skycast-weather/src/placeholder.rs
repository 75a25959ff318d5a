//! Stand-in values for data the provider payloads don't carry.
//!
//! UV index and per-day precipitation live behind the provider's paid
//! One Call plan, so until that is wired in these return random values in
//! fixed ranges. They are deliberately not derived from any real
//! measurement; tests must only assert the range, never an exact value.

use rand::Rng;

/// UV index stand-in, uniform in 1..=10
pub fn uv_index() -> u8 {
    rand::thread_rng().gen_range(1..=10)
}

/// Precipitation stand-in for today's daily entry, uniform in 5..=20
pub fn precipitation_today() -> u8 {
    rand::thread_rng().gen_range(5..=20)
}

/// Precipitation stand-in for future daily entries, uniform in 5..=50
pub fn precipitation_outlook() -> u8 {
    rand::thread_rng().gen_range(5..=50)
}
