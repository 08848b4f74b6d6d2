//! User id generation.
//!
//! Generated ids are random 6-digit numerals (100000..=999999) rendered as
//! strings. The generator itself does not look at existing ids; callers that
//! need uniqueness check against the store and draw again.

use rand::Rng;

/// Smallest generated id
pub const ID_MIN: u32 = 100_000;
/// One past the largest generated id
pub const ID_MAX: u32 = 1_000_000;

/// Draw a fresh id from the thread-local RNG.
pub fn generate_id() -> String {
    generate_id_with(&mut rand::rng())
}

/// Draw a fresh id from the given RNG.
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(ID_MIN..ID_MAX).to_string()
}

/// True for strings of the shape `generate_id` produces.
pub fn is_generated_id(id: &str) -> bool {
    id.len() == 6
        && id.bytes().all(|b| b.is_ascii_digit())
        && !id.starts_with('0')
}
