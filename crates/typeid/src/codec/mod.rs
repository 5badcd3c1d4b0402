//! Base32 suffix codec.
//!
//! Converts between a 16-byte value and its canonical 26-character
//! textual suffix.

pub mod base32;

pub use base32::{ALPHABET, SUFFIX_LEN, decode_suffix, encode_suffix};
