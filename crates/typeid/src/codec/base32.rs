//! Bit-level base32 encoding/decoding of the TypeID suffix.
//!
//! The suffix packs a 128-bit big-endian value into 26 five-bit symbols
//! (130 bits of capacity). The two excess bits sit at the front: the first
//! symbol only ever carries the top 3 bits of the value, so its decoded
//! value must be below 8. Because 128 is not a multiple of 5, symbol
//! boundaries cross byte boundaries; both directions use an explicit
//! accumulator with a bits-held counter instead of per-symbol shifts.

use crate::error::SuffixError;

/// The canonical suffix length in characters.
pub const SUFFIX_LEN: usize = 26;

/// The 32-symbol suffix alphabet: digits, then lowercase letters with
/// `i`, `l`, `o`, `u` removed.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Number of payload bits per suffix character.
const BITS_PER_CHAR: usize = 5;

/// Sentinel for bytes that are not part of the alphabet.
const NO_VALUE: u8 = 0xFF;

/// Reverse lookup: ASCII byte -> 5-bit symbol value.
///
/// Lowercase is canonical; uppercase aliases map to the same values so
/// decoding is case-insensitive.
const LOOKUP: [u8; 256] = {
    let mut table = [NO_VALUE; 256];
    let mut i = 0;
    while i < 32 {
        let c = ALPHABET[i];
        table[c as usize] = i as u8;
        if c.is_ascii_lowercase() {
            table[(c - 32) as usize] = i as u8;
        }
        i += 1;
    }
    table
};

/// Encodes 16 bytes as a 26-character lowercase base32 string.
///
/// Encoding is total: every 16-byte value has exactly one canonical
/// suffix, and the first character is always `0`-`7`.
pub fn encode_suffix(bytes: &[u8; 16]) -> String {
    let mut out = [0u8; SUFFIX_LEN];
    let mut pos = 0;

    // Start with two zero pad bits so that 130 bits drain into exactly
    // 26 symbols, most-significant window first.
    let mut acc: u16 = 0;
    let mut bits: usize = 2;

    for &b in bytes {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            out[pos] = ALPHABET[((acc >> bits) & 0x1F) as usize];
            pos += 1;
        }
    }
    debug_assert_eq!(pos, SUFFIX_LEN);
    debug_assert_eq!(bits, 0);

    // The alphabet is pure ASCII, so the buffer is valid UTF-8.
    out.iter().map(|&b| b as char).collect()
}

/// Decodes a 26-character base32 string into 16 bytes.
///
/// Uppercase input is accepted and treated as its lowercase equivalent.
/// Checks, in order: length, character class, and the 128-bit range of
/// the first character.
pub fn decode_suffix(suffix: &str) -> Result<[u8; 16], SuffixError> {
    if suffix.len() != SUFFIX_LEN {
        return Err(SuffixError::InvalidLength { len: suffix.len() });
    }

    let mut values = [0u8; SUFFIX_LEN];
    for (index, byte) in suffix.bytes().enumerate() {
        let value = LOOKUP[byte as usize];
        if value == NO_VALUE {
            return Err(SuffixError::InvalidCharacter { byte, index });
        }
        values[index] = value;
    }

    // A structurally valid suffix can still encode 129 or 130 bits.
    if values[0] > 0x07 {
        return Err(SuffixError::Overflow);
    }

    let mut out = [0u8; 16];
    let mut pos = 0;

    // First symbol holds only 3 payload bits; with that seed, every
    // subsequent symbol drains whole bytes as they fill up.
    let mut acc: u16 = u16::from(values[0]);
    let mut bits: usize = 3;

    for &value in &values[1..] {
        acc = (acc << BITS_PER_CHAR) | u16::from(value);
        bits += BITS_PER_CHAR;
        if bits >= 8 {
            bits -= 8;
            out[pos] = ((acc >> bits) & 0xFF) as u8;
            pos += 1;
        }
    }
    debug_assert_eq!(pos, 16);
    debug_assert_eq!(bits, 0);

    Ok(out)
}
