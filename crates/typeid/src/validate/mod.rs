//! Prefix validation.
//!
//! A prefix is a human-readable type tag: lowercase ASCII words joined
//! by single underscores, at most 63 characters. The empty prefix is
//! valid and denotes "no type".

use crate::error::PrefixError;

/// Maximum prefix length in characters.
pub const MAX_PREFIX_LEN: usize = 63;

/// Validates a candidate prefix.
///
/// Rules, checked in order:
/// 1. at most [`MAX_PREFIX_LEN`] characters;
/// 2. every character is `a`-`z` or `_`;
/// 3. if non-empty, the prefix neither starts nor ends with `_` and
///    contains no `__` (underscores only separate non-empty segments).
///
/// Pure and idempotent; `Ok(())` for the empty prefix.
pub fn validate_prefix(prefix: &str) -> Result<(), PrefixError> {
    if prefix.len() > MAX_PREFIX_LEN {
        return Err(PrefixError::TooLong { len: prefix.len() });
    }

    for (index, ch) in prefix.char_indices() {
        if !(ch.is_ascii_lowercase() || ch == '_') {
            return Err(PrefixError::InvalidCharacter { ch, index });
        }
    }

    if prefix.is_empty() {
        return Ok(());
    }

    // All characters are ASCII at this point, so byte positions are
    // character positions.
    let bytes = prefix.as_bytes();
    if bytes[0] == b'_' {
        return Err(PrefixError::EmptySegment { index: 0 });
    }
    if bytes[bytes.len() - 1] == b'_' {
        return Err(PrefixError::EmptySegment { index: bytes.len() - 1 });
    }
    if let Some(pos) = prefix.find("__") {
        // Report the second underscore of the pair.
        return Err(PrefixError::EmptySegment { index: pos + 1 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_is_valid() {
        assert_eq!(validate_prefix(""), Ok(()));
    }

    #[test]
    fn plain_lowercase_prefixes_are_valid() {
        for prefix in ["user", "org", "abcdefghijklmnopqrstuvwxyz"] {
            assert_eq!(validate_prefix(prefix), Ok(()));
        }
    }

    #[test]
    fn underscore_separated_segments_are_valid() {
        for prefix in ["ab_cd", "some_prefix", "a_b_c_d"] {
            assert_eq!(validate_prefix(prefix), Ok(()));
        }
    }

    #[test]
    fn max_length_is_63() {
        let ok = "s".repeat(63);
        assert_eq!(validate_prefix(&ok), Ok(()));

        let too_long = "s".repeat(64);
        assert_eq!(
            validate_prefix(&too_long),
            Err(PrefixError::TooLong { len: 64 })
        );
    }

    #[test]
    fn rejects_uppercase() {
        assert_eq!(
            validate_prefix("AB"),
            Err(PrefixError::InvalidCharacter { ch: 'A', index: 0 })
        );
        assert_eq!(
            validate_prefix("sOmeprefix"),
            Err(PrefixError::InvalidCharacter { ch: 'O', index: 1 })
        );
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        assert_eq!(
            validate_prefix("abc1"),
            Err(PrefixError::InvalidCharacter { ch: '1', index: 3 })
        );
        assert_eq!(
            validate_prefix("ab-cd"),
            Err(PrefixError::InvalidCharacter { ch: '-', index: 2 })
        );
    }

    #[test]
    fn rejects_non_ascii() {
        assert_eq!(
            validate_prefix("sömeprefix"),
            Err(PrefixError::InvalidCharacter { ch: 'ö', index: 1 })
        );
    }

    #[test]
    fn rejects_leading_underscore() {
        assert_eq!(
            validate_prefix("_ab"),
            Err(PrefixError::EmptySegment { index: 0 })
        );
        assert_eq!(
            validate_prefix("_"),
            Err(PrefixError::EmptySegment { index: 0 })
        );
    }

    #[test]
    fn rejects_trailing_underscore() {
        assert_eq!(
            validate_prefix("ab_"),
            Err(PrefixError::EmptySegment { index: 2 })
        );
    }

    #[test]
    fn rejects_doubled_underscore() {
        assert_eq!(
            validate_prefix("ab__cd"),
            Err(PrefixError::EmptySegment { index: 3 })
        );
    }

    #[test]
    fn length_check_runs_before_character_check() {
        let prefix = format!("{}A", "s".repeat(63));
        assert_eq!(
            validate_prefix(&prefix),
            Err(PrefixError::TooLong { len: 64 })
        );
    }

    #[test]
    fn validation_is_idempotent() {
        assert_eq!(validate_prefix("ab__cd"), validate_prefix("ab__cd"));
        assert_eq!(validate_prefix("user"), validate_prefix("user"));
    }
}
