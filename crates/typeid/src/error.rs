//! Error types for TypeID validation, decoding, and parsing.

use thiserror::Error;

/// Error while validating a type prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    /// The prefix exceeds the maximum length of 63 characters.
    #[error("prefix has {len} characters, must not have more than 63")]
    TooLong { len: usize },

    /// The prefix contains a character outside `a-z` and `_`.
    #[error("illegal character {ch:?} in prefix at position {index}, must be one of [a-z_]")]
    InvalidCharacter { ch: char, index: usize },

    /// An underscore creates an empty segment (leading, trailing, or doubled).
    #[error("underscore at position {index} in prefix creates an empty segment")]
    EmptySegment { index: usize },
}

/// Error while decoding a 26-character suffix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuffixError {
    /// The suffix is not exactly 26 characters long.
    #[error("suffix has {len} characters, must be exactly 26")]
    InvalidLength { len: usize },

    /// The suffix contains a byte outside the base32 alphabet.
    #[error(
        "illegal character in suffix at position {index}, \
         must be one of [0123456789abcdefghjkmnpqrstvwxyz]"
    )]
    InvalidCharacter { byte: u8, index: usize },

    /// The leftmost character encodes a value above 7, which would require
    /// more than 128 bits.
    #[error("leftmost suffix character must be one of [01234567]")]
    Overflow,
}

/// Error while parsing the textual form of a TypeID.
///
/// Wraps the first failure found: separator placement is checked first,
/// then the prefix, then the suffix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A TypeID with an empty prefix must not contain the `_` separator.
    #[error("TypeID with empty prefix must not contain the separator '_'")]
    MalformedSeparator,

    #[error(transparent)]
    Prefix(#[from] PrefixError),

    #[error(transparent)]
    Suffix(#[from] SuffixError),
}
