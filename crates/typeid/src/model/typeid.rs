//! The `TypeId` value: a validated prefix plus a 128-bit value.

use core::fmt;
use core::str::FromStr;

use uuid::Uuid;

use crate::codec::{decode_suffix, encode_suffix};
use crate::error::{ParseError, PrefixError};
use crate::validate::validate_prefix;

/// The `_` joining prefix and suffix in the textual form.
const SEPARATOR: char = '_';

/// A typed, sortable, globally unique identifier.
///
/// A `TypeId` pairs a validated prefix (possibly empty) with an opaque
/// 16-byte value, usually a UUIDv7. Its canonical textual form is
/// `prefix_suffix`, or the bare 26-character suffix when the prefix is
/// empty:
///
/// ```
/// use typeid::TypeId;
///
/// let id: TypeId = "user_01h455vb4pex5vsknk084sn02q".parse()?;
/// assert_eq!(id.prefix(), "user");
/// assert_eq!(id.suffix(), "01h455vb4pex5vsknk084sn02q");
/// assert_eq!(id.to_string(), "user_01h455vb4pex5vsknk084sn02q");
/// # Ok::<(), typeid::ParseError>(())
/// ```
///
/// Values are immutable; every public constructor validates the prefix,
/// so a `TypeId` in hand always satisfies the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId {
    prefix: String,
    bytes: [u8; 16],
}

impl TypeId {
    /// Creates a `TypeId` from a prefix and a 16-byte value.
    ///
    /// The value is taken as-is; no assumption is made about its UUID
    /// version or variant bits.
    pub fn from_parts(prefix: impl Into<String>, bytes: [u8; 16]) -> Result<Self, PrefixError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        Ok(Self { prefix, bytes })
    }

    /// Creates a `TypeId` without validating the prefix.
    ///
    /// Only for reconstructing identifiers whose prefix is already known
    /// to be valid (e.g. compile-time constants, trusted storage). An
    /// invalid prefix here produces a `TypeId` whose textual form cannot
    /// be parsed back.
    pub fn from_parts_unchecked(prefix: impl Into<String>, bytes: [u8; 16]) -> Self {
        Self {
            prefix: prefix.into(),
            bytes,
        }
    }

    /// Creates a `TypeId` from a prefix and a [`Uuid`] of any version.
    pub fn from_uuid(prefix: impl Into<String>, uuid: Uuid) -> Result<Self, PrefixError> {
        Self::from_parts(prefix, *uuid.as_bytes())
    }

    /// Generates a new prefixed `TypeId` backed by a fresh UUIDv7.
    ///
    /// UUIDv7 is time-ordered, so identifiers generated in sequence sort
    /// in creation order, both as bytes and as strings.
    pub fn generate(prefix: impl Into<String>) -> Result<Self, PrefixError> {
        Self::from_uuid(prefix, Uuid::now_v7())
    }

    /// Generates a new `TypeId` with an empty prefix, backed by a fresh
    /// UUIDv7.
    pub fn generate_prefixless() -> Self {
        Self {
            prefix: String::new(),
            bytes: *Uuid::now_v7().as_bytes(),
        }
    }

    /// Parses the textual form of a TypeID.
    ///
    /// The string is split on the *last* underscore, since prefixes may
    /// contain underscores as segment separators. A string without any
    /// underscore is a bare suffix with an empty prefix. The prefix is
    /// validated before the suffix is decoded, so when both are invalid
    /// the prefix error is reported.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match input.rfind(SEPARATOR) {
            None => {
                let bytes = decode_suffix(input)?;
                Ok(Self::from_parts_unchecked(String::new(), bytes))
            }
            // An empty prefix must produce a bare suffix, never "_suffix".
            Some(0) => Err(ParseError::MalformedSeparator),
            Some(sep) => {
                let prefix = &input[..sep];
                let suffix = &input[sep + 1..];
                validate_prefix(prefix)?;
                let bytes = decode_suffix(suffix)?;
                Ok(Self::from_parts_unchecked(prefix, bytes))
            }
        }
    }

    /// Returns the prefix, which may be empty.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the raw 16-byte value, big-endian.
    pub fn bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the value interpreted as a [`Uuid`].
    pub fn uuid(&self) -> Uuid {
        Uuid::from_bytes(self.bytes)
    }

    /// Returns the canonical 26-character suffix, without the prefix.
    pub fn suffix(&self) -> String {
        encode_suffix(&self.bytes)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.prefix.is_empty() {
            f.write_str(&self.prefix)?;
            write!(f, "{SEPARATOR}")?;
        }
        f.write_str(&encode_suffix(&self.bytes))
    }
}

impl FromStr for TypeId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TypeId {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<TypeId> for Uuid {
    fn from(id: TypeId) -> Self {
        id.uuid()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TypeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
