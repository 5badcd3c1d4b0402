//! TypeID: type-safe, K-sortable, globally unique identifiers.
//!
//! This crate implements the TypeID format as specified at
//! <https://github.com/jetify-com/typeid>: a lowercase type prefix joined
//! by `_` to a 26-character base32 encoding of a 128-bit value, e.g.
//! `user_01h455vb4pex5vsknk084sn02q`.
//!
//! TypeIDs are designed for:
//! - **Type safety**: the prefix says what kind of resource an ID names
//! - **Sortability**: UUIDv7-backed IDs sort in creation order
//! - **Compactness**: 26 characters for 128 bits, no ambiguous letters
//!
//! # Quick Start
//!
//! ```rust
//! use typeid::TypeId;
//!
//! // Generate a fresh, time-ordered identifier
//! let id = TypeId::generate("user")?;
//! assert_eq!(id.prefix(), "user");
//!
//! // Round-trip through the canonical string form
//! let parsed: TypeId = id.to_string().parse()?;
//! assert_eq!(parsed, id);
//!
//! // Wrap an existing UUID of any version
//! let wrapped = TypeId::from_uuid("order", uuid::Uuid::new_v4())?;
//! assert_eq!(wrapped.suffix().len(), 26);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: the [`TypeId`] value type, formatting and parsing
//! - [`codec`]: base32 suffix encoding/decoding
//! - [`validate`]: prefix validation
//! - [`error`]: error types
//!
//! # Format
//!
//! The suffix alphabet is `0123456789abcdefghjkmnpqrstvwxyz` (Crockford's
//! base32 character set). 26 symbols hold 130 bits, so the first symbol
//! carries only the top 3 bits of the value and must be `0`-`7`; a suffix
//! starting with `8`-`z` is rejected as out of range. Decoding accepts
//! uppercase input, encoding always emits lowercase.
//!
//! Prefixes are 0-63 characters of `a-z`, with single underscores
//! allowed between non-empty segments (`warehouse_order` is valid,
//! `_order` and `ware__house` are not). Parsing splits on the *last*
//! underscore, so underscored prefixes remain unambiguous.
//!
//! All operations are pure and allocation-light: no I/O, no global
//! mutable state, and the decode table is a compile-time constant, so
//! every entry point is safe to call from any number of threads.
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`TypeId`] via the canonical
//!   string form.

pub mod codec;
pub mod error;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{ALPHABET, SUFFIX_LEN, decode_suffix, encode_suffix};
pub use error::{ParseError, PrefixError, SuffixError};
pub use model::TypeId;
pub use validate::{MAX_PREFIX_LEN, validate_prefix};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// TypeID spec version this crate implements.
pub const SPEC_VERSION: &str = "0.3.0";
