//! The `TypeId` value type and its textual form.

pub mod typeid;

pub use typeid::TypeId;
