//! A container for values that may be absent, present, or present but null
//!
//! [`MayBeValue`] is meant for optional fields of records that also accept
//! an explicit null, as found in JSON schemas. A plain `Option<T>` cannot
//! tell `{}` from `{"field": null}`; a `MayBeValue<T>` can.
//!
//! ```
//! use maybe_value::MayBeValue;
//!
//! let absent = MayBeValue::<String>::empty();
//! let null = MayBeValue::<String>::null();
//!
//! assert!(absent.is_empty());
//! assert!(null.is_present());
//! assert_ne!(absent, null);
//! assert_eq!(null.get(), Ok(None));
//! ```
//!
//! Containers can be written to and read from a small binary frame, see
//! the [`codec`] module.

pub mod codec;
mod error;
mod maybe;

pub use codec::Element;
pub use error::{DecodeError, EmptyValueAccess};
pub use maybe::MayBeValue;
