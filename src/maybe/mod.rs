//! Defines the [`MayBeValue`] type

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use crate::error::EmptyValueAccess;

#[cfg(test)]
mod tests;

/// A container which may or may not hold a value, where the held value may
/// itself be null.
///
/// Unlike [`Option`], a [`MayBeValue`] distinguishes between a value that
/// is absent and a value that is present but null. This models optional
/// fields in JSON schemas or TypeScript object literals, where
/// `{}` and `{"field": null}` mean different things.
///
/// The null axis is represented with [`Option`]: [`MayBeValue::of`] takes
/// an `Option<T>` and [`MayBeValue::get`] hands out an `Option<&T>`.
///
/// Two containers are equal when their presence matches and, if present,
/// their values are equal. An absent container is never equal to a
/// present null one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub enum MayBeValue<T> {
    // The derived ordering relies on the order of these variants.
    /// No value, not even null.
    Empty,
    /// A value is present and it is null.
    Null,
    /// A value is present and it is not null.
    Value(T),
}

impl<T> MayBeValue<T> {
    /// The absent container
    ///
    /// This is a `const fn`, so it can be used to initialize a `static`.
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a present container for `value`, which may be `None` to
    /// describe a null value.
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(x) => Self::Value(x),
            None => Self::Null,
        }
    }

    /// Create a present container holding a non-null value.
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Create a present container holding null.
    pub const fn null() -> Self {
        Self::Null
    }

    /// Returns whether a value, possibly null, is present.
    pub const fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Returns whether no value is present.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns whether a value is present and that value is null.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the value, which is `None` if it is null.
    ///
    /// Fails with [`EmptyValueAccess`] if no value is present.
    pub const fn get(&self) -> Result<Option<&T>, EmptyValueAccess> {
        match self {
            Self::Empty => Err(EmptyValueAccess),
            Self::Null => Ok(None),
            Self::Value(x) => Ok(Some(x)),
        }
    }

    /// Take the value out of the container.
    ///
    /// This is the owning counterpart of [`MayBeValue::get`].
    pub fn into_inner(self) -> Result<Option<T>, EmptyValueAccess> {
        self.into_option().ok_or(EmptyValueAccess)
    }

    /// Convert into nested options, where the outer one is the presence
    /// and the inner one is the nullability.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Empty => None,
            Self::Null => Some(None),
            Self::Value(x) => Some(Some(x)),
        }
    }

    /// Build a container from nested options, the inverse of
    /// [`MayBeValue::into_option`].
    pub fn from_option(value: Option<Option<T>>) -> Self {
        match value {
            Some(x) => Self::of(x),
            None => Self::Empty,
        }
    }

    /// Borrow the value, keeping presence and nullness.
    pub const fn as_ref(&self) -> MayBeValue<&T> {
        match self {
            Self::Empty => MayBeValue::Empty,
            Self::Null => MayBeValue::Null,
            Self::Value(x) => MayBeValue::Value(x),
        }
    }

    /// Mutably borrow the value, keeping presence and nullness.
    pub fn as_mut(&mut self) -> MayBeValue<&mut T> {
        match self {
            Self::Empty => MayBeValue::Empty,
            Self::Null => MayBeValue::Null,
            Self::Value(x) => MayBeValue::Value(x),
        }
    }

    /// Call `action` with the value if it is present, otherwise do nothing.
    ///
    /// The action receives `None` if the present value is null.
    pub fn if_present(&self, action: impl FnOnce(Option<&T>)) {
        if let Ok(x) = self.get() {
            action(x)
        }
    }

    /// Call `action` with the value if it is present, otherwise call
    /// `empty_action`.
    pub fn if_present_or_else(
        &self,
        action: impl FnOnce(Option<&T>),
        empty_action: impl FnOnce(),
    ) {
        match self.get() {
            Ok(x) => action(x),
            Err(EmptyValueAccess) => empty_action(),
        }
    }

    /// Keep the value if it is present and matches `predicate`, otherwise
    /// return an empty container.
    ///
    /// The predicate sees `None` for a null value and is responsible for
    /// deciding whether null matches.
    pub fn filter(self, predicate: impl FnOnce(Option<&T>) -> bool) -> Self {
        let Some(x) = self.into_option() else {
            return Self::Empty;
        };
        if predicate(x.as_ref()) {
            Self::of(x)
        } else {
            Self::Empty
        }
    }

    /// Apply `mapper` to a present value and wrap the result.
    ///
    /// The mapper receives `None` for a null value and may return `None`
    /// to produce a present null container. It is not called if no value
    /// is present.
    pub fn map<U>(
        self,
        mapper: impl FnOnce(Option<T>) -> Option<U>,
    ) -> MayBeValue<U> {
        match self.into_option() {
            Some(x) => MayBeValue::of(mapper(x)),
            None => MayBeValue::Empty,
        }
    }

    /// Apply `mapper` to a present value and return its result as is.
    ///
    /// Unlike [`MayBeValue::map`], the result is not wrapped again, so the
    /// mapper may return an empty container.
    pub fn flat_map<U>(
        self,
        mapper: impl FnOnce(Option<T>) -> MayBeValue<U>,
    ) -> MayBeValue<U> {
        match self.into_option() {
            Some(x) => mapper(x),
            None => MayBeValue::Empty,
        }
    }

    /// Return `self` if a value is present, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Empty => other,
            x => x,
        }
    }

    /// Return the value if present, otherwise `other`.
    pub fn unwrap_or(self, other: Option<T>) -> Option<T> {
        self.into_option().unwrap_or(other)
    }

    /// Return the value if present, otherwise the result of `supplier`.
    ///
    /// The supplier is only called if no value is present.
    pub fn unwrap_or_else(
        self,
        supplier: impl FnOnce() -> Option<T>,
    ) -> Option<T> {
        self.into_option().unwrap_or_else(supplier)
    }

    /// Return the value if present, otherwise the error produced by
    /// `error_supplier`.
    ///
    /// The error supplier is only called if no value is present.
    pub fn ok_or_else<E>(
        self,
        error_supplier: impl FnOnce() -> E,
    ) -> Result<Option<T>, E> {
        self.into_option().ok_or_else(error_supplier)
    }
}

impl<T> Default for MayBeValue<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for MayBeValue<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<MayBeValue<T>> for Option<Option<T>> {
    fn from(value: MayBeValue<T>) -> Self {
        value.into_option()
    }
}

impl<T: Hash> Hash for MayBeValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // An empty container always hashes the same fixed input, a present
        // one hashes its presence flag followed by the nullable value.
        match self.as_ref().into_option() {
            None => state.write_u8(0),
            Some(x) => {
                true.hash(state);
                x.hash(state);
            }
        }
    }
}

impl<T: Display> Display for MayBeValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "MayBeValue.empty"),
            Self::Null => write!(f, "MayBeValue[null]"),
            Self::Value(x) => write!(f, "MayBeValue[{x}]"),
        }
    }
}
