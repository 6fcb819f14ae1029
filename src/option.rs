//! The optional value container
//!
//! An [`Opt<T>`] is a presence flag plus a slot for `T`. While empty, the slot holds
//! `T::default()` and carries no meaning. `put` and `clear` are the only ways to change
//! the state once constructed.

use std::fmt;

use crate::nullable::NullableColumn;

/// A container that either holds a value or is empty.
///
/// The default `Opt<T>` is empty, so `#[derive(Default)]` on a struct of options
/// starts with every field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opt<T> {
    present: bool,
    value: T,
}

impl<T> Opt<T> {
    /// Create an option holding the given value
    pub fn value(value: T) -> Self {
        Self {
            present: true,
            value,
        }
    }

    pub fn has_value(&self) -> bool {
        self.present
    }

    pub fn is_empty(&self) -> bool {
        !self.present
    }

    /// Get the value together with a presence flag.
    ///
    /// Only trust the value when the flag is `true`; for an empty option it is
    /// `T::default()`.
    pub fn get(&self) -> (&T, bool) {
        (&self.value, self.present)
    }

    /// Owning counterpart of [`Opt::get`]
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.present)
    }

    /// Replace the current value, if any. The option is present afterwards.
    pub fn put(&mut self, value: T) {
        self.present = true;
        self.value = value;
    }

    /// Borrow the value as a nullable reference, `None` when empty.
    ///
    /// Meant for APIs that model optionality with references.
    pub fn to_pointer(&self) -> Option<&T> {
        if self.present {
            Some(&self.value)
        } else {
            None
        }
    }
}

impl<T: Default> Opt<T> {
    /// Create an empty option
    pub fn empty() -> Self {
        Self {
            present: false,
            value: T::default(),
        }
    }

    /// Copy the value behind a nullable reference. `None` gives an empty option.
    ///
    /// The option keeps its own copy, later changes to the referent are not seen.
    pub fn from_pointer(pointer: Option<&T>) -> Self
    where
        T: Clone,
    {
        match pointer {
            Some(value) => Self::value(value.clone()),
            None => Self::empty(),
        }
    }

    /// Convert a nullable column value. An invalid column becomes empty and its
    /// carried value is dropped.
    pub fn from_nullable_column(column: NullableColumn<T>) -> Self {
        if column.valid {
            Self::value(column.v)
        } else {
            Self::empty()
        }
    }

    /// Remove the current value, if any. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }
}

impl<T: Clone> Opt<T> {
    /// Get the value if present, otherwise the given fallback
    pub fn get_or_default(&self, fallback: T) -> T {
        if self.present {
            self.value.clone()
        } else {
            fallback
        }
    }

    pub fn to_nullable_column(&self) -> NullableColumn<T> {
        NullableColumn {
            valid: self.present,
            v: self.value.clone(),
        }
    }
}

/// Renders the value's own `Display` output, or `<empty>` when there is nothing to show.
impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.present {
            self.value.fmt(f)
        } else {
            f.write_str("<empty>")
        }
    }
}

impl<T: Default> From<Option<T>> for Opt<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::value(value),
            None => Self::empty(),
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(option: Opt<T>) -> Self {
        if option.present {
            Some(option.value)
        } else {
            None
        }
    }
}

impl<T: Default> From<NullableColumn<T>> for Opt<T> {
    fn from(column: NullableColumn<T>) -> Self {
        Self::from_nullable_column(column)
    }
}

impl<T> From<Opt<T>> for NullableColumn<T> {
    fn from(option: Opt<T>) -> Self {
        NullableColumn {
            valid: option.present,
            v: option.value,
        }
    }
}
