//! Nullable column values
//!
//! The two-field shape database layers use for a column that may be `NULL`.

/// A possibly-null column value. `v` only means something when `valid` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullableColumn<T> {
    pub valid: bool,
    pub v: T,
}

impl<T: Default> NullableColumn<T> {
    pub fn null() -> Self {
        Self {
            valid: false,
            v: T::default(),
        }
    }
}

impl<T: Default> From<Option<T>> for NullableColumn<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self { valid: true, v },
            None => Self::null(),
        }
    }
}

impl<T> From<NullableColumn<T>> for Option<T> {
    fn from(column: NullableColumn<T>) -> Self {
        column.valid.then_some(column.v)
    }
}
