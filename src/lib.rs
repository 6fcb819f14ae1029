//! Optional values that know the difference between "not set" and "set to the default".
//!
//! [`Opt<T>`] either holds a value or is empty. Unlike a bare `T`, an empty option is
//! distinguishable from a present option holding `T::default()`. It renders as `<empty>`,
//! marshals to JSON `null`, and binds as SQL `NULL` when empty.
//!
//! ```
//! use opt::Opt;
//!
//! let mut name: Opt<String> = Opt::empty();
//! assert!(name.is_empty());
//!
//! name.put("test".to_string());
//! assert_eq!(name.get(), (&"test".to_string(), true));
//! assert_eq!(name.to_string(), "test");
//! ```
//!
//! Codec hooks are gated behind Cargo features, both on by default:
//! - `json`: serde `Serialize`/`Deserialize` plus `serde_json` helpers
//! - `sql`: sqlx `Type`/`Encode`/`Decode` for any sqlx database

pub mod nullable;
pub mod option;

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "sql")]
pub mod sql;

pub use nullable::NullableColumn;
pub use option::Opt;
