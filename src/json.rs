//! JSON support for [`Opt`]
//!
//! An empty option serializes as `null` and a present one as its value. Reading goes
//! the other way: `null` becomes an empty option, anything else is decoded with the
//! value type's own `Deserialize`.
//!
//! Because a present value that itself serializes to `null` (an empty `Opt<Opt<T>>`
//! inner value, a `None` inside `Opt<Option<T>>`) looks the same as an empty option on
//! the wire, it reads back as empty.
//!
//! Omitted fields are up to the codec. Structs deriving `Deserialize` treat a missing
//! `Opt<T>` field as empty, the same way they treat a missing `Option<T>`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::option::Opt;

impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_pointer() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Opt<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(OptVisitor(PhantomData))
    }
}

struct OptVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for OptVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = Opt<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("null or a value")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        log::trace!("Decoded null as an empty option");
        Ok(Opt::empty())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        self.visit_none()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        T::deserialize(deserializer).map(Opt::value)
    }
}

impl<T: Serialize> Opt<T> {
    /// Marshal to JSON bytes: the value's JSON, or `null` when empty
    pub fn marshal_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl<T: DeserializeOwned + Default> Opt<T> {
    /// Unmarshal from JSON bytes. `null` gives an empty option.
    pub fn unmarshal_json(json: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(json)
    }

    /// Unmarshal into an existing option.
    ///
    /// The bytes are decoded into a fresh value first, so on error `self` is left
    /// exactly as it was.
    pub fn unmarshal_json_into(&mut self, json: &[u8]) -> serde_json::Result<()> {
        match Self::unmarshal_json(json) {
            Ok(option) => {
                *self = option;
                Ok(())
            }
            Err(err) => {
                log::debug!("Rejected JSON for optional value: {}", err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marshal_empty() {
        let option: Opt<String> = Opt::empty();

        assert_eq!(option.marshal_json().unwrap(), b"null");
    }

    #[test]
    fn test_marshal_value() {
        let option = Opt::value("test".to_string());

        assert_eq!(option.marshal_json().unwrap(), br#""test""#);
        assert_eq!(serde_json::to_value(Opt::value(vec![1, 2])).unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_unmarshal_null() {
        let option: Opt<String> = Opt::unmarshal_json(b"null").unwrap();

        assert_eq!(option, Opt::empty());
    }

    #[test]
    fn test_unmarshal_value() {
        let option: Opt<String> = Opt::unmarshal_json(br#""test""#).unwrap();

        assert_eq!(option, Opt::value("test".to_string()));
    }

    #[test]
    fn test_unmarshal_default_value_is_present() {
        let option: Opt<u32> = Opt::unmarshal_json(b"0").unwrap();

        assert!(option.has_value());
        assert_eq!(option.get(), (&0, true));
    }

    #[test]
    fn test_unmarshal_into_replaces_state() {
        let mut option = Opt::value("old".to_string());

        option.unmarshal_json_into(b"null").unwrap();
        assert!(option.is_empty());

        option.unmarshal_json_into(br#""new""#).unwrap();
        assert_eq!(option, Opt::value("new".to_string()));
    }

    #[test]
    fn test_unmarshal_into_keeps_state_on_error() {
        let mut option = Opt::value(7u32);

        assert!(option.unmarshal_json_into(br#""seven""#).is_err());
        assert_eq!(option, Opt::value(7));

        let mut option: Opt<u32> = Opt::empty();
        assert!(option.unmarshal_json_into(b"{not json").is_err());
        assert!(option.is_empty());
    }

    #[test]
    fn test_nested_null_reads_back_as_empty() {
        let inner_empty: Opt<Opt<u32>> = Opt::value(Opt::empty());

        let json = inner_empty.marshal_json().unwrap();
        assert_eq!(json, b"null");

        let decoded: Opt<Opt<u32>> = Opt::unmarshal_json(&json).unwrap();
        assert!(decoded.is_empty());
        assert_ne!(decoded, inner_empty);
    }

    #[test]
    fn test_nested_value_round_trip() {
        let nested = Opt::value(Opt::value(3u32));

        let decoded: Opt<Opt<u32>> = Opt::unmarshal_json(&nested.marshal_json().unwrap()).unwrap();
        assert_eq!(decoded, nested);
    }
}
