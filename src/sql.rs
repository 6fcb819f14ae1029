//! sqlx column support for [`Opt`]
//!
//! An empty option binds as `NULL` and a `NULL` column decodes to an empty option, for
//! any sqlx database. Present values go through the wrapped type's own codec.

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, Encode, Type};

use crate::option::Opt;

impl<DB, T> Type<DB> for Opt<T>
where
    DB: Database,
    T: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <Option<T> as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <Option<T> as Type<DB>>::compatible(ty)
    }
}

impl<'q, DB, T> Encode<'q, DB> for Opt<T>
where
    DB: Database,
    T: Encode<'q, DB> + Type<DB> + 'q,
{
    fn encode(self, buf: &mut <DB as Database>::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
        let (value, present) = self.into_parts();
        if present {
            value.encode(buf)
        } else {
            Ok(IsNull::Yes)
        }
    }

    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self.to_pointer() {
            Some(value) => value.encode_by_ref(buf),
            None => Ok(IsNull::Yes),
        }
    }

    fn produces(&self) -> Option<DB::TypeInfo> {
        match self.to_pointer() {
            Some(value) => value.produces(),
            None => Some(T::type_info()),
        }
    }

    fn size_hint(&self) -> usize {
        self.to_pointer().map_or(0, |value| value.size_hint())
    }
}

impl<'r, DB, T> Decode<'r, DB> for Opt<T>
where
    DB: Database,
    T: Decode<'r, DB> + Default,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        let option = <Option<T> as Decode<'r, DB>>::decode(value)?;
        if option.is_none() {
            log::trace!("Decoded NULL column as an empty option");
        }
        Ok(Opt::from(option))
    }
}
