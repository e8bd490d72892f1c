//! Serde support, writing dates and times as the same ISO 8601 strings
//! their `Display` impls produce and reading them back through `FromStr`.
//!
//! ```rust
//! use jalali::JalaliDate;
//!
//! let date = JalaliDate::of(1403, 1, 1).unwrap();
//! let json = serde_json::to_string(&date).unwrap();
//! assert_eq!(json, "\"1403-01-01\"");
//! assert_eq!(serde_json::from_str::<JalaliDate>(&json).unwrap(), date);
//! ```

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::cal::datetime::{JalaliDate, TimeOfDay, JalaliDateTime};


struct IsoVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for IsoVisitor<T>
where T: FromStr,
      T::Err: Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an ISO 8601 string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        value.trim().parse().map_err(E::custom)
    }
}

macro_rules! iso_string {
    ($($t: ty),*) => {
        $(
            impl Serialize for $t {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $t {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_str(IsoVisitor(PhantomData))
                }
            }
        )*
    };
}

iso_string!(JalaliDate, TimeOfDay, JalaliDateTime);


/// Writes a value with Persian digits, and reads it back with digits in
/// any script. Use it with `#[serde(with = "jalali::serial::persian_digits")]`.
#[cfg(feature="format")]
pub mod persian_digits {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error as _;

    use crate::cal::fmt::custom::{to_latin_digits, to_persian_digits};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where T: Display,
          S: Serializer,
    {
        serializer.serialize_str(&to_persian_digits(&value.to_string()))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where T: FromStr,
          T::Err: Display,
          D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        to_latin_digits(text.trim()).parse().map_err(D::Error::custom)
    }
}
