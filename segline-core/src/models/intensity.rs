//! Wire format for intensities.
//!
//! Intensities are arbitrary-precision, but most consumers of the JSON form
//! only ever see small values. An intensity is therefore written as a plain
//! integer whenever it fits in 64 bits, and as a decimal string otherwise.
//! Both forms are accepted when reading.
//!
//! The functions in this module are suitable for `#[serde(with = "...")]`:
//!
//! ```
//! # use segline_core::BigInt;
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Adjustment {
//!     #[serde(with = "segline_core::models::intensity")]
//!     amount: BigInt,
//! }
//! ```

use num_bigint::BigInt;
use num_traits::ToPrimitive as _;
use std::borrow::Cow;

/// Serializes an intensity as an integer if it fits in 64 bits, or a decimal string otherwise
pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if let Some(small) = value.to_i64() {
        serializer.serialize_i64(small)
    } else if let Some(small) = value.to_u64() {
        serializer.serialize_u64(small)
    } else {
        serializer.collect_str(value)
    }
}

/// Deserializes an intensity from an integer or a decimal string
pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_untagged::UntaggedEnumVisitor::new()
        .expecting("an integer or a string of decimal digits")
        .i64(|v| Ok(BigInt::from(v)))
        .u64(|v| Ok(BigInt::from(v)))
        .i128(|v| Ok(BigInt::from(v)))
        .u128(|v| Ok(BigInt::from(v)))
        .string(|s| s.trim().parse::<BigInt>().map_err(serde::de::Error::custom))
        .deserialize(deserializer)
}

// Adapter so the functions above can be used as an element of a tuple
pub(crate) struct Wire<'a>(Cow<'a, BigInt>);

impl<'a> Wire<'a> {
    pub(crate) fn borrowed(value: &'a BigInt) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub(crate) fn into_owned(self) -> BigInt {
        self.0.into_owned()
    }
}

impl serde::Serialize for Wire<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize(&self.0, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Wire<'static> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserialize(deserializer).map(|value| Self(Cow::Owned(value)))
    }
}
