use num_bigint::BigInt;

/// A single step of a piecewise-constant intensity function
///
/// The intensity holds from `point` (inclusive) up to the point of the next
/// breakpoint (exclusive), or indefinitely if this is the last breakpoint.
///
/// With the `serde` feature, a breakpoint is (de)serialized as the two-element
/// array `[point, intensity]`. The point is handed to `P`'s own serializer, so
/// formats without infinities (JSON) cannot round-trip an infinite `f64` point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Breakpoint<P = f64> {
    /// The point at which the intensity takes effect
    pub point: P,
    /// The intensity from this point onward
    pub intensity: BigInt,
}

impl<P> Breakpoint<P> {
    /// Creates a breakpoint from anything convertible into an intensity
    pub fn new(point: P, intensity: impl Into<BigInt>) -> Self {
        Self {
            point,
            intensity: intensity.into(),
        }
    }
}

impl<P, V: Into<BigInt>> From<(P, V)> for Breakpoint<P> {
    fn from((point, intensity): (P, V)) -> Self {
        Self::new(point, intensity)
    }
}

#[cfg(feature = "serde")]
impl<P: serde::Serialize> serde::Serialize for Breakpoint<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple as _;

        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.point)?;
        pair.serialize_element(&super::intensity::Wire::borrowed(&self.intensity))?;
        pair.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, P: serde::Deserialize<'de>> serde::Deserialize<'de> for Breakpoint<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (point, intensity) = <(P, super::intensity::Wire<'static>) as serde::Deserialize>::deserialize(
            deserializer,
        )?;
        Ok(Self {
            point,
            intensity: intensity.into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pair() {
        let bp: Breakpoint<i32> = (3, -7i64).into();
        assert_eq!(bp.point, 3);
        assert_eq!(bp.intensity, BigInt::from(-7));
    }

    #[test]
    fn test_serialize_as_pair() {
        let bp = Breakpoint::new(10.5, 2);
        assert_eq!(serde_json::to_string(&bp).unwrap(), "[10.5,2]");
    }

    #[test]
    fn test_deserialize_from_pair() {
        let bp = serde_json::from_str::<Breakpoint<i64>>("[-4, -12]").unwrap();
        assert_eq!(bp, Breakpoint::new(-4, -12));
    }

    #[test]
    fn test_deserialize_rejects_object() {
        let raw = r#"{ "point": 1.0, "intensity": 1 }"#;
        assert!(serde_json::from_str::<Breakpoint>(raw).is_err());
    }
}
