use super::Breakpoint;
use num_bigint::BigInt;
use num_traits::Zero as _;
use tracing::{Level, event};

/// A piecewise-constant intensity function over the whole line
///
/// The function is stored as its minimal list of breakpoints. Before any
/// mutation the list is empty and the intensity is 0 everywhere. After every
/// mutation the list satisfies:
/// - Points are strictly increasing
/// - No two neighbouring breakpoints share an intensity
/// - The first breakpoint never has intensity 0 (the implicit intensity to its left)
///
/// All mutations act on half-open intervals `[from, to)`. An interval with
/// `from >= to`, or with bounds that do not compare (e.g. NaN), is empty and
/// the mutation is silently skipped.
///
/// The point type only needs to be `PartialOrd + Clone`, so `f64` (the
/// default) and any integer type can be used.
#[derive(Clone, Debug, PartialEq)]
pub struct IntensityLine<P = f64>(Vec<Breakpoint<P>>);

impl<P> Default for IntensityLine<P> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<P> IntensityLine<P> {
    /// Creates a line with intensity 0 everywhere
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a line from breakpoints without validating them
    ///
    /// # Safety
    ///
    /// This bypasses the checks performed by [`IntensityLine::try_from_breakpoints`].
    /// The caller must guarantee the breakpoints are strictly increasing and
    /// minimal, otherwise mutations and point queries return wrong results.
    pub unsafe fn new_unchecked(breakpoints: Vec<Breakpoint<P>>) -> Self {
        Self(breakpoints)
    }

    /// The number of breakpoints
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the intensity is 0 everywhere
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the breakpoints in increasing point order
    pub fn iter(&self) -> std::slice::Iter<'_, Breakpoint<P>> {
        self.0.iter()
    }

    /// Resets the intensity to 0 everywhere
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Consumes the line, returning its breakpoints
    pub fn into_breakpoints(self) -> Vec<Breakpoint<P>> {
        self.0
    }
}

impl<P: PartialOrd> IntensityLine<P> {
    /// Creates a line from breakpoints, validating that they are canonical
    pub fn try_from_breakpoints(
        breakpoints: Vec<Breakpoint<P>>,
    ) -> Result<Self, IntensityLineError> {
        Self::try_from(IntensityLineDto(breakpoints))
    }
}

impl<P: PartialOrd + Clone> IntensityLine<P> {
    /// Adds `amount` to the intensity of every point in `[from, to)`
    pub fn add(&mut self, from: P, to: P, amount: impl Into<BigInt>) {
        let amount = amount.into();
        self.apply(from, to, |intensity| *intensity += &amount);
    }

    /// Sets the intensity of every point in `[from, to)` to `amount`
    pub fn set(&mut self, from: P, to: P, amount: impl Into<BigInt>) {
        let amount = amount.into();
        self.apply(from, to, |intensity| intensity.clone_from(&amount));
    }

    /// Returns a copy of the breakpoints in increasing point order
    ///
    /// The returned vector is independent of the line; modifying it has no
    /// effect on subsequent queries.
    pub fn breakpoints(&self) -> Vec<Breakpoint<P>> {
        self.0.clone()
    }

    /// Returns the intensity at `x`
    pub fn value_at(&self, x: &P) -> BigInt {
        // the number of breakpoints at or left of x
        let n = self.0.partition_point(|bp| bp.point <= *x);
        match n.checked_sub(1) {
            Some(i) => self.0[i].intensity.clone(),
            None => BigInt::zero(),
        }
    }

    // Shared implementation of `add` and `set`. Both boundaries are inserted
    // before `op` runs, so the breakpoints inside [from, to) are exactly the
    // index range between them.
    fn apply(&mut self, from: P, to: P, mut op: impl FnMut(&mut BigInt)) {
        if !(from < to) {
            event!(Level::TRACE, "skipping empty interval");
            return;
        }

        let start = self.insert_point(from);
        let end = self.insert_point(to);

        for bp in &mut self.0[start..end] {
            op(&mut bp.intensity);
        }

        self.fuse();
        event!(
            Level::DEBUG,
            breakpoints = self.0.len(),
            "applied interval mutation"
        );
    }

    // Ensures `point` is a breakpoint, returning its index. A new breakpoint
    // inherits the intensity of its left neighbour (or 0), so the function
    // itself is unchanged.
    fn insert_point(&mut self, point: P) -> usize {
        let index = self.0.partition_point(|bp| bp.point < point);

        if self.0.get(index).is_some_and(|bp| bp.point == point) {
            return index;
        }

        let intensity = match index.checked_sub(1) {
            Some(i) => self.0[i].intensity.clone(),
            None => BigInt::zero(),
        };
        self.0.insert(index, Breakpoint { point, intensity });
        index
    }

    // Drops every breakpoint that does not change the intensity.
    fn fuse(&mut self) {
        let mut previous = BigInt::zero();
        self.0.retain(|bp| {
            if bp.intensity == previous {
                false
            } else {
                previous.clone_from(&bp.intensity);
                true
            }
        });
    }
}

impl<P> IntoIterator for IntensityLine<P> {
    type Item = Breakpoint<P>;
    type IntoIter = std::vec::IntoIter<Breakpoint<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a IntensityLine<P> {
    type Item = &'a Breakpoint<P>;
    type IntoIter = std::slice::Iter<'a, Breakpoint<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Debug)]
pub struct IntensityLineDto<P = f64>(pub Vec<Breakpoint<P>>);

impl<P> From<IntensityLine<P>> for IntensityLineDto<P> {
    fn from(value: IntensityLine<P>) -> Self {
        Self(value.0)
    }
}

impl<P: PartialOrd> TryFrom<IntensityLineDto<P>> for IntensityLine<P> {
    type Error = IntensityLineError;

    /// Attempts to create an IntensityLine from a DTO, validating all constraints
    ///
    /// # Validation
    ///
    /// This function validates that:
    /// 1. Every point is comparable with itself (no NaN)
    /// 2. Points are strictly increasing
    /// 3. Every breakpoint changes the intensity, starting from an implicit 0
    fn try_from(value: IntensityLineDto<P>) -> Result<Self, Self::Error> {
        let zero = BigInt::zero();
        let mut prev: Option<&Breakpoint<P>> = None;

        for (index, bp) in value.0.iter().enumerate() {
            if bp.point.partial_cmp(&bp.point).is_none() {
                return Err(IntensityLineError::Incomparable { index });
            }

            let prev_intensity = match prev {
                Some(prev) => {
                    // Negated so that incomparable points are also rejected
                    if !(prev.point < bp.point) {
                        return Err(IntensityLineError::NonIncreasing { index });
                    }
                    &prev.intensity
                }
                None => &zero,
            };

            if bp.intensity == *prev_intensity {
                return Err(IntensityLineError::Redundant { index });
            }

            prev = Some(bp);
        }

        Ok(Self(value.0))
    }
}

#[cfg(feature = "serde")]
impl<P: serde::Serialize> serde::Serialize for IntensityLine<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: serde::Deserialize<'de> + PartialOrd> serde::Deserialize<'de> for IntensityLine<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let dto = <IntensityLineDto<P> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(dto).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when building an IntensityLine from external breakpoints
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum IntensityLineError {
    /// Error when a point cannot be ordered, such as NaN
    #[error("breakpoint {index} has an incomparable point")]
    Incomparable {
        /// Position of the offending breakpoint
        index: usize,
    },
    /// Error when a point does not strictly exceed its predecessor
    #[error("breakpoint {index} is not strictly right of its predecessor")]
    NonIncreasing {
        /// Position of the offending breakpoint
        index: usize,
    },
    /// Error when a breakpoint repeats the intensity to its left
    #[error("breakpoint {index} does not change the intensity")]
    Redundant {
        /// Position of the offending breakpoint
        index: usize,
    },
}
