use segline_core::{BigInt, IntensityLine};
use serde::Serialize;

/// The intensity of a line at one point
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub at: f64,
    #[serde(with = "segline_core::models::intensity")]
    pub intensity: BigInt,
}

pub fn sample(line: &IntensityLine, points: &[f64]) -> Vec<Sample> {
    points
        .iter()
        .map(|&at| Sample {
            at,
            intensity: line.value_at(&at),
        })
        .collect()
}
