use segline_core::{BigInt, IntensityLine};
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// A single mutation in a replay script
///
/// Scripts are JSON arrays of objects such as
/// `{"op": "add", "from": 10, "to": 30, "amount": 1}`.
/// Amounts may be integers or, for values beyond 64 bits, decimal strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Add `amount` to the intensity on `[from, to)`
    Add {
        from: f64,
        to: f64,
        #[serde(with = "segline_core::models::intensity")]
        amount: BigInt,
    },
    /// Overwrite the intensity on `[from, to)` with `amount`
    Set {
        from: f64,
        to: f64,
        #[serde(with = "segline_core::models::intensity")]
        amount: BigInt,
    },
}

impl Operation {
    pub fn apply(&self, line: &mut IntensityLine) {
        match self {
            Self::Add { from, to, amount } => line.add(*from, *to, amount.clone()),
            Self::Set { from, to, amount } => line.set(*from, *to, amount.clone()),
        }
    }
}

/// Applies every operation in order to an empty line
pub fn replay(script: &[Operation]) -> IntensityLine {
    let mut line = IntensityLine::new();
    for (index, op) in script.iter().enumerate() {
        event!(Level::DEBUG, index, ?op, "replaying operation");
        op.apply(&mut line);
    }
    line
}

/// Like [`replay`], but keeps the state after every operation
pub fn replay_snapshots(script: &[Operation]) -> Vec<IntensityLine> {
    let mut line = IntensityLine::new();
    script
        .iter()
        .enumerate()
        .map(|(index, op)| {
            event!(Level::DEBUG, index, ?op, "replaying operation");
            op.apply(&mut line);
            line.clone()
        })
        .collect()
}
