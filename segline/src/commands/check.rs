use crate::CliError;
use segline_core::{IntensityLine, IntensityLineDto};
use serde::Serialize;
use tracing::{Level, event};

/// Summary of a canonical breakpoint list
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckReport {
    pub breakpoints: usize,
    /// The closed range of points covered by the list, if any
    pub span: Option<(f64, f64)>,
}

pub fn check(dto: IntensityLineDto) -> Result<CheckReport, CliError> {
    let line = IntensityLine::try_from(dto)?;
    if let Some(index) = line.iter().position(|bp| !bp.point.is_finite()) {
        return Err(CliError::NonFinite { index });
    }
    let span = match (line.iter().next(), line.iter().last()) {
        (Some(first), Some(last)) => Some((first.point, last.point)),
        _ => None,
    };
    event!(Level::INFO, breakpoints = line.len(), "breakpoint list is canonical");
    Ok(CheckReport {
        breakpoints: line.len(),
        span,
    })
}
