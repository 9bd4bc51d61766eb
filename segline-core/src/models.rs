mod breakpoint;
mod line;

#[cfg(feature = "serde")]
pub mod intensity;

pub use breakpoint::Breakpoint;
pub use line::{IntensityLine, IntensityLineDto, IntensityLineError};
