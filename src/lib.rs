//! Newton's Law of Cooling calculation core.
//!
//! Given temperature observations over time, this crate estimates the
//! cooling constant `k`, solves for unknowns (elapsed time, temperature at a
//! time, or initial temperature), and samples the resulting cooling curve
//! for display. All model math runs in canonical units (Celsius, seconds);
//! unit conversion happens only at the request and display boundaries.
//!
//! The crate is the numeric core only: a presentation layer supplies a
//! [`CalculationRequest`] with validated numeric inputs and consumes the
//! [`CalculationOutcome`] plus sampled [`physics::CurvePoint`]s. Every
//! operation is a stateless pure function; requests are independent and a
//! failed one never affects the next.

pub mod calculator;
pub mod error;
pub mod physics;
pub mod units;

pub use calculator::{
    calculate, CalculationMode, CalculationOutcome, CalculationRequest, Observation, RowResult,
    SolvedValue,
};
pub use error::{CoolingError, Result};
pub use physics::CoolingParameters;
pub use units::{TemperatureUnit, TimeUnit};
