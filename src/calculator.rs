//! The calculation boundary consumed by a presentation layer.
//!
//! A shell collects raw (value, unit) pairs, builds a [`CalculationRequest`],
//! and gets back either a complete [`CalculationOutcome`] or exactly one
//! error. The outcome carries the fitted [`CoolingParameters`] plus the
//! display units the shell needs to sample and render the curve; the core
//! holds no state between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoolingError, Result};
use crate::physics::{estimate_k, solve_initial_temperature, solve_time, CoolingParameters};
use crate::units::{TemperatureUnit, TimeUnit};

/// Which unknown the calculation solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMode {
    /// Solve for the elapsed time of each temperature-only observation.
    SolveTime,
    /// Solve for the temperature of each time-only observation.
    SolveTemperature,
    /// Back-solve the initial temperature from the first reference
    /// observation.
    SolveInitialTemperature,
}

/// A measured point on the cooling curve, as supplied by the shell.
///
/// Complete iff both values are present. An incomplete observation carries
/// whichever single field was supplied; the missing field is the unknown the
/// selected mode solves for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub time: Option<f64>,
    pub time_unit: TimeUnit,
    pub temperature: Option<f64>,
    pub temperature_unit: TemperatureUnit,
}

impl Observation {
    /// An observation with both fields present.
    pub fn complete(
        time: f64,
        time_unit: TimeUnit,
        temperature: f64,
        temperature_unit: TemperatureUnit,
    ) -> Self {
        Self {
            time: Some(time),
            time_unit,
            temperature: Some(temperature),
            temperature_unit,
        }
    }

    /// A time-only observation (temperature is the unknown).
    pub fn at_time(time: f64, time_unit: TimeUnit) -> Self {
        Self {
            time: Some(time),
            time_unit,
            ..Self::default()
        }
    }

    /// A temperature-only observation (time is the unknown).
    pub fn at_temperature(temperature: f64, temperature_unit: TemperatureUnit) -> Self {
        Self {
            temperature: Some(temperature),
            temperature_unit,
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.time.is_some() && self.temperature.is_some()
    }

    /// Time in canonical seconds, if present.
    fn time_s(&self) -> Option<f64> {
        self.time.map(|t| self.time_unit.to_seconds(t))
    }

    /// Temperature in canonical Celsius, if present.
    fn temperature_c(&self) -> Option<f64> {
        self.temperature.map(|t| self.temperature_unit.to_celsius(t))
    }
}

/// One calculation request: ambient temperature, mode, and the ordered
/// observation rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub ambient: f64,
    pub ambient_unit: TemperatureUnit,
    pub mode: CalculationMode,
    pub observations: Vec<Observation>,
}

/// A value solved for one observation row, already converted to the unit the
/// row (or the request) asked for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolvedValue {
    Time { value: f64, unit: TimeUnit },
    Temperature { value: f64, unit: TemperatureUnit },
}

/// A solved value tagged with the index of the observation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowResult {
    pub row: usize,
    pub value: SolvedValue,
}

/// The complete result set of one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    /// Fitted parameter set for plotting. In SolveInitialTemperature mode
    /// this carries the solved initial temperature (and its matching `c`) so
    /// the plotted curve starts at the derived value.
    pub parameters: CoolingParameters,
    /// One entry per incomplete observation (SolveTime / SolveTemperature).
    pub rows: Vec<RowResult>,
    /// The back-solved initial temperature in the request's ambient unit
    /// (SolveInitialTemperature only).
    pub initial_temperature: Option<f64>,
    /// Time axis unit for the plot: the first complete observation's unit.
    pub display_time_unit: TimeUnit,
    /// Temperature axis unit for the plot: the request's ambient unit.
    pub display_temperature_unit: TemperatureUnit,
}

/// Run one calculation request.
///
/// Atomic from the caller's perspective: returns a complete result set or
/// fails with one error. Stateless and idempotent; a failed request never
/// affects later ones.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationOutcome> {
    if !request.ambient.is_finite() {
        return Err(CoolingError::NonFiniteAmbient {
            value: request.ambient,
        });
    }
    let ambient_c = request.ambient_unit.to_celsius(request.ambient);

    for (row, obs) in request.observations.iter().enumerate() {
        if let Some(t) = obs.time {
            if !t.is_finite() {
                return Err(CoolingError::NonFiniteInput {
                    row,
                    field: "time",
                    value: t,
                });
            }
        }
        if let Some(temp) = obs.temperature {
            if !temp.is_finite() {
                return Err(CoolingError::NonFiniteInput {
                    row,
                    field: "temperature",
                    value: temp,
                });
            }
        }
    }

    // Canonicalize the complete rows; the first two are the reference pair,
    // in supplied order.
    let mut complete = Vec::new();
    for (row, obs) in request.observations.iter().enumerate() {
        if let (Some(t_s), Some(temp_c)) = (obs.time_s(), obs.temperature_c()) {
            complete.push((row, t_s, temp_c));
        }
    }
    if complete.len() < 2 {
        return Err(CoolingError::InsufficientData {
            required: 2,
            supplied: complete.len(),
        });
    }
    let (_, t1_s, temp1_c) = complete[0];
    let (_, t2_s, temp2_c) = complete[1];

    let k = estimate_k(temp1_c, temp2_c, ambient_c, t1_s, t2_s)?;
    let mut parameters = CoolingParameters::new(temp1_c, ambient_c, k);
    debug!(k_per_s = k, t_ambient_c = ambient_c, "estimated cooling constant");

    let display_time_unit = request
        .observations
        .iter()
        .find(|o| o.is_complete())
        .map(|o| o.time_unit)
        .unwrap_or_default();
    let display_temperature_unit = request.ambient_unit;

    let mut rows = Vec::new();
    let mut initial_temperature = None;

    match request.mode {
        CalculationMode::SolveInitialTemperature => {
            let initial_c = solve_initial_temperature(temp1_c, ambient_c, k, t1_s)?;
            parameters = CoolingParameters::new(initial_c, ambient_c, k);
            initial_temperature = Some(request.ambient_unit.from_celsius(initial_c));
            debug!(initial_c, "back-solved initial temperature");
        }
        CalculationMode::SolveTime => {
            for (row, obs) in request.observations.iter().enumerate() {
                if obs.is_complete() {
                    continue;
                }
                let target_c = obs.temperature_c().ok_or(CoolingError::MissingField {
                    row,
                    field: "temperature",
                })?;
                let t_s = solve_time(target_c, ambient_c, parameters.t_initial_c, k)?;
                rows.push(RowResult {
                    row,
                    value: SolvedValue::Time {
                        value: obs.time_unit.from_seconds(t_s),
                        unit: obs.time_unit,
                    },
                });
            }
        }
        CalculationMode::SolveTemperature => {
            for (row, obs) in request.observations.iter().enumerate() {
                if obs.is_complete() {
                    continue;
                }
                let t_s = obs.time_s().ok_or(CoolingError::MissingField {
                    row,
                    field: "time",
                })?;
                let temp_c = parameters.temperature_at(t_s);
                rows.push(RowResult {
                    row,
                    value: SolvedValue::Temperature {
                        value: display_temperature_unit.from_celsius(temp_c),
                        unit: display_temperature_unit,
                    },
                });
            }
        }
    }

    Ok(CalculationOutcome {
        parameters,
        rows,
        initial_temperature,
        display_time_unit,
        display_temperature_unit,
    })
}
