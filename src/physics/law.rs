//! The exponential cooling law and its solvers.
//!
//! Newton's Law of Cooling states that an object's temperature decays
//! exponentially toward the ambient temperature:
//!
//! ```text
//! T(t) = T_ambient + (T_initial - T_ambient) * e^(-k*t)
//! ```
//!
//! All functions here operate in canonical units (Celsius, seconds) and are
//! stateless: every call is a pure function of its arguments. Given any three
//! of {initial temperature, temperature at time t, elapsed time, k}, the
//! fourth can be solved for in closed form.

use serde::{Deserialize, Serialize};

use crate::error::{CoolingError, Result};

/// Derived quantities of one fitted cooling curve.
///
/// Recomputed on every calculation request from the two reference
/// observations plus the ambient temperature; nothing is cached across calls.
/// Physically `k_per_s` should be positive for a cooling process; the solvers
/// do not enforce the sign, but curve sampling does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoolingParameters {
    /// Initial temperature in Celsius.
    pub t_initial_c: f64,
    /// Ambient (asymptotic) temperature in Celsius.
    pub t_ambient_c: f64,
    /// Cooling constant, per second.
    pub k_per_s: f64,
    /// Integration constant `C = T_initial - T_ambient`.
    pub c: f64,
}

impl CoolingParameters {
    /// Bundle a fitted parameter set, deriving the integration constant.
    pub fn new(t_initial_c: f64, t_ambient_c: f64, k_per_s: f64) -> Self {
        Self {
            t_initial_c,
            t_ambient_c,
            k_per_s,
            c: integration_constant(t_initial_c, t_ambient_c),
        }
    }

    /// Temperature on this curve after `t_s` seconds.
    pub fn temperature_at(&self, t_s: f64) -> f64 {
        solve_temperature(self.t_initial_c, self.t_ambient_c, self.k_per_s, t_s)
    }
}

/// Largest exponent magnitude allowed in the initial-temperature back-solve.
///
/// `ln(f64::MAX)` is about 709.8; above this limit `e^(k*t)` overflows to
/// infinity, so the solver reports an error instead.
pub const MAX_EXP_ARG: f64 = 700.0;

/// Estimate the cooling constant `k` (per second) from two observations.
///
/// ```text
/// k = -ln((T2 - Ta) / (T1 - Ta)) / (t2 - t1)
/// ```
///
/// The first observation is treated as the initial point; argument order is
/// significant. Both temperatures must lie strictly on the same side of
/// ambient (the ratio inside the logarithm must be positive), and the
/// timestamps must differ.
pub fn estimate_k(temp1_c: f64, temp2_c: f64, ambient_c: f64, t1_s: f64, t2_s: f64) -> Result<f64> {
    if t1_s == t2_s {
        return Err(CoolingError::EqualTimestamps { t_s: t1_s });
    }

    let excess1 = temp1_c - ambient_c;
    let excess2 = temp2_c - ambient_c;
    if excess1 == 0.0 || excess2 == 0.0 || excess1.signum() != excess2.signum() {
        return Err(CoolingError::AmbientCrossing {
            temp1_c,
            temp2_c,
            ambient_c,
        });
    }

    Ok(-((excess2 / excess1).ln()) / (t2_s - t1_s))
}

/// Integration constant `C = T_initial - T_ambient`.
pub fn integration_constant(initial_c: f64, ambient_c: f64) -> f64 {
    initial_c - ambient_c
}

/// Temperature after `t_s` seconds of decay.
///
/// Defined for any real `t_s`, including negative values (extrapolation
/// backward in time).
pub fn solve_temperature(initial_c: f64, ambient_c: f64, k_per_s: f64, t_s: f64) -> f64 {
    ambient_c + (initial_c - ambient_c) * (-k_per_s * t_s).exp()
}

/// Time in seconds at which the decay reaches `target_c`.
///
/// ```text
/// t = -(1/k) * ln((T_target - Ta) / (T_initial - Ta))
/// ```
///
/// The target must lie strictly between the initial temperature and ambient
/// (or beyond the initial, for negative times): the ratio inside the
/// logarithm must be positive. A target at or across ambient is never reached
/// by monotonic decay.
pub fn solve_time(target_c: f64, ambient_c: f64, initial_c: f64, k_per_s: f64) -> Result<f64> {
    if k_per_s == 0.0 {
        return Err(CoolingError::ZeroCoolingRate);
    }

    let ratio = (target_c - ambient_c) / (initial_c - ambient_c);
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(CoolingError::UnreachableTarget {
            target_c,
            initial_c,
            ambient_c,
        });
    }

    Ok(-ratio.ln() / k_per_s)
}

/// Initial temperature that decays to `temp_c` after `t_s` seconds.
///
/// Inverse of [`solve_temperature`] for the initial value:
///
/// ```text
/// T_0 = (T(t) - Ta) * e^(k*t) + Ta
/// ```
///
/// The exponential grows with `|k*t|`; magnitudes beyond [`MAX_EXP_ARG`] are
/// rejected rather than silently producing infinity.
pub fn solve_initial_temperature(
    temp_c: f64,
    ambient_c: f64,
    k_per_s: f64,
    t_s: f64,
) -> Result<f64> {
    let exponent = k_per_s * t_s;
    if exponent.abs() > MAX_EXP_ARG {
        return Err(CoolingError::ExponentOverflow {
            magnitude: exponent.abs(),
            limit: MAX_EXP_ARG,
        });
    }

    Ok((temp_c - ambient_c) * exponent.exp() + ambient_c)
}
