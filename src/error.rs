use thiserror::Error;

/// Convenient result alias for the cooling calculator.
pub type Result<T> = std::result::Result<T, CoolingError>;

/// Top-level error type.
///
/// Every calculation request either returns a complete result set or exactly
/// one of these; nothing is retried and nothing is silently defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoolingError {
    /// A unit label did not match any known temperature or time unit.
    #[error("unknown unit label: {label}")]
    UnknownUnit { label: String },

    /// An observation is missing the field the calculation mode needs.
    #[error("observation {row}: missing {field} value")]
    MissingField { row: usize, field: &'static str },

    /// A supplied numeric value is NaN or infinite.
    #[error("observation {row}: {field} must be finite, got {value}")]
    NonFiniteInput {
        row: usize,
        field: &'static str,
        value: f64,
    },

    /// The ambient temperature is NaN or infinite.
    #[error("ambient temperature must be finite, got {value}")]
    NonFiniteAmbient { value: f64 },

    /// Fewer complete observations than the cooling-constant estimate needs.
    #[error("need at least {required} complete observations to estimate the cooling constant, got {supplied}")]
    InsufficientData { required: usize, supplied: usize },

    /// The two reference observations share a timestamp, so the decay rate
    /// is undefined.
    #[error("reference observations share the timestamp {t_s} s; cooling rate is undefined")]
    EqualTimestamps { t_s: f64 },

    /// Reference temperatures must lie strictly on the same side of ambient
    /// and not equal it, or the logarithm in the rate estimate is undefined.
    #[error(
        "temperatures {temp1_c} °C and {temp2_c} °C must lie strictly on the same side of ambient ({ambient_c} °C) and not equal it"
    )]
    AmbientCrossing {
        temp1_c: f64,
        temp2_c: f64,
        ambient_c: f64,
    },

    /// Solving for time requires a nonzero cooling constant.
    #[error("cooling constant must be nonzero to solve for time")]
    ZeroCoolingRate,

    /// The target temperature equals or has crossed ambient, or lies on the
    /// opposite side of ambient from the initial temperature; monotonic decay
    /// never reaches it.
    #[error(
        "target temperature {target_c} °C is unreachable from {initial_c} °C decaying toward ambient {ambient_c} °C"
    )]
    UnreachableTarget {
        target_c: f64,
        initial_c: f64,
        ambient_c: f64,
    },

    /// Curve sampling assumes a cooling (k > 0) process; zero or negative
    /// rates would invert the horizon heuristic.
    #[error("curve sampling requires a positive cooling constant, got k = {k_per_s} per second")]
    NonPositiveRate { k_per_s: f64 },

    /// The exponent in the initial-temperature back-solve exceeded the
    /// overflow guard.
    #[error("exponent magnitude {magnitude:.1} exceeds the overflow limit {limit}")]
    ExponentOverflow { magnitude: f64, limit: f64 },
}
