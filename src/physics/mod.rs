mod curve;
mod law;

pub use curve::{
    curve_for_display, display_horizon_s, sample_curve, CurvePoint, CURVE_SAMPLES, MAX_HORIZON_S,
    MIN_HORIZON_S,
};
pub use law::{
    estimate_k, integration_constant, solve_initial_temperature, solve_temperature, solve_time,
    CoolingParameters, MAX_EXP_ARG,
};
