//! Cooling-curve sampling for display.
//!
//! Produces a bounded, evenly spaced sequence of (time, temperature) samples
//! spanning `[0, horizon]`. The horizon is chosen from the decay rate: long
//! enough to show the curve flatten toward ambient, but clamped so that fast
//! decays are not over-truncated and near-zero rates do not run away.

use serde::{Deserialize, Serialize};

use super::law::CoolingParameters;
use crate::error::{CoolingError, Result};
use crate::units::{TemperatureUnit, TimeUnit};

/// Number of evenly spaced samples per curve.
pub const CURVE_SAMPLES: usize = 1000;

/// Shortest allowed display horizon: one hour.
pub const MIN_HORIZON_S: f64 = 3600.0;

/// Longest allowed display horizon: two hours.
pub const MAX_HORIZON_S: f64 = 7200.0;

/// A single sample of the cooling curve, in canonical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub time_s: f64,
    pub temp_c: f64,
}

/// Display horizon in seconds for a curve with cooling constant `k_per_s`.
///
/// `t_99 = -ln(0.01) / k` is the time to complete 99% of the decay toward
/// ambient; the horizon is `t_99 * 1.2` clamped to
/// `[MIN_HORIZON_S, MAX_HORIZON_S]`. The heuristic assumes exponential decay,
/// so zero and negative rates are rejected.
pub fn display_horizon_s(k_per_s: f64) -> Result<f64> {
    if k_per_s.is_nan() || k_per_s <= 0.0 {
        return Err(CoolingError::NonPositiveRate { k_per_s });
    }
    let t_99 = -(0.01_f64.ln()) / k_per_s;
    Ok((t_99 * 1.2).max(MIN_HORIZON_S).min(MAX_HORIZON_S))
}

/// Sample the cooling curve described by `params`.
///
/// Returns exactly [`CURVE_SAMPLES`] points evenly spaced over
/// `[0, horizon]` inclusive, in canonical units. Output unit conversion is
/// the presentation layer's job; see [`curve_for_display`].
pub fn sample_curve(params: &CoolingParameters) -> Result<Vec<CurvePoint>> {
    let horizon_s = display_horizon_s(params.k_per_s)?;
    let step_s = horizon_s / (CURVE_SAMPLES - 1) as f64;

    let mut points = Vec::with_capacity(CURVE_SAMPLES);
    for i in 0..CURVE_SAMPLES {
        let time_s = i as f64 * step_s;
        points.push(CurvePoint {
            time_s,
            temp_c: params.temperature_at(time_s),
        });
    }
    Ok(points)
}

/// Convert canonical curve samples into display-axis units.
///
/// Returns `(time, temperature)` pairs in the requested units. This is the
/// only place output conversion touches the curve; the sampler itself always
/// works in Celsius and seconds.
pub fn curve_for_display(
    points: &[CurvePoint],
    time_unit: TimeUnit,
    temperature_unit: TemperatureUnit,
) -> Vec<(f64, f64)> {
    points
        .iter()
        .map(|p| {
            (
                time_unit.from_seconds(p.time_s),
                temperature_unit.from_celsius(p.temp_c),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::law::estimate_k;

    fn reference_params() -> CoolingParameters {
        let k = estimate_k(90.0, 70.0, 20.0, 0.0, 600.0).unwrap();
        CoolingParameters::new(90.0, 20.0, k)
    }

    #[test]
    fn test_horizon_reference_scenario() {
        // k ≈ 0.000561 → t_99 ≈ 8203 s → 1.2 * t_99 exceeds the 2 h cap
        let h = display_horizon_s(reference_params().k_per_s).unwrap();
        assert!(
            (h - MAX_HORIZON_S).abs() < 1e-9,
            "slow decay should clamp to the 2 h cap, got {h:.0}"
        );
    }

    #[test]
    fn test_horizon_fast_decay_clamps_to_minimum() {
        // t_99 for k = 0.01 is ~460 s; the display still shows a full hour
        let h = display_horizon_s(0.01).unwrap();
        assert!((h - MIN_HORIZON_S).abs() < 1e-9);
    }

    #[test]
    fn test_horizon_between_clamps() {
        // k = 0.0012 → t_99 ≈ 3838 s → horizon ≈ 4605 s, inside the band
        let h = display_horizon_s(0.0012).unwrap();
        assert!(h > MIN_HORIZON_S && h < MAX_HORIZON_S, "got {h:.0}");
        let expected = -(0.01_f64.ln()) / 0.0012 * 1.2;
        assert!((h - expected).abs() < 1e-6);
    }

    #[test]
    fn test_horizon_rejects_non_positive_rate() {
        assert_eq!(
            display_horizon_s(0.0).unwrap_err(),
            CoolingError::NonPositiveRate { k_per_s: 0.0 }
        );
        assert!(matches!(
            display_horizon_s(-0.001),
            Err(CoolingError::NonPositiveRate { .. })
        ));
    }

    #[test]
    fn test_sample_count_and_spacing() {
        let params = reference_params();
        let points = sample_curve(&params).unwrap();
        assert_eq!(points.len(), CURVE_SAMPLES);

        let horizon = display_horizon_s(params.k_per_s).unwrap();
        let step = horizon / (CURVE_SAMPLES - 1) as f64;
        for i in 1..points.len() {
            let dt = points[i].time_s - points[i - 1].time_s;
            assert!(
                (dt - step).abs() < 1e-9,
                "uneven spacing at index {i}: {dt} vs {step}"
            );
        }
    }

    #[test]
    fn test_sample_endpoints() {
        let params = reference_params();
        let points = sample_curve(&params).unwrap();

        let first = points.first().unwrap();
        assert!((first.time_s - 0.0).abs() < 1e-12);
        assert!(
            (first.temp_c - params.t_initial_c).abs() < 1e-9,
            "curve should start at the initial temperature"
        );

        let last = points.last().unwrap();
        let horizon = display_horizon_s(params.k_per_s).unwrap();
        assert!((last.time_s - horizon).abs() < 1e-9);
        // After the horizon the excess over ambient should have mostly decayed
        let initial_excess = (params.t_initial_c - params.t_ambient_c).abs();
        let final_excess = (last.temp_c - params.t_ambient_c).abs();
        assert!(
            final_excess < initial_excess * 0.05,
            "curve should approach ambient by the horizon: {final_excess:.2} °C left"
        );
    }

    #[test]
    fn test_samples_decrease_monotonically_for_cooling() {
        let points = sample_curve(&reference_params()).unwrap();
        for i in 1..points.len() {
            assert!(
                points[i].temp_c < points[i - 1].temp_c,
                "cooling curve should be strictly decreasing at index {i}"
            );
        }
    }

    #[test]
    fn test_curve_for_display_converts_both_axes() {
        let points = [
            CurvePoint {
                time_s: 0.0,
                temp_c: 90.0,
            },
            CurvePoint {
                time_s: 120.0,
                temp_c: 80.0,
            },
        ];
        let display =
            curve_for_display(&points, TimeUnit::Minutes, TemperatureUnit::Fahrenheit);
        assert_eq!(display.len(), 2);
        assert!((display[0].0 - 0.0).abs() < 1e-12);
        assert!((display[0].1 - 194.0).abs() < 1e-9);
        assert!((display[1].0 - 2.0).abs() < 1e-9);
        assert!((display[1].1 - 176.0).abs() < 1e-9);
    }

    #[test]
    fn test_curve_for_display_identity_units_untouched() {
        let points = [CurvePoint {
            time_s: 37.5,
            temp_c: 61.25,
        }];
        let display = curve_for_display(&points, TimeUnit::Seconds, TemperatureUnit::Celsius);
        assert_eq!(display[0], (37.5, 61.25));
    }
}
