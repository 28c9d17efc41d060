//! Measurement units and conversions to the canonical internal units.
//!
//! All model math runs in Celsius and seconds; conversion to and from the
//! caller's units happens only at the request/display boundary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoolingError;

/// Temperature units accepted at the calculation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a value in this unit to Celsius.
    ///
    /// The Celsius arm returns the value untouched, so identity conversions
    /// introduce no floating error.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Kelvin => value - 273.15,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Convert a Celsius value back into this unit.
    pub fn from_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Kelvin => value + 273.15,
            TemperatureUnit::Fahrenheit => value * 9.0 / 5.0 + 32.0,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Kelvin => "Kelvin",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }

    /// Axis-label symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = CoolingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Celsius" => Ok(TemperatureUnit::Celsius),
            "Kelvin" => Ok(TemperatureUnit::Kelvin),
            "Fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(CoolingError::UnknownUnit {
                label: other.to_string(),
            }),
        }
    }
}

/// Time units accepted at the calculation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// Convert a value in this unit to seconds.
    pub fn to_seconds(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value,
            TimeUnit::Minutes => value * 60.0,
            TimeUnit::Hours => value * 3600.0,
        }
    }

    /// Convert a seconds value back into this unit.
    pub fn from_seconds(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value,
            TimeUnit::Minutes => value / 60.0,
            TimeUnit::Hours => value / 3600.0,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = CoolingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Seconds" => Ok(TimeUnit::Seconds),
            "Minutes" => Ok(TimeUnit::Minutes),
            "Hours" => Ok(TimeUnit::Hours),
            other => Err(CoolingError::UnknownUnit {
                label: other.to_string(),
            }),
        }
    }
}
