use std::{fs, mem::size_of, path::Path};

use serde::Deserialize;

use crate::{
    error::{ModelError, Result},
    geometry::EDGE_COUNT,
    led::Led,
};

// The physical build this model was written for carries 17 LEDs on every edge.
pub const DEFAULT_LEDS_PER_EDGE: i64 = 17;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DodecahedronConfig {
    // Signed so that a bad value in a config file is reported rather than rejected by the parser
    pub leds_per_edge: i64,
    pub seconds_per_animation: f32,
    pub frame_rate: f32,
}

impl Default for DodecahedronConfig {
    fn default() -> Self {
        DodecahedronConfig {
            leds_per_edge: DEFAULT_LEDS_PER_EDGE,
            seconds_per_animation: 30.,
            frame_rate: 60.,
        }
    }
}

impl DodecahedronConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn leds_per_edge(&self) -> Result<usize> {
        validate_leds_per_edge(self.leds_per_edge)
    }

    // Seconds per frame.
    pub fn frame_interval(&self) -> Result<f32> {
        if self.frame_rate > 0. && self.frame_rate.is_finite() {
            Ok(1. / self.frame_rate)
        } else {
            Err(ModelError::NonPositiveFrameRate {
                got: self.frame_rate,
            })
        }
    }
}

// A usable LED count is non-negative and small enough that all 30 edges' worth of LEDs fit in one
// allocation.
pub fn validate_leds_per_edge(leds_per_edge: i64) -> Result<usize> {
    let count = usize::try_from(leds_per_edge).map_err(|_| ModelError::NegativeLedsPerEdge {
        got: leds_per_edge,
    })?;

    let bytes = count
        .checked_mul(EDGE_COUNT)
        .and_then(|leds| leds.checked_mul(size_of::<Led>()));
    match bytes {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(count),
        _ => Err(ModelError::TooManyLeds { got: leds_per_edge }),
    }
}
