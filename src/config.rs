//! Per-cycle configuration of the boundary mapper.

use crate::error::{MapperError, Result};
use serde::{Deserialize, Serialize};

/// The default safety margin around the ego footprint, in m.
const DEFAULT_BOUNDARY_BUFFER: f64 = 0.1;

/// The dimensions of the ego vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleFootprint {
    /// The vehicle length in m.
    pub length: f64,
    /// The vehicle width in m.
    pub width: f64,
    /// Distance from the path reference point to the front bumper, in m.
    pub front_edge_to_center: f64,
    /// Distance from the path reference point to the rear bumper, in m.
    pub back_edge_to_center: f64,
}

impl VehicleFootprint {
    /// A footprint whose reference point is its geometric centre.
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            length,
            width,
            front_edge_to_center: 0.5 * length,
            back_edge_to_center: 0.5 * length,
        }
    }

    /// How far ahead of the path reference point the footprint's centre lies, in m.
    pub fn centre_offset(&self) -> f64 {
        0.5 * (self.front_edge_to_center - self.back_edge_to_center)
    }

    fn validate(&self) -> Result<()> {
        let dims = [
            ("length", self.length),
            ("width", self.width),
            ("front_edge_to_center", self.front_edge_to_center),
            ("back_edge_to_center", self.back_edge_to_center),
        ];
        for (name, value) in dims {
            if !value.is_finite() {
                return Err(MapperError::invalid_input(format!(
                    "vehicle {name} must be finite, got {value}"
                )));
            }
        }
        if self.length <= 0.0 || self.width <= 0.0 {
            return Err(MapperError::invalid_input(format!(
                "vehicle footprint must be positive, got {} x {}",
                self.length, self.width
            )));
        }
        Ok(())
    }
}

impl Default for VehicleFootprint {
    fn default() -> Self {
        Self {
            length: 4.933,
            width: 2.11,
            front_edge_to_center: 3.89,
            back_edge_to_center: 1.043,
        }
    }
}

/// Tuning of the ST boundary mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StBoundaryConfig {
    /// Safety margin added around the ego footprint before overlap checks, in m.
    pub boundary_buffer: f64,
    /// The ego vehicle's dimensions.
    pub vehicle: VehicleFootprint,
}

impl StBoundaryConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| MapperError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.boundary_buffer.is_finite() || self.boundary_buffer < 0.0 {
            return Err(MapperError::invalid_input(format!(
                "boundary buffer must be a non-negative number, got {}",
                self.boundary_buffer
            )));
        }
        self.vehicle.validate()
    }
}

impl Default for StBoundaryConfig {
    fn default() -> Self {
        Self {
            boundary_buffer: DEFAULT_BOUNDARY_BUFFER,
            vehicle: VehicleFootprint::default(),
        }
    }
}
