//! Configuratie van de animatiegraph.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::functions::FunctionKind;

/// Kleinste toegestane rasterresolutie.
pub const MIN_RESOLUTION: usize = 10;
/// Grootste toegestane rasterresolutie.
pub const MAX_RESOLUTION: usize = 100;

/// Fouten bij het valideren van een [`GraphConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// De resolutie ligt buiten `MIN_RESOLUTION..=MAX_RESOLUTION`.
    #[error("resolutie {resolution} ligt buiten het bereik {min}..={max}")]
    ResolutionOutOfRange {
        resolution: usize,
        min: usize,
        max: usize,
    },
    /// Een duur mag niet negatief zijn.
    #[error("{field} mag niet negatief zijn, kreeg {value}")]
    NegativeDuration { field: &'static str, value: f64 },
    /// Een duur moet een eindig getal zijn.
    #[error("{field} moet een eindig getal zijn")]
    NonFiniteDuration { field: &'static str },
}

/// Instellingen voor een [`crate::graph::GridTransitionEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphConfig {
    /// Aantal punten per as; het raster bevat `resolution²` punten.
    pub resolution: usize,
    pub automatic_transition: bool,
    /// Seconden voordat automatisch naar de volgende functie gewisseld wordt.
    pub function_duration: f64,
    /// Seconden die een overgang tussen twee functies duurt.
    pub lerp_duration: f64,
    pub initial_function: FunctionKind,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            resolution: MIN_RESOLUTION,
            automatic_transition: false,
            function_duration: 1.5,
            lerp_duration: 1.0,
            initial_function: FunctionKind::default(),
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_resolution(self.resolution)?;
        validate_duration("functionDuration", self.function_duration)?;
        validate_duration("lerpDuration", self.lerp_duration)?;
        Ok(())
    }
}

pub(crate) fn validate_resolution(resolution: usize) -> Result<usize, ConfigError> {
    if (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
        Ok(resolution)
    } else {
        Err(ConfigError::ResolutionOutOfRange {
            resolution,
            min: MIN_RESOLUTION,
            max: MAX_RESOLUTION,
        })
    }
}

pub(crate) fn validate_duration(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteDuration { field });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeDuration { field, value });
    }
    Ok(value)
}
