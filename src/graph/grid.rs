//! Vast N×N raster van `(u, v)`-samples binnen het vierkant `[-1, 1]²`.

use crate::geom::Vec3;

use super::config::{ConfigError, MIN_RESOLUTION, validate_resolution};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    resolution: usize,
    grad: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::with_resolution(MIN_RESOLUTION)
    }
}

impl GridSpec {
    pub fn new(resolution: usize) -> Result<Self, ConfigError> {
        validate_resolution(resolution).map(Self::with_resolution)
    }

    #[allow(clippy::cast_precision_loss)]
    fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            grad: 2.0 / resolution as f64,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Afstand tussen twee naburige samples langs één as.
    #[must_use]
    pub fn grad(&self) -> f64 {
        self.grad
    }

    /// Uniforme schaal per punt.
    #[must_use]
    pub fn point_scale(&self) -> Vec3 {
        Vec3::splat(self.grad)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Celcoördinaten `(x, z)` voor een index; `x` loopt het snelst.
    #[must_use]
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index % self.resolution, index / self.resolution)
    }

    /// Samplecoördinaten `(u, v)` in het midden van de cel.
    #[must_use]
    pub fn sample(&self, index: usize) -> (f64, f64) {
        let (x, z) = self.cell(index);
        (self.coordinate(x), self.coordinate(z))
    }

    #[allow(clippy::cast_precision_loss)]
    fn coordinate(&self, step: usize) -> f64 {
        (step as f64 + 0.5) * self.grad - 1.0
    }
}
