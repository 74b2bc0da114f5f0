//! Animatiegraph: een raster punten dat een oppervlaktefunctie volgt en
//! tussen functies kan overvloeien.

pub mod config;
pub mod evaluator;
pub mod grid;
pub mod transition;

use crate::functions::FunctionKind;
use crate::geom::Point3;

use config::{ConfigError, GraphConfig, validate_duration};
use grid::GridSpec;
use transition::TransitionState;

/// Bezit het raster, de configuratie en de overgangstoestand.
#[derive(Debug, Clone, Default)]
pub struct GridTransitionEngine {
    config: GraphConfig,
    grid: GridSpec,
    state: TransitionState,
}

impl GridTransitionEngine {
    /// Valideert de configuratie en bouwt het raster op.
    pub fn new(config: GraphConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = GridSpec::new(config.resolution)?;
        let state = TransitionState::new(config.initial_function);

        Ok(Self { config, grid, state })
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    #[must_use]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Evalueert één frame met een expliciete functiekeuze.
    pub fn evaluate_frame(&mut self, selected: FunctionKind, now: f64, dt: f64) -> Vec<Point3> {
        evaluator::evaluate_grid(&self.grid, &mut self.state, selected, now, dt, &self.config)
    }

    /// Evalueert één frame op de huidige actieve functie.
    pub fn step(&mut self, now: f64, dt: f64) -> Vec<Point3> {
        let active = self.state.active();
        self.evaluate_frame(active, now, dt)
    }

    pub fn set_automatic_transition(&mut self, enabled: bool) {
        self.config.automatic_transition = enabled;
    }

    pub fn set_function_duration(&mut self, seconds: f64) -> Result<(), ConfigError> {
        self.config.function_duration = validate_duration("functionDuration", seconds)?;
        Ok(())
    }

    pub fn set_lerp_duration(&mut self, seconds: f64) -> Result<(), ConfigError> {
        self.config.lerp_duration = validate_duration("lerpDuration", seconds)?;
        Ok(())
    }
}
