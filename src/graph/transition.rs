//! Toestandsmachine voor het wisselen en overvloeien tussen oppervlaktefuncties.
//!
//! Per frame bepaalt [`TransitionState::advance`] welke functie(s) het raster
//! moet evalueren en werkt daarna de timers precies één keer bij.
//!
//! Tijdens een overgang wordt zowel de uitgaande als de inkomende functie elk
//! frame opnieuw afgeleid van de actieve functie: de uitgaande is altijd de
//! functie die op dat moment actief is, er wordt geen momentopname bewaard
//! van het begin van de overgang.

use crate::functions::{FunctionCatalog, FunctionKind};

use super::config::GraphConfig;

/// Fase van de toestandsmachine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// De actieve functie wordt direct geëvalueerd.
    Idle,
    /// Er loopt een overgang; `elapsed` is de verstreken tijd in de overgang.
    Transitioning { elapsed: f64 },
}

/// Wat het raster in dit frame moet evalueren.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FramePlan {
    Direct(FunctionKind),
    Morph {
        from: FunctionKind,
        to: FunctionKind,
        /// Lineaire voortgang `elapsed / lerpDuration`, nog zonder easing.
        progress: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    active: FunctionKind,
    elapsed_since_switch: f64,
    phase: Phase,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new(FunctionKind::default())
    }
}

impl TransitionState {
    #[must_use]
    pub fn new(initial: FunctionKind) -> Self {
        Self {
            active: initial,
            elapsed_since_switch: 0.0,
            phase: Phase::Idle,
        }
    }

    /// De functie die als actief gemarkeerd staat. Tijdens een overgang is
    /// dit de uitgaande functie; de inkomende wordt actief zodra de overgang
    /// voltooid is.
    #[must_use]
    pub fn active(&self) -> FunctionKind {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    #[must_use]
    pub fn elapsed_since_switch(&self) -> f64 {
        self.elapsed_since_switch
    }

    #[must_use]
    pub fn elapsed_in_transition(&self) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Transitioning { elapsed } => elapsed,
        }
    }

    /// Doelfunctie van de lopende overgang.
    #[must_use]
    pub fn incoming(&self, catalog: &FunctionCatalog) -> Option<FunctionKind> {
        self.is_transitioning().then(|| catalog.next(self.active))
    }

    /// Handmatige keuze: maakt `kind` direct actief. Zonder overgang is dat
    /// een harde wissel zonder morph. Tijdens een overgang loopt de timer
    /// door en morpht het volgende frame van `kind` naar `next(kind)`.
    /// Geeft terug of de actieve functie veranderd is.
    pub fn select(&mut self, kind: FunctionKind) -> bool {
        if kind == self.active {
            return false;
        }

        if self.is_transitioning() {
            log::debug!("functiekeuze tijdens overgang: {} -> {kind}", self.active);
        } else {
            log::debug!("handmatige functiekeuze: {} -> {kind}", self.active);
        }
        self.active = kind;
        true
    }

    /// Bepaalt het plan voor dit frame en schuift de timers `dt` op.
    pub fn advance(&mut self, catalog: &FunctionCatalog, config: &GraphConfig, dt: f64) -> FramePlan {
        let outgoing = self.active;

        let incoming = if config.automatic_transition
            && (self.elapsed_since_switch > config.function_duration || self.is_transitioning())
        {
            self.elapsed_since_switch = 0.0;
            if self.phase == Phase::Idle {
                log::debug!("overgang gestart vanaf {outgoing}");
                self.phase = Phase::Transitioning { elapsed: 0.0 };
            }
            catalog.next(outgoing)
        } else {
            self.elapsed_since_switch += dt;
            outgoing
        };

        match self.phase {
            Phase::Transitioning { elapsed } if elapsed < config.lerp_duration => {
                self.phase = Phase::Transitioning { elapsed: elapsed + dt };
                FramePlan::Morph {
                    from: outgoing,
                    to: incoming,
                    progress: elapsed / config.lerp_duration,
                }
            }
            phase => {
                if matches!(phase, Phase::Transitioning { .. }) {
                    log::debug!("overgang voltooid: {outgoing} -> {incoming}");
                }
                self.phase = Phase::Idle;
                self.active = incoming;
                FramePlan::Direct(incoming)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FramePlan, Phase, TransitionState};
    use crate::functions::{FunctionCatalog, FunctionKind};
    use crate::graph::config::GraphConfig;

    fn auto_config(function_duration: f64, lerp_duration: f64) -> GraphConfig {
        GraphConfig {
            automatic_transition: true,
            function_duration,
            lerp_duration,
            ..GraphConfig::default()
        }
    }

    #[test]
    fn manual_mode_stays_on_active_function() {
        let catalog = FunctionCatalog::global();
        let config = GraphConfig::default();
        let mut state = TransitionState::new(FunctionKind::Torus);

        for _ in 0..100 {
            assert_eq!(state.advance(catalog, &config, 0.25), FramePlan::Direct(FunctionKind::Torus));
        }
        assert!(!state.is_transitioning());
        assert_eq!(state.elapsed_since_switch(), 25.0);
    }

    #[test]
    fn automatic_switch_morphs_then_commits() {
        let catalog = FunctionCatalog::global();
        let config = auto_config(1.0, 0.5);
        let mut state = TransitionState::new(FunctionKind::Wave2D);

        // 1.0 na acht frames is niet groter dan functionDuration.
        for _ in 0..9 {
            assert_eq!(state.advance(catalog, &config, 0.125), FramePlan::Direct(FunctionKind::Wave2D));
        }
        assert!((state.elapsed_since_switch() - 1.125).abs() < 1e-12);

        let plan = state.advance(catalog, &config, 0.125);
        assert_eq!(
            plan,
            FramePlan::Morph {
                from: FunctionKind::Wave2D,
                to: FunctionKind::Wave3D,
                progress: 0.0
            }
        );
        assert!(state.is_transitioning());
        assert_eq!(state.elapsed_since_switch(), 0.0);
        assert_eq!(state.incoming(catalog), Some(FunctionKind::Wave3D));

        for expected in [0.25, 0.5, 0.75] {
            match state.advance(catalog, &config, 0.125) {
                FramePlan::Morph { from, to, progress } => {
                    assert_eq!(from, FunctionKind::Wave2D);
                    assert_eq!(to, FunctionKind::Wave3D);
                    assert_eq!(progress, expected);
                }
                other => panic!("verwacht Morph, kreeg {other:?}"),
            }
        }
        assert_eq!(state.elapsed_in_transition(), 0.5);

        assert_eq!(state.advance(catalog, &config, 0.125), FramePlan::Direct(FunctionKind::Wave3D));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.active(), FunctionKind::Wave3D);
        assert_eq!(state.elapsed_in_transition(), 0.0);
        assert_eq!(state.incoming(catalog), None);
    }

    #[test]
    fn zero_lerp_duration_switches_immediately() {
        let catalog = FunctionCatalog::global();
        let config = auto_config(0.0, 0.0);
        let mut state = TransitionState::new(FunctionKind::RotatingTorus);

        assert_eq!(state.advance(catalog, &config, 0.1), FramePlan::Direct(FunctionKind::RotatingTorus));
        assert_eq!(state.advance(catalog, &config, 0.1), FramePlan::Direct(FunctionKind::Wave2D));
        assert!(!state.is_transitioning());
        assert_eq!(state.active(), FunctionKind::Wave2D);
    }

    #[test]
    fn disabling_automatic_mid_transition_finishes_on_active() {
        let catalog = FunctionCatalog::global();
        let mut config = auto_config(0.0, 1.0);
        let mut state = TransitionState::new(FunctionKind::Sphere);

        state.advance(catalog, &config, 0.5);
        assert!(matches!(state.advance(catalog, &config, 0.5), FramePlan::Morph { .. }));

        config.automatic_transition = false;
        assert_eq!(
            state.advance(catalog, &config, 0.5),
            FramePlan::Morph {
                from: FunctionKind::Sphere,
                to: FunctionKind::Sphere,
                progress: 0.5
            }
        );
        assert_eq!(state.advance(catalog, &config, 0.5), FramePlan::Direct(FunctionKind::Sphere));
        assert_eq!(state.active(), FunctionKind::Sphere);
    }

    #[test]
    fn manual_selection_switches_directly_while_idle() {
        let catalog = FunctionCatalog::global();
        let config = GraphConfig::default();
        let mut state = TransitionState::new(FunctionKind::Wave2D);

        state.advance(catalog, &config, 0.5);
        assert!(state.select(FunctionKind::Torus));
        assert!(!state.select(FunctionKind::Torus));
        assert_eq!(state.elapsed_since_switch(), 0.5);
        assert_eq!(state.advance(catalog, &config, 0.5), FramePlan::Direct(FunctionKind::Torus));
    }

    #[test]
    fn selection_mid_transition_retargets_running_morph() {
        let catalog = FunctionCatalog::global();
        let config = auto_config(0.0, 1.0);
        let mut state = TransitionState::new(FunctionKind::Wave2D);

        state.advance(catalog, &config, 0.5);
        assert_eq!(
            state.advance(catalog, &config, 0.5),
            FramePlan::Morph {
                from: FunctionKind::Wave2D,
                to: FunctionKind::Wave3D,
                progress: 0.0
            }
        );

        assert!(state.select(FunctionKind::Sphere));
        assert!(state.is_transitioning());
        assert_eq!(state.incoming(catalog), Some(FunctionKind::ScalingSphere));
        assert_eq!(
            state.advance(catalog, &config, 0.5),
            FramePlan::Morph {
                from: FunctionKind::Sphere,
                to: FunctionKind::ScalingSphere,
                progress: 0.5
            }
        );

        assert_eq!(state.advance(catalog, &config, 0.5), FramePlan::Direct(FunctionKind::ScalingSphere));
        assert_eq!(state.active(), FunctionKind::ScalingSphere);
    }
}
