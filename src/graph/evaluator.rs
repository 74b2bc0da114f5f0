//! Evaluatie van het volledige raster voor één frame.

use crate::functions::{FunctionCatalog, FunctionKind, SurfaceFunction, blend};
use crate::geom::Point3;

use super::config::GraphConfig;
use super::grid::GridSpec;
use super::transition::{FramePlan, TransitionState};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evalueert één animatieframe.
///
/// Een `selected` die afwijkt van de actieve functie wordt direct actief;
/// loopt er een overgang, dan morpht die vanaf dit frame van `selected` naar
/// de opvolger ervan. Daarna schuift de toestandsmachine één frame op en wordt elke cel opnieuw berekend met `t = now`. Het resultaat
/// volgt de celindex: rij voor rij, `x` het snelst.
pub fn evaluate_grid(
    grid: &GridSpec,
    state: &mut TransitionState,
    selected: FunctionKind,
    now: f64,
    dt: f64,
    config: &GraphConfig,
) -> Vec<Point3> {
    let catalog = FunctionCatalog::global();
    state.select(selected);
    let plan = state.advance(catalog, config, dt);
    sample_grid(grid, catalog, plan, now)
}

/// Berekent alle posities voor een reeds bepaald plan, zonder toestand te wijzigen.
#[must_use]
pub fn sample_grid(grid: &GridSpec, catalog: &FunctionCatalog, plan: FramePlan, now: f64) -> Vec<Point3> {
    let sampler = Sampler::new(catalog, plan);
    collect_cells(grid, sampler, now)
}

/// Plat `[x0, y0, z0, x1, ...]`-formaat voor render-sinks.
#[must_use]
pub fn flatten_positions(positions: &[Point3]) -> Vec<f64> {
    positions.iter().flat_map(|p| p.to_array()).collect()
}

#[derive(Clone, Copy)]
enum Sampler {
    Direct(SurfaceFunction),
    Morph {
        from: SurfaceFunction,
        to: SurfaceFunction,
        progress: f64,
    },
}

impl Sampler {
    fn new(catalog: &FunctionCatalog, plan: FramePlan) -> Self {
        match plan {
            FramePlan::Direct(kind) => Self::Direct(catalog.lookup(kind)),
            FramePlan::Morph { from, to, progress } => Self::Morph {
                from: catalog.lookup(from),
                to: catalog.lookup(to),
                progress,
            },
        }
    }

    fn sample(self, u: f64, v: f64, t: f64) -> Point3 {
        match self {
            Self::Direct(function) => function(u, v, t),
            Self::Morph { from, to, progress } => blend(from, to, u, v, t, progress),
        }
    }
}

fn sample_cell(grid: &GridSpec, sampler: Sampler, index: usize, now: f64) -> Point3 {
    let (u, v) = grid.sample(index);
    sampler.sample(u, v, now)
}

#[cfg(feature = "parallel")]
fn collect_cells(grid: &GridSpec, sampler: Sampler, now: f64) -> Vec<Point3> {
    (0..grid.cell_count())
        .into_par_iter()
        .map(|index| sample_cell(grid, sampler, index, now))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_cells(grid: &GridSpec, sampler: Sampler, now: f64) -> Vec<Point3> {
    (0..grid.cell_count())
        .map(|index| sample_cell(grid, sampler, index, now))
        .collect()
}
