//! Torusvormen rond de y-as.

use std::f64::consts::PI;

use crate::geom::Point3;

use super::{FunctionKind, Registration};

/// Registraties voor de torus-familie, in catalogusvolgorde.
pub const REGISTRATIONS: &[Registration] = &[
    Registration {
        names: &["Ring"],
        kind: FunctionKind::Torus,
        function: torus,
    },
    Registration {
        names: &["Rotating Torus", "Twisted Torus"],
        kind: FunctionKind::RotatingTorus,
        function: rotating_torus,
    },
];

#[must_use]
pub fn torus(u: f64, v: f64, _t: f64) -> Point3 {
    torus_with_radii(u, v, 1.0, 0.5)
}

/// Torus met golvende hoofd- en buisstraal.
#[must_use]
pub fn rotating_torus(u: f64, v: f64, t: f64) -> Point3 {
    let major = 0.7 + 0.1 * (PI * (6.0 * u + 0.5 * t)).sin();
    let minor = 0.15 + 0.05 * (PI * (8.0 * u + 4.0 * v + 2.0 * t)).sin();
    torus_with_radii(u, v, major, minor)
}

fn torus_with_radii(u: f64, v: f64, major: f64, minor: f64) -> Point3 {
    let s = major + minor * (PI * v).cos();

    Point3::new(
        s * (PI * u).sin(),
        minor * (PI * v).sin(),
        s * (PI * u).cos(),
    )
}
