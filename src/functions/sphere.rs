//! Bolvormige oppervlakken: `u` loopt rond de y-as, `v` van pool tot pool.

use std::f64::consts::PI;

use crate::geom::Point3;

use super::{FunctionKind, Registration};

/// Registraties voor de bol-familie, in catalogusvolgorde.
pub const REGISTRATIONS: &[Registration] = &[
    Registration {
        names: &["Unit Sphere"],
        kind: FunctionKind::Sphere,
        function: sphere,
    },
    Registration {
        names: &["Scaling Sphere", "Pulse"],
        kind: FunctionKind::ScalingSphere,
        function: scaling_sphere,
    },
    Registration {
        names: &["Rotating Sphere", "Bands"],
        kind: FunctionKind::RotatingSphere,
        function: rotating_sphere,
    },
];

#[must_use]
pub fn sphere(u: f64, v: f64, _t: f64) -> Point3 {
    let radius = (0.5 * PI * v).cos();

    Point3::new(
        (PI * u).sin() * radius,
        (PI * 0.5 * v).sin(),
        (PI * u).cos() * radius,
    )
}

/// Bol waarvan de straal in de tijd tussen 0 en 1 pulseert.
#[must_use]
pub fn scaling_sphere(u: f64, v: f64, t: f64) -> Point3 {
    let radius = 0.5 + 0.5 * (PI * t).sin();
    sphere_with_radius(u, v, radius)
}

/// Bol met draaiende banden in de straal.
#[must_use]
pub fn rotating_sphere(u: f64, v: f64, t: f64) -> Point3 {
    let radius = 0.9 + 0.1 * (PI * (6.0 * u + 4.0 * v + t)).sin();
    sphere_with_radius(u, v, radius)
}

fn sphere_with_radius(u: f64, v: f64, radius: f64) -> Point3 {
    let s = radius * (0.5 * PI * v).cos();

    Point3::new(
        s * (PI * u).sin(),
        radius * (0.5 * PI * v).sin(),
        s * (PI * u).cos(),
    )
}
