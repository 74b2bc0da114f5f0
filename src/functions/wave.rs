//! Golf- en rimpelfuncties over het uv-vlak.

use std::f64::consts::PI;

use crate::geom::Point3;

use super::{FunctionKind, Registration};

/// Registraties voor de golf-familie, in catalogusvolgorde.
pub const REGISTRATIONS: &[Registration] = &[
    Registration {
        names: &["Wave 2D", "Wave"],
        kind: FunctionKind::Wave2D,
        function: wave_2d,
    },
    Registration {
        names: &["Wave 3D"],
        kind: FunctionKind::Wave3D,
        function: wave_3d,
    },
    Registration {
        names: &["Multi Wave 2D", "MultiWave"],
        kind: FunctionKind::MultiWave2D,
        function: multi_wave_2d,
    },
    Registration {
        names: &["Multi Wave 3D"],
        kind: FunctionKind::MultiWave3D,
        function: multi_wave_3d,
    },
    Registration {
        names: &["Ripple Wave 2D", "WaterRipple2D", "Ripple"],
        kind: FunctionKind::RippleWave2D,
        function: ripple_wave_2d,
    },
    Registration {
        names: &["Ripple Wave 3D", "WaterRipple3D"],
        kind: FunctionKind::RippleWave3D,
        function: ripple_wave_3d,
    },
];

#[must_use]
pub fn wave_2d(u: f64, _v: f64, t: f64) -> Point3 {
    Point3::new(u, (PI * (u + t)).sin(), 0.0)
}

#[must_use]
pub fn wave_3d(u: f64, v: f64, t: f64) -> Point3 {
    Point3::new(u, (PI * (u + v + t)).sin(), v)
}

#[must_use]
pub fn multi_wave_2d(u: f64, _v: f64, t: f64) -> Point3 {
    let mut y = (PI * (u + 0.5 * t)).sin();
    y += 0.5 * (2.0 * PI * (u + t)).sin();

    Point3::new(u, y * (2.0 / 3.0), 0.0)
}

#[must_use]
pub fn multi_wave_3d(u: f64, v: f64, t: f64) -> Point3 {
    let mut y = (PI * (u + 0.5 * t)).sin();
    y += 0.5 * (2.0 * PI * (v + t)).sin();
    y += (PI * (u + v + 0.25 * t)).sin();

    Point3::new(u, y * (1.0 / 2.5), v)
}

/// Rimpeling vanuit `u = 0` die met de afstand uitdooft.
#[must_use]
pub fn ripple_wave_2d(u: f64, _v: f64, t: f64) -> Point3 {
    Point3::new(u, ripple_height(u.abs(), t), 0.0)
}

/// Rimpeling vanuit de oorsprong van het uv-vlak.
#[must_use]
pub fn ripple_wave_3d(u: f64, v: f64, t: f64) -> Point3 {
    let d = (u * u + v * v).sqrt();
    Point3::new(u, ripple_height(d, t), v)
}

fn ripple_height(d: f64, t: f64) -> f64 {
    (PI * (4.0 * d - t)).sin() / (1.0 + 10.0 * d)
}

#[cfg(test)]
mod tests {
    use super::{multi_wave_2d, multi_wave_3d, ripple_wave_2d, ripple_wave_3d, wave_2d, wave_3d};
    use crate::geom::Point3;

    fn assert_point_close(actual: Point3, expected: [f64; 3]) {
        let expected = Point3::from(expected);
        assert!(
            actual.distance_to(expected) < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn waves_are_flat_at_origin() {
        for function in [wave_2d, wave_3d, multi_wave_2d, multi_wave_3d, ripple_wave_2d, ripple_wave_3d] {
            assert_point_close(function(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn wave_2d_ignores_v() {
        assert_point_close(wave_2d(0.5, 0.9, 0.0), [0.5, 1.0, 0.0]);
        assert_point_close(wave_2d(0.0, -0.3, 0.5), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn wave_3d_keeps_v_as_depth() {
        assert_point_close(wave_3d(0.25, 0.25, 0.0), [0.25, 1.0, 0.25]);
    }

    #[test]
    fn multi_waves_are_normalized() {
        assert_point_close(multi_wave_2d(0.5, 0.0, 0.0), [0.5, 2.0 / 3.0, 0.0]);
        assert_point_close(multi_wave_3d(0.5, 0.0, 0.0), [0.5, 0.8, 0.0]);
    }

    #[test]
    fn ripples_decay_with_distance() {
        assert_point_close(ripple_wave_2d(0.125, 0.0, 0.0), [0.125, 1.0 / 2.25, 0.0]);
        assert_point_close(ripple_wave_2d(-0.125, 0.0, 0.0), [-0.125, 1.0 / 2.25, 0.0]);
        assert_point_close(ripple_wave_3d(0.3, 0.4, 0.5), [0.3, -1.0 / 6.0, 0.4]);
    }
}
