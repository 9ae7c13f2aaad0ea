use nalgebra::Vector3;
use ndarray::{s, Array1};

use crate::led::Color;

// Given a point, compute its spherical polar angles (θ, φ).
// θ is the elevation above the xy plane, in [-π/2, π/2]. φ is the azimuth measured from x toward y.
pub fn polar_angles(pos: Vector3<f32>) -> (f32, f32) {
    let xy = pos[0] * pos[0] + pos[1] * pos[1];
    let θ = f32::atan2(pos[2], xy.sqrt());
    let φ = f32::atan2(pos[1], pos[0]);
    (θ, φ)
}

// The `num` interpolation parameters strictly inside (0, 1), evenly spaced and increasing.
// These are the interior points of `num + 2` samples across [0, 1], whose ends fall on the vertices.
pub fn interior_params(num: usize) -> Array1<f32> {
    Array1::<f32>::linspace(0., 1., num + 2)
        .slice(s![1..num + 1])
        .to_owned()
}

// Linear interpolation between `a` (t = 0) and `b` (t = 1).
pub fn lerp(a: &Vector3<f32>, b: &Vector3<f32>, t: f32) -> Vector3<f32> {
    (1. - t) * a + t * b
}

// Hue in turns (any real, wrapped into [0, 1)), saturation and value in [0, 1].
pub fn hsv(hue: f32, sat: f32, val: f32) -> Color {
    let h = hue.rem_euclid(1.) * 6.;
    let sat = num::clamp(sat, 0., 1.);
    let val = num::clamp(val, 0., 1.);

    let chroma = val * sat;
    let x = chroma * (1. - ((h % 2.) - 1.).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.),
        1 => (x, chroma, 0.),
        2 => (0., chroma, x),
        3 => (0., x, chroma),
        4 => (x, 0., chroma),
        _ => (chroma, 0., x),
    };
    let m = val - chroma;
    Color::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod test {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::{hsv, interior_params, lerp, polar_angles};
    use crate::led::Color;

    #[test]
    fn polar_angles_of_axes() {
        let (θ, φ) = polar_angles(Vector3::new(0., 0., 2.));
        assert_relative_eq!(θ, FRAC_PI_2);
        assert_relative_eq!(φ, 0.);

        let (θ, φ) = polar_angles(Vector3::new(0., 3., 0.));
        assert_relative_eq!(θ, 0.);
        assert_relative_eq!(φ, FRAC_PI_2);

        let (θ, φ) = polar_angles(Vector3::new(1., 1., 2f32.sqrt()));
        assert_relative_eq!(θ, FRAC_PI_4);
        assert_relative_eq!(φ, FRAC_PI_4);
    }

    #[test]
    fn interior_params_exclude_endpoints() {
        assert!(interior_params(0).is_empty());
        assert_eq!(interior_params(1).to_vec(), vec![0.5]);

        let params = interior_params(4);
        assert_eq!(params.len(), 4);
        for (i, t) in params.iter().enumerate() {
            assert_relative_eq!(*t, (i + 1) as f32 / 5., epsilon = 1e-6);
        }
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = Vector3::new(1., 2., 3.);
        let b = Vector3::new(-1., 0., 5.);
        assert_relative_eq!(lerp(&a, &b, 0.), a);
        assert_relative_eq!(lerp(&a, &b, 1.), b);
        assert_relative_eq!(lerp(&a, &b, 0.5), Vector3::new(0., 1., 4.));
    }

    #[test]
    fn hsv_primaries() {
        assert_relative_eq!(hsv(0., 1., 1.), Color::new(1., 0., 0.));
        assert_relative_eq!(hsv(1. / 3., 1., 1.), Color::new(0., 1., 0.), epsilon = 1e-6);
        assert_relative_eq!(hsv(2. / 3., 1., 1.), Color::new(0., 0., 1.), epsilon = 1e-6);
        assert_relative_eq!(hsv(-1., 0., 0.5), Color::new(0.5, 0.5, 0.5));
    }
}
