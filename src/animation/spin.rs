use std::f32::consts::{FRAC_PI_2, PI};

use crate::{animation::Animation, dodecahedron::Geometry, helper::hsv};

// Turns of hue per second
const SPEED: f32 = 0.1;

// A rainbow wrapped around the z axis. Hue follows azimuth and rotates over time, brightness rises
// from the bottom pole to the top one.
#[derive(Debug, Default)]
pub struct Spin {
    offset: f32,
}

impl Spin {
    pub fn new() -> Spin {
        Spin::default()
    }
}

impl Animation for Spin {
    fn initialize(&mut self, geometry: &mut Geometry) {
        self.offset = 0.;
        self.update(geometry, 0.);
    }

    fn update(&mut self, geometry: &mut Geometry, dt: f32) {
        self.offset = (self.offset + SPEED * dt).rem_euclid(1.);
        for led in geometry.leds.iter_mut() {
            let hue = led.φ / (2. * PI) + self.offset;
            let val = 0.2 + 0.8 * (led.θ + FRAC_PI_2) / PI;
            led.set_color(hsv(hue, 1., val));
        }
    }
}

#[cfg(test)]
mod test {
    use super::Spin;
    use crate::{animation::Animation, dodecahedron::Geometry};

    #[test]
    fn top_is_brighter_than_bottom() {
        let mut geometry = Geometry::build(3);
        let mut spin = Spin::new();
        spin.initialize(&mut geometry);

        let brightness = |i: usize| geometry.leds[i].color().max();
        let top = (0..geometry.leds.len())
            .max_by(|&a, &b| geometry.leds[a].pos[2].partial_cmp(&geometry.leds[b].pos[2]).unwrap())
            .unwrap();
        let bottom = (0..geometry.leds.len())
            .min_by(|&a, &b| geometry.leds[a].pos[2].partial_cmp(&geometry.leds[b].pos[2]).unwrap())
            .unwrap();
        assert!(brightness(top) > brightness(bottom));
    }

    #[test]
    fn default_matches_new() {
        let mut from_new = Geometry::build(2);
        let mut from_default = from_new.clone();
        Spin::new().initialize(&mut from_new);
        Spin::default().initialize(&mut from_default);

        for (a, b) in from_new.leds().iter().zip(from_default.leds()) {
            assert_eq!(a.color(), b.color());
        }
    }

    #[test]
    fn hue_rotates() {
        let mut geometry = Geometry::build(2);
        let mut spin = Spin::new();
        spin.initialize(&mut geometry);
        let before = geometry.leds[0].color();
        spin.update(&mut geometry, 2.5);
        assert_ne!(before, geometry.leds[0].color());
    }
}
