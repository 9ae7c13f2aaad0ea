use rand::Rng;
use rand_distr::StandardNormal;

use crate::{animation::Animation, dodecahedron::Geometry, helper::hsv};

// Expected flashes per LED per second
const FLASH_RATE: f32 = 0.8;
// Brightness lost per second, as an exponential rate
const DECAY: f32 = 3.;
// Spread of flash hues around the drifting base hue, in turns
const HUE_SPREAD: f32 = 0.06;
const HUE_DRIFT: f32 = 0.03;

// Random LEDs flash and fade out. Flash hues scatter around a base hue that drifts slowly.
pub struct Sparkle {
    levels: Vec<f32>,
    hues: Vec<f32>,
    base_hue: f32,
}

impl Sparkle {
    pub fn new(geometry: &Geometry) -> Sparkle {
        Sparkle {
            levels: vec![0.; geometry.leds.len()],
            hues: vec![0.; geometry.leds.len()],
            base_hue: 0.,
        }
    }
}

impl Animation for Sparkle {
    fn initialize(&mut self, geometry: &mut Geometry) {
        geometry.turn_off();
        self.levels.iter_mut().for_each(|l| *l = 0.);
        self.base_hue = rand::thread_rng().gen();
    }

    fn update(&mut self, geometry: &mut Geometry, dt: f32) {
        let mut rng = rand::thread_rng();
        let chance = (FLASH_RATE * dt).min(1.);
        let fade = (-DECAY * dt).exp();
        self.base_hue = (self.base_hue + HUE_DRIFT * dt).rem_euclid(1.);

        for (i, led) in geometry.leds.iter_mut().enumerate() {
            self.levels[i] *= fade;
            if rng.gen::<f32>() < chance {
                let jitter: f32 = rng.sample(StandardNormal);
                self.levels[i] = 1.;
                self.hues[i] = self.base_hue + HUE_SPREAD * jitter;
            }
            led.set_color(hsv(self.hues[i], 0.8, self.levels[i]));
        }
    }
}
