use rand::Rng;

use crate::{
    animation::Animation,
    dodecahedron::Geometry,
    helper::hsv,
    led::{Color, OFF},
};

// Fraction of the remaining gap to the target colour closed per second
const EASE_RATE: f32 = 1.5;
// Seconds between new target colours
const HOLD: f32 = 4.;

// Washes every face toward its own random hue, picking new hues every few seconds.
// The current colour of each face lives in the face's colour cache.
pub struct FaceWash {
    targets: Vec<Color>,
    elapsed: f32,
}

impl FaceWash {
    pub fn new(geometry: &Geometry) -> FaceWash {
        FaceWash {
            targets: vec![OFF; geometry.faces.len()],
            elapsed: 0.,
        }
    }

    fn pick_targets(&mut self) {
        let mut rng = rand::thread_rng();
        for target in self.targets.iter_mut() {
            *target = hsv(rng.gen::<f32>(), 1., 1.);
        }
    }
}

impl Animation for FaceWash {
    fn initialize(&mut self, geometry: &mut Geometry) {
        geometry.turn_off();
        for face in geometry.faces.iter_mut() {
            face.color = OFF;
        }
        self.elapsed = 0.;
        self.pick_targets();
    }

    fn update(&mut self, geometry: &mut Geometry, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= HOLD {
            self.elapsed = 0.;
            self.pick_targets();
        }

        let step = (EASE_RATE * dt).min(1.);
        for (face, target) in geometry.faces.iter_mut().zip(&self.targets) {
            face.color += (target - face.color) * step;
            face.fill(&mut geometry.leds, face.color);
        }
    }
}
