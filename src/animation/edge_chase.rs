use rand::Rng;

use crate::{
    animation::Animation,
    dodecahedron::Geometry,
    helper::hsv,
    polyhedron::{Edge, EdgeEnd},
};

const COMETS: usize = 3;
// Edges per second
const SPEED: f32 = 1.5;
// Brightness lost per second by the tail, as an exponential rate
const TAIL_DECAY: f32 = 4.;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comet {
    pub edge: usize,
    // The end of `edge` the comet entered from
    pub from: EdgeEnd,
    // Fraction of the edge travelled, in [0, 1)
    pub progress: f32,
    pub hue: f32,
}

impl Comet {
    // Interpolation parameter of the head along its edge, measured from v0 as the LEDs are.
    pub fn t(&self) -> f32 {
        match self.from {
            EdgeEnd::V0 => self.progress,
            EdgeEnd::V1 => 1. - self.progress,
        }
    }

    // Moves `distance` edges forward. At each corner the comet turns onto one of the two other edges
    // meeting there, chosen by `pick`.
    pub fn advance(&mut self, edges: &[Edge], distance: f32, mut pick: impl FnMut() -> usize) {
        self.progress += distance;
        while self.progress >= 1. {
            self.progress -= 1.;

            let arrived = self.from.opposite();
            let corner = edges[self.edge].vertex(arrived);
            let choices = edges[self.edge].neighbors_at(arrived);
            let next = choices[pick() % choices.len()];
            if let Some(end) = edges[next].end_at(corner) {
                self.edge = next;
                self.from = end;
            }
        }
    }
}

// Comets running along the edges and turning at random at every corner, dragging a fading tail.
pub struct EdgeChase {
    comets: Vec<Comet>,
    levels: Vec<f32>,
    hues: Vec<f32>,
}

impl EdgeChase {
    pub fn new(geometry: &Geometry) -> EdgeChase {
        EdgeChase {
            comets: Vec::with_capacity(COMETS),
            levels: vec![0.; geometry.leds.len()],
            hues: vec![0.; geometry.leds.len()],
        }
    }

    pub fn comets(&self) -> &[Comet] {
        &self.comets
    }

    // The LED of `comet`'s edge closest to its head, if the edge has any LEDs.
    fn head_led(geometry: &Geometry, comet: &Comet) -> Option<usize> {
        let t = comet.t();
        geometry.edges[comet.edge].leds.clone().min_by(|&a, &b| {
            let da = (geometry.leds[a].t - t).abs();
            let db = (geometry.leds[b].t - t).abs();
            da.total_cmp(&db)
        })
    }
}

impl Animation for EdgeChase {
    fn initialize(&mut self, geometry: &mut Geometry) {
        geometry.turn_off();
        self.levels.iter_mut().for_each(|l| *l = 0.);

        let mut rng = rand::thread_rng();
        self.comets = (0..COMETS)
            .map(|i| Comet {
                edge: rng.gen_range(0..geometry.edges.len()),
                from: if rng.gen() { EdgeEnd::V0 } else { EdgeEnd::V1 },
                progress: 0.,
                hue: i as f32 / COMETS as f32,
            })
            .collect();
    }

    fn update(&mut self, geometry: &mut Geometry, dt: f32) {
        let mut rng = rand::thread_rng();
        let fade = (-TAIL_DECAY * dt).exp();
        self.levels.iter_mut().for_each(|l| *l *= fade);

        for comet in self.comets.iter_mut() {
            comet.advance(&geometry.edges, SPEED * dt, || rng.gen_range(0..2));
            if let Some(head) = Self::head_led(geometry, comet) {
                self.levels[head] = 1.;
                self.hues[head] = comet.hue;
            }
        }

        for (i, led) in geometry.leds.iter_mut().enumerate() {
            led.set_color(hsv(self.hues[i], 1., self.levels[i]));
        }
    }
}
