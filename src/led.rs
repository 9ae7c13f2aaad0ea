use nalgebra::Vector3;
use tracing::debug;

use crate::{
    geometry::led_neighbor_distance,
    helper::{interior_params, lerp, polar_angles},
};

// RGB with every component in [0, 1]
pub type Color = Vector3<f32>;

pub const OFF: Color = Color::new(0., 0., 0.);

// One addressable light point. LEDs are owned by the model in one flat list (edge order, then order
// along the edge) and refer to each other and to their edge by index into that list.
// Only the colour changes after construction.
#[derive(Clone, Debug)]
pub struct Led {
    pub(crate) pos: Vector3<f32>,
    // Index of the owning edge
    pub(crate) edge: usize,
    // Interpolation parameter along the owning edge, strictly inside (0, 1)
    pub(crate) t: f32,
    // Indices of every LED within the proximity threshold, ascending
    pub(crate) neighbors: Vec<usize>,
    // Polar coordinates
    pub(crate) θ: f32,
    pub(crate) φ: f32,
    color: Color,
}

impl Led {
    pub fn new(pos: Vector3<f32>, edge: usize, t: f32) -> Led {
        let (θ, φ) = polar_angles(pos);
        Led {
            pos,
            edge,
            t,
            neighbors: Vec::new(),
            θ,
            φ,
            color: OFF,
        }
    }

    pub fn pos(&self) -> Vector3<f32> {
        self.pos
    }

    pub fn edge(&self) -> usize {
        self.edge
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub fn θ(&self) -> f32 {
        self.θ
    }

    pub fn φ(&self) -> f32 {
        self.φ
    }

    pub fn color(&self) -> Color {
        self.color
    }

    // Components outside of [0, 1] are clamped and NaN turns the component off.
    pub fn set_color(&mut self, color: Color) {
        self.color = color.map(|c| if c.is_nan() { 0. } else { num::clamp(c, 0., 1.) });
    }

    pub fn turn_off(&mut self) {
        self.color = OFF;
    }
}

// Creates the LEDs strictly between `start` and `end`, ordered from `start` to `end`.
// The endpoints themselves are vertices and never get an LED.
pub fn interpolate_leds(
    start: &Vector3<f32>,
    end: &Vector3<f32>,
    edge: usize,
    leds_per_edge: usize,
) -> Vec<Led> {
    interior_params(leds_per_edge)
        .iter()
        .map(|&t| Led::new(lerp(start, end, t), edge, t))
        .collect()
}

/*
Links every pair of LEDs closer than just under two LED spacings. This picks up the LEDs directly
next to each other along an edge as well as the pairs flanking a shared corner on abutting edges,
but not the second LED over on the same edge. The result is symmetric and ignores edge membership.

This is a straight all pairs check. It only runs once at construction, and a few hundred LEDs
make for well under a million distance computations.
*/
pub fn link_neighbors(leds: &mut [Led], leds_per_edge: usize) -> usize {
    let threshold = led_neighbor_distance(leds_per_edge);
    let mut pairs = 0;

    for i in 0..leds.len() {
        for j in 0..i {
            let dist = (leds[i].pos - leds[j].pos).magnitude();
            if dist > 0. && dist <= threshold {
                leds[i].neighbors.push(j);
                leds[j].neighbors.push(i);
                pairs += 1;
            }
        }
    }

    debug!(leds = leds.len(), pairs, threshold, "linked LED neighbours");
    pairs
}
