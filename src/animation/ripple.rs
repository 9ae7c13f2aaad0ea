use std::collections::VecDeque;

use rand::Rng;

use crate::{
    animation::Animation,
    dodecahedron::Geometry,
    helper::hsv,
    led::{Color, Led, OFF},
};

// Seconds between new ripples
const SPAWN_INTERVAL: f32 = 1.2;
// Hops across the LED proximity graph per second
const SPEED: f32 = 12.;
// Half width of a wavefront, in hops
const WIDTH: f32 = 2.5;
const LIFETIME: f32 = 4.;

// Number of neighbour hops from `source` to each LED, or `None` if unreachable. A `source` past the
// end of `leds` reaches nothing.
pub fn hop_distances(leds: &[Led], source: usize) -> Vec<Option<usize>> {
    let mut hops = vec![None; leds.len()];
    if source >= leds.len() {
        return hops;
    }
    let mut queue = VecDeque::new();
    hops[source] = Some(0);
    queue.push_back(source);

    while let Some(i) = queue.pop_front() {
        let next = hops[i].map(|h| h + 1);
        for &n in &leds[i].neighbors {
            if hops[n].is_none() {
                hops[n] = next;
                queue.push_back(n);
            }
        }
    }
    hops
}

struct Wave {
    hops: Vec<Option<usize>>,
    hue: f32,
    age: f32,
}

impl Wave {
    fn intensity(&self, led: usize) -> f32 {
        match self.hops[led] {
            Some(h) => {
                let offset = (h as f32 - self.age * SPEED) / WIDTH;
                (-offset * offset).exp() * (1. - self.age / LIFETIME).max(0.)
            }
            None => 0.,
        }
    }
}

// Rings spreading out from random LEDs over the proximity graph, so they wrap around corners onto
// the neighbouring edges.
pub struct Ripple {
    waves: Vec<Wave>,
    since_spawn: f32,
}

impl Ripple {
    pub fn new(_geometry: &Geometry) -> Ripple {
        Ripple {
            waves: Vec::new(),
            since_spawn: 0.,
        }
    }

    fn spawn(&mut self, leds: &[Led]) {
        if leds.is_empty() {
            return;
        }
        let mut rng = rand::thread_rng();
        let source = rng.gen_range(0..leds.len());
        self.waves.push(Wave {
            hops: hop_distances(leds, source),
            hue: rng.gen(),
            age: 0.,
        });
    }
}

impl Animation for Ripple {
    fn initialize(&mut self, geometry: &mut Geometry) {
        geometry.turn_off();
        self.waves.clear();
        self.since_spawn = 0.;
        self.spawn(&geometry.leds);
    }

    fn update(&mut self, geometry: &mut Geometry, dt: f32) {
        for wave in self.waves.iter_mut() {
            wave.age += dt;
        }
        self.waves.retain(|w| w.age < LIFETIME);

        self.since_spawn += dt;
        if self.since_spawn >= SPAWN_INTERVAL {
            self.since_spawn = 0.;
            self.spawn(&geometry.leds);
        }

        for (i, led) in geometry.leds.iter_mut().enumerate() {
            let color = self
                .waves
                .iter()
                .fold(OFF, |acc: Color, w| acc + hsv(w.hue, 1., w.intensity(i)));
            led.set_color(color);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{hop_distances, Ripple, SPAWN_INTERVAL};
    use crate::{animation::Animation, dodecahedron::Geometry, led::OFF};

    #[test]
    fn proximity_graph_is_connected() {
        let geometry = Geometry::build(3);
        let hops = hop_distances(&geometry.leds, 0);
        assert!(hops.iter().all(Option::is_some));
        assert_eq!(hops[0], Some(0));
        for &n in &geometry.leds[0].neighbors {
            assert_eq!(hops[n], Some(1));
        }
    }

    #[test]
    fn hops_cross_corners() {
        // With one LED per edge every hop moves to a different edge.
        let geometry = Geometry::build(1);
        let hops = hop_distances(&geometry.leds, 0);
        let one_hop = hops.iter().filter(|h| **h == Some(1)).count();
        assert_eq!(one_hop, 4);
    }

    #[test]
    fn out_of_range_source_reaches_nothing() {
        let geometry = Geometry::build(2);
        let hops = hop_distances(geometry.leds(), geometry.leds().len());
        assert_eq!(hops.len(), 60);
        assert!(hops.iter().all(Option::is_none));

        assert!(hop_distances(&[], 0).is_empty());
    }

    #[test]
    fn new_wave_lights_its_source() {
        let mut geometry = Geometry::build(4);
        let mut ripple = Ripple::new(&geometry);
        ripple.initialize(&mut geometry);
        assert_eq!(ripple.waves.len(), 1);

        ripple.update(&mut geometry, SPAWN_INTERVAL);
        assert_eq!(ripple.waves.len(), 2);
        assert!(geometry.leds.iter().any(|led| led.color() != OFF));
    }

    #[test]
    fn no_waves_without_leds() {
        let mut geometry = Geometry::build(0);
        let mut ripple = Ripple::new(&geometry);
        ripple.initialize(&mut geometry);
        ripple.update(&mut geometry, SPAWN_INTERVAL);
        assert!(ripple.waves.is_empty());
    }
}
