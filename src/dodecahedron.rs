use ndarray::Array2;
use tracing::{debug, info};

use crate::{
    animation::{Animation, AnimationKind},
    config::{validate_leds_per_edge, DodecahedronConfig},
    error::Result,
    geometry::{generate_face_normals, generate_vertex_coords, FACE_COUNT},
    led::{link_neighbors, Color, Led},
    polyhedron::{assemble_graph, Edge, Face, Vertex},
};

// The fixed geometric model plus the LED colours. Everything is indexed by position in these lists,
// and the LED order (edge order, then along each edge) is the address of each LED on the string.
// Outside the crate the lists are read-only; only colours can be changed.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub(crate) leds_per_edge: usize,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) leds: Vec<Led>,
}

impl Geometry {
    // Corners, then edges and their LEDs, then faces, then the LED proximity graph.
    // `leds_per_edge` must already have passed `validate_leds_per_edge`.
    pub(crate) fn build(leds_per_edge: usize) -> Geometry {
        let (vertices, edges, mut leds) = assemble_graph(&generate_vertex_coords(), leds_per_edge);

        let faces: Vec<Face> = generate_face_normals()
            .into_iter()
            .map(|normal| Face::assign(normal, &vertices, &edges))
            .collect();
        assert_eq!(faces.len(), FACE_COUNT);

        let pairs = link_neighbors(&mut leds, leds_per_edge);

        let geometry = Geometry {
            leds_per_edge,
            vertices,
            edges,
            faces,
            leds,
        };
        geometry.check_face_incidence();

        debug!(
            faces = geometry.faces.len(),
            leds = geometry.leds.len(),
            led_pairs = pairs,
            "built dodecahedron geometry"
        );
        geometry
    }

    // A closed polyhedron has every edge on two faces and, for a dodecahedron, every corner on three.
    fn check_face_incidence(&self) {
        for e in 0..self.edges.len() {
            assert_eq!(self.faces_of_edge(e).len(), 2, "edge {} is not on two faces", e);
        }
        for v in 0..self.vertices.len() {
            let count = self.faces.iter().filter(|f| f.vertices.contains(&v)).count();
            assert_eq!(count, 3, "vertex {} is not on three faces", v);
        }
    }

    pub fn leds_per_edge(&self) -> usize {
        self.leds_per_edge
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn leds(&self) -> &[Led] {
        &self.leds
    }

    pub fn faces_of_edge(&self, edge: usize) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.edges.contains(&edge))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn turn_off(&mut self) {
        for led in self.leds.iter_mut() {
            led.turn_off();
        }
    }

    pub fn set_led_color(&mut self, led: usize, color: Color) {
        self.leds[led].set_color(color);
    }

    pub fn set_face_color(&mut self, face: usize, color: Color) {
        self.faces[face].color = color;
    }

    pub fn fill(&mut self, color: Color) {
        for led in self.leds.iter_mut() {
            led.set_color(color);
        }
    }

    pub fn fill_edge(&mut self, edge: usize, color: Color) {
        self.edges[edge].fill(&mut self.leds, color);
    }

    pub fn fill_face(&mut self, face: usize, color: Color) {
        self.faces[face].fill(&mut self.leds, color);
    }
}

pub struct Dodecahedron {
    geometry: Geometry,
    animation_index: usize,
    animation: Box<dyn Animation>,
}

impl Dodecahedron {
    // Builds the whole model, failing only on an unusable LED count. The first animation of the cycle
    // is active and initialised on return.
    pub fn new(leds_per_edge: i64) -> Result<Dodecahedron> {
        let leds_per_edge = validate_leds_per_edge(leds_per_edge)?;
        let mut geometry = Geometry::build(leds_per_edge);

        // Construction is the first advance from before the start of the cycle.
        let animation_index = 0;
        let animation = activate(animation_index, &mut geometry);

        info!(
            leds_per_edge,
            leds = geometry.leds.len(),
            "dodecahedron ready"
        );
        Ok(Dodecahedron {
            geometry,
            animation_index,
            animation,
        })
    }

    pub fn from_config(config: &DodecahedronConfig) -> Result<Dodecahedron> {
        Self::new(config.leds_per_edge)
    }

    /// Read-only view of the model. Positions and the LED graph cannot be changed through it:
    ///
    /// ```compile_fail
    /// let mut model = dodeca_lib::Dodecahedron::new(2).unwrap();
    /// model.geometry().leds[0].pos.x += 10.;
    /// ```
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn leds_per_edge(&self) -> usize {
        self.geometry.leds_per_edge
    }

    pub fn led_count(&self) -> usize {
        self.geometry.leds.len()
    }

    pub fn turn_off(&mut self) {
        self.geometry.turn_off();
    }

    // LED positions, one row per LED in address order.
    pub fn get_leds(&self) -> Array2<f32> {
        let leds = &self.geometry.leds;
        Array2::from_shape_fn((leds.len(), 3), |(i, j)| leds[i].pos[j])
    }

    // LED colours, parallel to `get_leds`.
    pub fn get_colors(&self) -> Array2<f32> {
        let leds = &self.geometry.leds;
        Array2::from_shape_fn((leds.len(), 3), |(i, j)| leds[i].color()[j])
    }

    pub fn animation_index(&self) -> usize {
        self.animation_index
    }

    pub fn active_animation(&self) -> AnimationKind {
        AnimationKind::CYCLE[self.animation_index]
    }

    // Drops the current animation and starts a fresh instance of the next one in the cycle.
    pub fn next_animation(&mut self) {
        self.animation_index = (self.animation_index + 1) % AnimationKind::CYCLE.len();
        self.animation = activate(self.animation_index, &mut self.geometry);
    }

    // One frame of the active animation, `dt` seconds after the previous one.
    pub fn update(&mut self, dt: f32) {
        self.animation.update(&mut self.geometry, dt);
    }
}

fn activate(index: usize, geometry: &mut Geometry) -> Box<dyn Animation> {
    let kind = AnimationKind::CYCLE[index];
    info!(index, ?kind, "starting animation");
    let mut animation = kind.build(geometry);
    animation.initialize(geometry);
    animation
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::{Dodecahedron, Geometry};
    use crate::{animation::AnimationKind, error::ModelError, led::Color};

    #[test]
    fn one_led_per_edge_sits_on_midpoint() {
        let mut model = Dodecahedron::new(1).unwrap();
        let geometry = model.geometry();
        assert_eq!(geometry.leds.len(), 30);

        for edge in &geometry.edges {
            assert_eq!(edge.leds.len(), 1);
            let led = &geometry.leds[edge.leds.start];
            assert_eq!(led.t, 0.5);
            let midpoint = (geometry.vertices[edge.v0].pos + geometry.vertices[edge.v1].pos) / 2.;
            assert_relative_eq!(led.pos, midpoint, epsilon = 1e-6);
        }

        model.turn_off();
        let colors = model.get_colors();
        assert_eq!(colors.dim(), (30, 3));
        assert!(colors.iter().all(|&c| c == 0.));
    }

    #[test]
    fn zero_leds_per_edge() {
        let model = Dodecahedron::new(0).unwrap();
        let geometry = model.geometry();
        assert_eq!(geometry.vertices.len(), 20);
        assert_eq!(geometry.edges.len(), 30);
        assert_eq!(geometry.faces.len(), 12);
        assert!(geometry.leds.is_empty());
        assert!(geometry.faces.iter().all(|f| f.leds.is_empty()));
        assert_eq!(model.get_leds().dim(), (0, 3));
        assert_eq!(model.get_colors().dim(), (0, 3));
    }

    #[test]
    fn negative_leds_per_edge_fails() {
        let err = Dodecahedron::new(-1).err().unwrap();
        assert!(matches!(err, ModelError::NegativeLedsPerEdge { got: -1 }));
    }

    #[test]
    fn oversized_leds_per_edge_fails_before_allocating() {
        let err = Dodecahedron::new(i64::MAX).err().unwrap();
        assert!(matches!(err, ModelError::TooManyLeds { .. }));
    }

    #[test]
    fn colour_setters_leave_geometry_alone() {
        let mut geometry = Geometry::build(3);
        let positions: Vec<_> = geometry.leds().iter().map(|led| led.pos()).collect();
        let red = Color::new(1., 0., 0.);

        geometry.set_led_color(4, Color::new(2., 0., -1.));
        assert_eq!(geometry.leds()[4].color(), red);
        geometry.set_face_color(2, red);
        assert_eq!(geometry.faces()[2].color(), red);

        let after: Vec<_> = geometry.leds().iter().map(|led| led.pos()).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn positions_are_stable_and_parallel_to_colors() {
        let mut model = Dodecahedron::new(5).unwrap();
        let before = model.get_leds();
        for _ in 0..10 {
            model.update(0.05);
        }
        model.next_animation();
        assert_eq!(before, model.get_leds());
        assert_eq!(before.dim(), model.get_colors().dim());
        for (i, led) in model.geometry().leds.iter().enumerate() {
            assert_eq!(before[[i, 0]], led.pos[0]);
            assert_eq!(before[[i, 2]], led.pos[2]);
        }
    }

    #[test]
    fn animations_cycle() {
        let mut model = Dodecahedron::new(2).unwrap();
        assert_eq!(model.animation_index(), 0);
        assert_eq!(model.active_animation(), AnimationKind::CYCLE[0]);

        for i in 1..AnimationKind::CYCLE.len() {
            model.next_animation();
            assert_eq!(model.animation_index(), i);
            assert_eq!(model.active_animation(), AnimationKind::CYCLE[i]);
        }
        model.next_animation();
        assert_eq!(model.animation_index(), 0);
    }

    #[test]
    fn turn_off_overrides_animation() {
        let mut model = Dodecahedron::new(3).unwrap();
        model.geometry.fill(Color::new(0.2, 0.4, 0.6));
        model.update(0.1);
        model.turn_off();
        assert!(model.get_colors().iter().all(|&c| c == 0.));
    }

    #[test]
    fn fill_face_and_edge() {
        let mut geometry = Geometry::build(2);
        let blue = Color::new(0., 0., 1.);
        geometry.fill_face(0, blue);
        let lit = geometry.leds.iter().filter(|led| led.color() == blue).count();
        assert_eq!(lit, 10);

        geometry.turn_off();
        geometry.fill_edge(7, blue);
        let lit: Vec<usize> = geometry.edges[7].leds.clone().collect();
        for (i, led) in geometry.leds.iter().enumerate() {
            assert_eq!(led.color() == blue, lit.contains(&i));
        }
    }

    #[test]
    fn edge_faces() {
        let geometry = Geometry::build(0);
        for e in 0..geometry.edges.len() {
            let faces = geometry.faces_of_edge(e);
            assert_eq!(faces.len(), 2);
            assert_ne!(faces[0], faces[1]);
        }
    }
}
