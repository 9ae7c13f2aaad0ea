use nalgebra::Vector3;

// (1+sqrt(5))/2
pub const GOLDEN_RATIO: f32 = 1.6180339887498948482045868343656381177;

const φ: f32 = GOLDEN_RATIO;
// Recall that 1/φ = φ-1
const ψ: f32 = 1. / GOLDEN_RATIO;

// Two adjacent corners such as (1, 1, 1) and (0, φ, 1/φ) differ by (1, 1-φ, 1-1/φ) = (1, -1/φ, 1/φ^2).
// Its squared length is 1 + 1/φ^2 + 1/φ^4 = 4/φ^2, so every edge has length 2/φ.
pub const EDGE_LENGTH: f32 = 2. / GOLDEN_RATIO;

// Slack on top of the edge length when deciding whether two corners share an edge.
// The next shortest corner to corner distance is 2, far outside of this.
pub const EDGE_TOLERANCE: f32 = 0.01;

// A corner on a face lies at distance sqrt(3-φ) ≈ 1.176 from that face's normal vector,
// while the nearest corner off the face lies at ≈ 2.320. Anything between the two separates them.
pub const FACE_DISTANCE: f32 = 2.;

// Two LEDs are neighbours if they are closer than this many LED spacings.
// Adjacent LEDs on one edge sit 1 spacing apart and the two LEDs flanking a corner on abutting edges
// sit 2sin(54°) ≈ 1.618 spacings apart, while the next LED out on the same edge is 2 spacings away.
pub const LED_NEIGHBOR_SPACINGS: f32 = 1.999;

pub const VERTEX_COUNT: usize = 20;
pub const EDGE_COUNT: usize = 30;
pub const FACE_COUNT: usize = 12;
pub const FACE_SIZE: usize = 5;

// The corners of the cube (±1, ±1, ±1) plus the cyclic permutations of (0, ±φ, ±1/φ)
const dodecahedron_verts: [Vector3<f32>; VERTEX_COUNT] = [
    Vector3::new(1., 1., 1.),
    Vector3::new(1., 1., -1.),
    Vector3::new(1., -1., 1.),
    Vector3::new(1., -1., -1.),
    Vector3::new(-1., 1., 1.),
    Vector3::new(-1., 1., -1.),
    Vector3::new(-1., -1., 1.),
    Vector3::new(-1., -1., -1.),
    Vector3::new(0., φ, ψ),
    Vector3::new(0., φ, -ψ),
    Vector3::new(0., -φ, ψ),
    Vector3::new(0., -φ, -ψ),
    Vector3::new(ψ, 0., φ),
    Vector3::new(ψ, 0., -φ),
    Vector3::new(-ψ, 0., φ),
    Vector3::new(-ψ, 0., -φ),
    Vector3::new(φ, ψ, 0.),
    Vector3::new(φ, -ψ, 0.),
    Vector3::new(-φ, ψ, 0.),
    Vector3::new(-φ, -ψ, 0.),
];

// Vertices of the dual icosahedron, the cyclic permutations of (0, ±1, ±φ).
// Each one points through the centre of one pentagonal face.
const face_normals: [Vector3<f32>; FACE_COUNT] = [
    Vector3::new(0., 1., φ),
    Vector3::new(0., 1., -φ),
    Vector3::new(0., -1., φ),
    Vector3::new(0., -1., -φ),
    Vector3::new(1., φ, 0.),
    Vector3::new(1., -φ, 0.),
    Vector3::new(-1., φ, 0.),
    Vector3::new(-1., -φ, 0.),
    Vector3::new(φ, 0., 1.),
    Vector3::new(φ, 0., -1.),
    Vector3::new(-φ, 0., 1.),
    Vector3::new(-φ, 0., -1.),
];

// The 20 corners of the dodecahedron, in a fixed order. Every other index in the model is derived
// from this order.
pub fn generate_vertex_coords() -> Vec<Vector3<f32>> {
    dodecahedron_verts.to_vec()
}

// One direction per pentagonal face, in a fixed order.
pub fn generate_face_normals() -> Vec<Vector3<f32>> {
    face_normals.to_vec()
}

// The largest corner to corner distance that still counts as an edge.
pub fn max_edge_length() -> f32 {
    EDGE_LENGTH + EDGE_TOLERANCE
}

// Distance between consecutive LEDs on one edge carrying `leds_per_edge` LEDs.
pub fn led_spacing(leds_per_edge: usize) -> f32 {
    EDGE_LENGTH / (leds_per_edge + 1) as f32
}

pub fn led_neighbor_distance(leds_per_edge: usize) -> f32 {
    LED_NEIGHBOR_SPACINGS * led_spacing(leds_per_edge)
}
