use std::ops::Range;

use nalgebra::Vector3;
use tracing::debug;

use crate::{
    geometry::{max_edge_length, EDGE_COUNT, FACE_DISTANCE, FACE_SIZE},
    helper::polar_angles,
    led::{interpolate_leds, Color, Led, OFF},
};

// Every index below refers into the model's flat lists of vertices, edges and LEDs.

#[derive(Clone, Debug)]
pub struct Vertex {
    pub(crate) pos: Vector3<f32>,
    // Vertices at the far end of each incident edge, parallel to `edges`
    pub(crate) neighbors: Vec<usize>,
    // Incident edges in the order they were created
    pub(crate) edges: Vec<usize>,
    // Polar coordinates
    pub(crate) θ: f32,
    pub(crate) φ: f32,
}

impl Vertex {
    pub fn new(pos: Vector3<f32>) -> Vertex {
        let (θ, φ) = polar_angles(pos);
        Vertex {
            pos,
            neighbors: Vec::new(),
            edges: Vec::new(),
            θ,
            φ,
        }
    }

    pub fn pos(&self) -> Vector3<f32> {
        self.pos
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    pub fn θ(&self) -> f32 {
        self.θ
    }

    pub fn φ(&self) -> f32 {
        self.φ
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEnd {
    V0,
    V1,
}

impl EdgeEnd {
    pub fn opposite(self) -> EdgeEnd {
        match self {
            EdgeEnd::V0 => EdgeEnd::V1,
            EdgeEnd::V1 => EdgeEnd::V0,
        }
    }

    fn slot(self) -> usize {
        match self {
            EdgeEnd::V0 => 0,
            EdgeEnd::V1 => 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub(crate) v0: usize,
    pub(crate) v1: usize,
    // The LEDs of this edge, running from v0 to v1
    pub(crate) leds: Range<usize>,
    // The other two edges meeting this one at v0 and at v1 respectively
    neighbors: [Vec<usize>; 2],
}

impl Edge {
    /*
    Joins v0 and v1, registering the new edge on both endpoints, and appends its LEDs to `leds`.
    `index` must be the position the edge will take in the model's edge list.
    */
    pub fn new(
        index: usize,
        v0: usize,
        v1: usize,
        vertices: &mut [Vertex],
        leds: &mut Vec<Led>,
        leds_per_edge: usize,
    ) -> Edge {
        vertices[v0].neighbors.push(v1);
        vertices[v1].neighbors.push(v0);
        vertices[v0].edges.push(index);
        vertices[v1].edges.push(index);

        let start = leds.len();
        leds.extend(interpolate_leds(
            &vertices[v0].pos,
            &vertices[v1].pos,
            index,
            leds_per_edge,
        ));

        Edge {
            v0,
            v1,
            leds: start..leds.len(),
            neighbors: [Vec::new(), Vec::new()],
        }
    }

    pub fn v0(&self) -> usize {
        self.v0
    }

    pub fn v1(&self) -> usize {
        self.v1
    }

    pub fn leds(&self) -> Range<usize> {
        self.leds.clone()
    }

    pub fn vertex(&self, end: EdgeEnd) -> usize {
        match end {
            EdgeEnd::V0 => self.v0,
            EdgeEnd::V1 => self.v1,
        }
    }

    // Which end of this edge sits on `vertex`, if any.
    pub fn end_at(&self, vertex: usize) -> Option<EdgeEnd> {
        if vertex == self.v0 {
            Some(EdgeEnd::V0)
        } else if vertex == self.v1 {
            Some(EdgeEnd::V1)
        } else {
            None
        }
    }

    // The two other edges sharing the vertex at `end`.
    pub fn neighbors_at(&self, end: EdgeEnd) -> &[usize] {
        &self.neighbors[end.slot()]
    }

    pub fn has_vertex(&self, vertex: usize) -> bool {
        self.end_at(vertex).is_some()
    }

    pub fn fill(&self, leds: &mut [Led], color: Color) {
        for led in &mut leds[self.leds.clone()] {
            led.set_color(color);
        }
    }

    pub fn turn_off(&self, leds: &mut [Led]) {
        for led in &mut leds[self.leds.clone()] {
            led.turn_off();
        }
    }
}

/*
Builds the vertex/edge graph from raw corner coordinates. Two corners are joined exactly when they
sit one edge length apart, which yields 30 edges on a dodecahedron. Edge i joins corner i to each
earlier corner j in turn, so the edge order (and with it the LED order) is fully determined by the
coordinate order.
*/
pub fn assemble_graph(
    coords: &[Vector3<f32>],
    leds_per_edge: usize,
) -> (Vec<Vertex>, Vec<Edge>, Vec<Led>) {
    let mut vertices: Vec<Vertex> = coords.iter().copied().map(Vertex::new).collect();
    let mut edges = Vec::with_capacity(EDGE_COUNT);
    let mut leds = Vec::with_capacity(EDGE_COUNT * leds_per_edge);

    let max_len = max_edge_length();
    for i in 0..coords.len() {
        for j in 0..i {
            let dist = (coords[i] - coords[j]).magnitude();
            if dist > 0. && dist <= max_len {
                let edge = Edge::new(edges.len(), i, j, &mut vertices, &mut leds, leds_per_edge);
                edges.push(edge);
            }
        }
    }

    assert_eq!(
        edges.len(),
        EDGE_COUNT,
        "edge length tolerance admitted the wrong number of edges"
    );
    partition_edges_at_vertices(&vertices, &mut edges);

    debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        leds = leds.len(),
        "assembled polyhedron graph"
    );
    (vertices, edges, leds)
}

// At every corner exactly three edges meet. For each of them record the other two, on the end that
// touches this corner. Anything other than three edges per corner means the geometry is broken.
fn partition_edges_at_vertices(vertices: &[Vertex], edges: &mut [Edge]) {
    for (v, vertex) in vertices.iter().enumerate() {
        assert_eq!(
            vertex.edges.len(),
            3,
            "vertex {} has {} incident edges",
            v,
            vertex.edges.len()
        );

        for &e in &vertex.edges {
            let others: Vec<usize> = vertex.edges.iter().copied().filter(|&o| o != e).collect();
            if let Some(end) = edges[e].end_at(v) {
                edges[e].neighbors[end.slot()] = others;
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Face {
    pub(crate) normal: Vector3<f32>,
    pub(crate) vertices: Vec<usize>,
    pub(crate) edges: Vec<usize>,
    // LEDs of every edge of the face, edge by edge
    pub(crate) leds: Vec<usize>,
    pub(crate) color: Color,
}

impl Face {
    // Selects the five corners nearest `normal` and the five edges running between them.
    pub fn assign(normal: Vector3<f32>, vertices: &[Vertex], edges: &[Edge]) -> Face {
        let face_vertices: Vec<usize> = vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| (v.pos - normal).magnitude() < FACE_DISTANCE)
            .map(|(i, _)| i)
            .collect();

        let face_edges: Vec<usize> = edges
            .iter()
            .enumerate()
            .filter(|(_, e)| face_vertices.contains(&e.v0) && face_vertices.contains(&e.v1))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(face_vertices.len(), FACE_SIZE, "face {:?} is not a pentagon", normal);
        assert_eq!(face_edges.len(), FACE_SIZE, "face {:?} is not a pentagon", normal);

        let leds = face_edges
            .iter()
            .flat_map(|&e| edges[e].leds.clone())
            .collect();

        Face {
            normal,
            vertices: face_vertices,
            edges: face_edges,
            leds,
            color: OFF,
        }
    }

    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    pub fn leds(&self) -> &[usize] {
        &self.leds
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn fill(&self, leds: &mut [Led], color: Color) {
        for &i in &self.leds {
            leds[i].set_color(color);
        }
    }

    pub fn turn_off(&self, leds: &mut [Led]) {
        for &i in &self.leds {
            leds[i].turn_off();
        }
    }
}
