// Geometry constants keep their mathematical names
#![allow(non_upper_case_globals)]
pub mod animation;
pub mod config;
pub mod dodecahedron;
pub mod error;
pub mod geometry;
pub mod helper;
pub mod led;
pub mod polyhedron;

pub use dodecahedron::{Dodecahedron, Geometry};
pub use error::{ModelError, Result};
