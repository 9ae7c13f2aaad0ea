use crate::dodecahedron::Geometry;

use self::{
    edge_chase::EdgeChase, face_wash::FaceWash, ripple::Ripple, sparkle::Sparkle, spin::Spin,
};

pub mod edge_chase;
pub mod face_wash;
pub mod ripple;
pub mod sparkle;
pub mod spin;

// Something that paints the LEDs of a model over time. An animation may read any part of the geometry
// and changes colours only through the LEDs themselves.
pub trait Animation {
    // Runs once, when the animation becomes the active one.
    fn initialize(&mut self, geometry: &mut Geometry);

    // Runs every frame. `dt` is the time since the previous frame in seconds.
    fn update(&mut self, geometry: &mut Geometry, dt: f32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    FaceWash,
    Ripple,
    Spin,
    Sparkle,
    EdgeChase,
}

impl AnimationKind {
    // The order in which the model cycles through its animations.
    pub const CYCLE: [AnimationKind; 5] = [
        AnimationKind::FaceWash,
        AnimationKind::Ripple,
        AnimationKind::Spin,
        AnimationKind::Sparkle,
        AnimationKind::EdgeChase,
    ];

    // A fresh, uninitialised instance bound to `geometry`.
    pub fn build(self, geometry: &Geometry) -> Box<dyn Animation> {
        match self {
            AnimationKind::FaceWash => Box::new(FaceWash::new(geometry)),
            AnimationKind::Ripple => Box::new(Ripple::new(geometry)),
            AnimationKind::Spin => Box::new(Spin::new()),
            AnimationKind::Sparkle => Box::new(Sparkle::new(geometry)),
            AnimationKind::EdgeChase => Box::new(EdgeChase::new(geometry)),
        }
    }
}
