pub mod lighting;
pub mod point_render;
pub mod rng;
