pub mod camera;
pub mod point_instance;
