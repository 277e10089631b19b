pub mod entity;
pub mod point;
