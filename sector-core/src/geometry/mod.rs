pub mod bounds;
pub mod polygon;
pub mod r2;
pub mod sample;
pub mod transform;
