pub mod factory;
pub mod png;
pub mod ppm;
