pub mod interactive;
pub mod mandelbrot;
pub mod ports;
pub mod tree;
