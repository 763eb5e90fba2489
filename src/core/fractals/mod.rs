pub mod mandelbrot;
pub mod tree;
