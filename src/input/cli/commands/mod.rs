pub mod explore;
pub mod grow_tree;
pub mod render_mandelbrot;
