pub mod canvas;
pub mod errors;
pub mod grow;
pub mod params;
