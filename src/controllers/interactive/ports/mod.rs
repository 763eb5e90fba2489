//! Interfaces between the interactive controller and whatever displays its
//! output.

pub mod frame_sink;
