//! Interactive Mandelbrot exploration.
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `RenderRequest` snapshots built by `ExplorerState`
//! - **Output**: the `FrameSink` trait receives rendered frames
//! - **Core**: rendering itself is `core::actions::render_mandelbrot`

mod controller;
pub mod data;
pub mod errors;
pub mod events;
mod explorer_state;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::explorer::ExplorerError;
pub use errors::render_failure::RenderFailure;
pub use events::render_event::RenderEvent;
pub use explorer_state::{ExplorerEvent, ExplorerState};
pub use ports::frame_sink::FrameSink;
