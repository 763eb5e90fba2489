use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_failure::RenderFailure;

#[derive(Debug, Clone)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderFailure),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.generation,
            Self::Error(failure) => failure.generation,
        }
    }
}
