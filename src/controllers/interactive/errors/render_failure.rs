/// A render that finished with an error rather than a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub generation: u64,
    pub message: String,
}
