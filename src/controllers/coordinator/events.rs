use crate::controllers::coordinator::frame_data::FrameData;

/// A failed render job. The previous frame stays on screen; nothing here is
/// fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFault {
    pub generation: u64,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Fault(RenderFault),
}
