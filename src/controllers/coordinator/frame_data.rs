use crate::core::data::pixel_buffer::PixelBuffer;
use std::time::Duration;

/// A finished frame together with the generation that produced it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
