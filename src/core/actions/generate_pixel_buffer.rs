use crate::core::actions::ports::{ColourMap, ColourMapError};
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratePixelBufferError {
    CountMismatch { expected: usize, actual: usize },
    ColourMap(ColourMapError),
    Buffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch { expected, actual } => {
                write!(
                    f,
                    "expected {} iteration counts for the surface, got {}",
                    expected, actual
                )
            }
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Buffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CountMismatch { .. } => None,
            Self::ColourMap(err) => Some(err),
            Self::Buffer(err) => Some(err),
        }
    }
}

/// Turns row-major iteration counts into an opaque RGBA buffer.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    counts: &[u32],
    map: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let expected = width as usize * height as usize;

    if counts.len() != expected {
        return Err(GeneratePixelBufferError::CountMismatch {
            expected,
            actual: counts.len(),
        });
    }

    let mut bytes = Vec::with_capacity(expected * BYTES_PER_PIXEL);

    for &count in counts {
        let colour = map.map(count).map_err(GeneratePixelBufferError::ColourMap)?;
        bytes.extend_from_slice(&[colour.r, colour.g, colour.b, u8::MAX]);
    }

    PixelBuffer::from_bytes(width, height, bytes).map_err(GeneratePixelBufferError::Buffer)
}
