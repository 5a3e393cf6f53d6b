use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaneMappingError {
    PixelOutsideSurface {
        pixel: Point,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for PlaneMappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideSurface {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} surface",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PlaneMappingError {}

/// Maps a pixel to its plane coordinate: row 0 / column 0 land exactly on
/// `(xmin, ymin)` and the step is `extent / dimension`.
pub fn pixel_to_plane(
    pixel: Point,
    width: u32,
    height: u32,
    viewport: Viewport,
) -> Result<(f64, f64), PlaneMappingError> {
    if pixel.x >= width || pixel.y >= height {
        return Err(PlaneMappingError::PixelOutsideSurface {
            pixel,
            width,
            height,
        });
    }

    let x = viewport.xmin() + (f64::from(pixel.x) / f64::from(width)) * viewport.width();
    let y = viewport.ymin() + (f64::from(pixel.y) / f64::from(height)) * viewport.height();

    Ok((x, y))
}

/// Inverse of [`pixel_to_plane`]: plane coordinates outside the window (or
/// rounding past the last row/column) yield `None`.
#[must_use]
pub fn plane_to_pixel(x: f64, y: f64, width: u32, height: u32, window: Viewport) -> Option<Point> {
    let px = ((x - window.xmin()) / window.width() * f64::from(width)).floor();
    let py = ((y - window.ymin()) / window.height() * f64::from(height)).floor();

    if !(px >= 0.0 && px < f64::from(width) && py >= 0.0 && py < f64::from(height)) {
        return None;
    }

    Some(Point {
        x: px as u32,
        y: py as u32,
    })
}
