use crate::core::data::viewport::Viewport;
use crate::core::fractals::kinds::FractalKind;
use crate::core::palettes::kinds::PaletteKind;

/// Lower clamp for the preview-quality multiplier.
pub const MIN_QUALITY: f64 = 0.05;

/// A snapshot of everything one render job needs.
///
/// Immutable by design; `PartialEq` lets callers skip resubmitting an
/// unchanged view. Kind-specific parameters travel inside [`FractalKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub kind: FractalKind,
    pub viewport: Viewport,
    pub width: u32,
    pub height: u32,
    pub iteration_cap: u32,
    pub palette: PaletteKind,
}

impl RenderRequest {
    /// A request at the kind's default extent, iteration cap and palette.
    #[must_use]
    pub fn new(kind: FractalKind, width: u32, height: u32) -> Self {
        Self {
            kind,
            viewport: kind.default_viewport(),
            width,
            height,
            iteration_cap: kind.default_iteration_cap(),
            palette: PaletteKind::default(),
        }
    }

    /// Scales the pixel dimensions by a preview-quality multiplier.
    ///
    /// Quality is clamped to `[MIN_QUALITY, 1.0]` and both dimensions stay at
    /// least 1; the display surface upscales the smaller buffer.
    #[must_use]
    pub fn at_quality(mut self, quality: f64) -> Self {
        let quality = if quality.is_finite() {
            quality.clamp(MIN_QUALITY, 1.0)
        } else {
            1.0
        };

        self.width = ((f64::from(self.width) * quality).floor() as u32).max(1);
        self.height = ((f64::from(self.height) * quality).floor() as u32).max(1);
        self
    }
}
