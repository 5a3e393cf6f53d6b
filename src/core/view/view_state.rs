use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::kinds::FractalKind;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::view::zoom_stack::ZoomStack;
use std::error::Error;
use std::fmt;

/// Drag selections smaller than this on either axis are ignored, so a stray
/// click can never produce a degenerate viewport.
pub const MIN_SELECTION_PIXELS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStateError {
    EmptySurface { width: u32, height: u32 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySurface { width, height } => {
                write!(f, "view surface must be non-empty, got {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewStateError {}

/// One fractal session's view: the active kind, the visible plane rectangle
/// and the zoom history. All operations are pure bounds arithmetic in
/// pixel-space units of the owning display surface; none touch pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    kind: FractalKind,
    viewport: Viewport,
    zoom_stack: ZoomStack,
    surface_width: u32,
    surface_height: u32,
}

impl ViewState {
    pub fn new(
        kind: FractalKind,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Self, ViewStateError> {
        if surface_width == 0 || surface_height == 0 {
            return Err(ViewStateError::EmptySurface {
                width: surface_width,
                height: surface_height,
            });
        }

        Ok(Self {
            kind,
            viewport: kind.default_viewport(),
            zoom_stack: ZoomStack::new(),
            surface_width,
            surface_height,
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn zoom_depth(&self) -> usize {
        self.zoom_stack.depth()
    }

    /// Translates the view by a pixel delta converted to plane units.
    /// Panning is not a zoom level, so nothing is pushed onto the stack.
    pub fn pan_by(&mut self, dx_pixels: f64, dy_pixels: f64) {
        let dx = dx_pixels / f64::from(self.surface_width) * self.viewport.width();
        let dy = dy_pixels / f64::from(self.surface_height) * self.viewport.height();

        if let Ok(next) = Viewport::new(
            self.viewport.xmin() + dx,
            self.viewport.xmax() + dx,
            self.viewport.ymin() + dy,
            self.viewport.ymax() + dy,
        ) {
            self.viewport = next;
        }
    }

    /// Rescales the extent by `factor` (< 1 zooms in) while keeping the plane
    /// point under the given pixel fixed. Returns `false` without touching
    /// any state for degenerate factors.
    pub fn zoom_at(&mut self, px: f64, py: f64, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            return false;
        }

        let fx = px / f64::from(self.surface_width);
        let fy = py / f64::from(self.surface_height);
        let anchor_x = self.viewport.xmin() + fx * self.viewport.width();
        let anchor_y = self.viewport.ymin() + fy * self.viewport.height();
        let new_width = self.viewport.width() * factor;
        let new_height = self.viewport.height() * factor;
        let xmin = anchor_x - fx * new_width;
        let ymin = anchor_y - fy * new_height;

        match Viewport::new(xmin, xmin + new_width, ymin, ymin + new_height) {
            Ok(next) => {
                self.zoom_stack.push(self.viewport);
                self.viewport = next;
                true
            }
            Err(_) => false,
        }
    }

    /// Zooms to a drag-selected pixel rectangle. Corners may be given in any
    /// order; selections below [`MIN_SELECTION_PIXELS`] are ignored.
    pub fn zoom_to_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        let (lo_x, hi_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (lo_y, hi_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };

        if !(hi_x - lo_x > MIN_SELECTION_PIXELS && hi_y - lo_y > MIN_SELECTION_PIXELS) {
            return false;
        }

        let viewport = self.viewport;
        let xmin = viewport.xmin() + (lo_x / f64::from(self.surface_width)) * viewport.width();
        let xmax = viewport.xmin() + (hi_x / f64::from(self.surface_width)) * viewport.width();
        let ymin = viewport.ymin() + (lo_y / f64::from(self.surface_height)) * viewport.height();
        let ymax = viewport.ymin() + (hi_y / f64::from(self.surface_height)) * viewport.height();

        match Viewport::new(xmin, xmax, ymin, ymax) {
            Ok(next) => {
                self.zoom_stack.push(viewport);
                self.viewport = next;
                true
            }
            Err(_) => false,
        }
    }

    /// Restores the most recent pre-zoom bounds; no-op on an empty stack.
    pub fn zoom_out(&mut self) -> bool {
        match self.zoom_stack.pop() {
            Some(previous) => {
                self.viewport = previous;
                true
            }
            None => false,
        }
    }

    /// Back to the kind's default extent with an empty history.
    pub fn reset(&mut self) {
        self.viewport = self.kind.default_viewport();
        self.zoom_stack.clear();
    }

    /// Selects another fractal kind; the old kind's history is meaningless
    /// for the new one, so the view resets completely.
    pub fn switch_kind(&mut self, kind: FractalKind) {
        self.kind = kind;
        self.reset();
    }

    /// Snapshot of the current view as a render request, scaled by the
    /// preview-quality multiplier.
    #[must_use]
    pub fn build_request(
        &self,
        iteration_cap: u32,
        palette: PaletteKind,
        quality: f64,
    ) -> RenderRequest {
        RenderRequest {
            kind: self.kind,
            viewport: self.viewport,
            width: self.surface_width,
            height: self.surface_height,
            iteration_cap,
            palette,
        }
        .at_quality(quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandelbrot_view() -> ViewState {
        ViewState::new(FractalKind::Mandelbrot, 800, 800).unwrap()
    }

    #[test]
    fn test_new_starts_at_the_kind_default_extent() {
        let view = mandelbrot_view();

        assert_eq!(view.viewport(), FractalKind::Mandelbrot.default_viewport());
        assert_eq!(view.zoom_depth(), 0);
    }

    #[test]
    fn test_new_rejects_empty_surface() {
        assert_eq!(
            ViewState::new(FractalKind::Mandelbrot, 0, 600),
            Err(ViewStateError::EmptySurface {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_pan_translates_without_resizing() {
        let mut view = mandelbrot_view();
        let before = view.viewport();

        view.pan_by(200.0, -100.0);
        let after = view.viewport();

        // 200 px of an 800 px surface is a quarter of the 4-unit extent
        assert_eq!(after.xmin(), before.xmin() + 1.0);
        assert_eq!(after.xmax(), before.xmax() + 1.0);
        assert_eq!(after.ymin(), before.ymin() - 0.375);
        assert_eq!(after.width(), before.width());
        assert_eq!(view.zoom_depth(), 0);
    }

    #[test]
    fn test_zoom_at_keeps_the_anchor_point_fixed() {
        let mut view = mandelbrot_view();
        let viewport = view.viewport();
        let (px, py) = (600.0, 200.0);
        let anchor_x = viewport.xmin() + px / 800.0 * viewport.width();
        let anchor_y = viewport.ymin() + py / 800.0 * viewport.height();

        assert!(view.zoom_at(px, py, 0.5));

        let zoomed = view.viewport();
        let anchor_x_after = zoomed.xmin() + px / 800.0 * zoomed.width();
        let anchor_y_after = zoomed.ymin() + py / 800.0 * zoomed.height();

        assert!((anchor_x_after - anchor_x).abs() < 1e-12);
        assert!((anchor_y_after - anchor_y).abs() < 1e-12);
        assert!((zoomed.width() - viewport.width() * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_at_rejects_degenerate_factors() {
        let mut view = mandelbrot_view();
        let before = view.viewport();

        assert!(!view.zoom_at(400.0, 400.0, 0.0));
        assert!(!view.zoom_at(400.0, 400.0, -2.0));
        assert!(!view.zoom_at(400.0, 400.0, f64::NAN));
        assert_eq!(view.viewport(), before);
        assert_eq!(view.zoom_depth(), 0);
    }

    #[test]
    fn test_zoom_out_restores_bounds_bit_for_bit() {
        let mut view = mandelbrot_view();
        let original = view.viewport();

        assert!(view.zoom_to_rect(123.0, 77.0, 456.0, 391.0));
        assert_ne!(view.viewport(), original);
        assert!(view.zoom_out());
        assert_eq!(view.viewport(), original);
        assert!(!view.zoom_out());
    }

    #[test]
    fn test_zoom_to_rect_accepts_corners_in_any_order() {
        let mut a = mandelbrot_view();
        let mut b = mandelbrot_view();

        assert!(a.zoom_to_rect(100.0, 100.0, 300.0, 250.0));
        assert!(b.zoom_to_rect(300.0, 250.0, 100.0, 100.0));
        assert_eq!(a.viewport(), b.viewport());
    }

    #[test]
    fn test_zoom_to_rect_maps_the_selection_to_plane_corners() {
        let mut view = mandelbrot_view();

        assert!(view.zoom_to_rect(0.0, 0.0, 400.0, 400.0));

        // the top-left quadrant of the default Mandelbrot extent
        let viewport = view.viewport();
        assert_eq!(viewport.xmin(), -2.5);
        assert_eq!(viewport.xmax(), -0.5);
        assert_eq!(viewport.ymin(), -1.5);
        assert_eq!(viewport.ymax(), 0.0);
    }

    #[test]
    fn test_tiny_selection_is_ignored() {
        let mut view = mandelbrot_view();
        let before = view.viewport();

        assert!(!view.zoom_to_rect(100.0, 100.0, 109.0, 300.0));
        assert!(!view.zoom_to_rect(100.0, 100.0, 300.0, 109.0));
        assert!(!view.zoom_to_rect(100.0, 100.0, 100.0, 100.0));
        assert_eq!(view.viewport(), before);
        assert_eq!(view.zoom_depth(), 0);
    }

    #[test]
    fn test_nan_selection_is_ignored() {
        let mut view = mandelbrot_view();
        let before = view.viewport();

        assert!(!view.zoom_to_rect(f64::NAN, 100.0, 300.0, 300.0));
        assert_eq!(view.viewport(), before);
    }

    #[test]
    fn test_reset_restores_default_and_clears_history() {
        let mut view = mandelbrot_view();
        view.zoom_to_rect(100.0, 100.0, 300.0, 300.0);
        view.zoom_to_rect(50.0, 50.0, 200.0, 200.0);

        view.reset();

        assert_eq!(view.viewport(), FractalKind::Mandelbrot.default_viewport());
        assert_eq!(view.zoom_depth(), 0);
        assert!(!view.zoom_out());
    }

    #[test]
    fn test_switch_kind_adopts_the_new_default_extent() {
        let mut view = mandelbrot_view();
        view.zoom_to_rect(100.0, 100.0, 300.0, 300.0);

        view.switch_kind(FractalKind::BarnsleyFern);

        assert_eq!(view.kind(), FractalKind::BarnsleyFern);
        assert_eq!(view.viewport(), FractalKind::BarnsleyFern.default_viewport());
        assert_eq!(view.zoom_depth(), 0);
    }

    #[test]
    fn test_build_request_snapshots_the_view() {
        let mut view = mandelbrot_view();
        view.zoom_to_rect(0.0, 0.0, 400.0, 400.0);

        let request = view.build_request(250, PaletteKind::Blue, 1.0);

        assert_eq!(request.kind, FractalKind::Mandelbrot);
        assert_eq!(request.viewport, view.viewport());
        assert_eq!(request.width, 800);
        assert_eq!(request.height, 800);
        assert_eq!(request.iteration_cap, 250);
        assert_eq!(request.palette, PaletteKind::Blue);
    }

    #[test]
    fn test_build_request_applies_quality() {
        let view = mandelbrot_view();
        let request = view.build_request(100, PaletteKind::Classic, 0.3);

        assert_eq!(request.width, 240);
        assert_eq!(request.height, 240);
    }
}
