mod controllers;
mod core;
mod storage;

pub use crate::controllers::coordinator::{
    FrameData, FramePresenterPort, RenderCoordinator, RenderEvent, RenderFault,
};
pub use crate::controllers::snapshot::render_snapshot;
pub use crate::core::actions::generate_fractal::{
    generate_fractal_parallel, generate_fractal_serial,
};
pub use crate::core::actions::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::ports::{ColourMap, ColourMapError, FractalAlgorithm};
pub use crate::core::actions::render_frame::{RenderFrameError, render_frame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_request::{MIN_QUALITY, RenderRequest};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::attractor::{
    AttractorSystem, BURN_IN_ITERATIONS, plot_attractor,
};
pub use crate::core::fractals::escape_time::{
    ESCAPE_RADIUS_SQUARED, EscapeTimeAlgorithm, EscapeTimeRule,
};
pub use crate::core::fractals::kinds::{
    DEFAULT_JULIA_SEED, FractalFamily, FractalKind, Kernel,
};
pub use crate::core::fractals::root_finding::{
    DEFAULT_CONVERGENCE_EPSILON, RootFindingAlgorithm, RootFindingRule,
};
pub use crate::core::fractals::target_function::TargetFunction;
pub use crate::core::palettes::factory::palette_factory;
pub use crate::core::palettes::iteration_map::IterationColourMap;
pub use crate::core::palettes::kinds::PaletteKind;
pub use crate::core::palettes::palette::{Palette, PaletteError};
pub use crate::core::util::plane_mapping::{PlaneMappingError, pixel_to_plane, plane_to_pixel};
pub use crate::core::view::view_state::{MIN_SELECTION_PIXELS, ViewState, ViewStateError};
pub use crate::core::view::zoom_stack::ZoomStack;
pub use crate::storage::write_ppm::write_ppm;
