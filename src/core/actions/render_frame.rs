use crate::core::actions::generate_fractal::generate_fractal_parallel;
use crate::core::actions::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::ports::FractalAlgorithm;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::attractor::plot_attractor;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use crate::core::fractals::kinds::Kernel;
use crate::core::fractals::root_finding::RootFindingAlgorithm;
use crate::core::palettes::factory::palette_factory;
use crate::core::palettes::iteration_map::IterationColourMap;
use crate::core::palettes::palette::Palette;
use crate::core::util::plane_mapping::PlaneMappingError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrameError {
    EmptySurface { width: u32, height: u32 },
    ZeroIterationCap,
    Kernel(PlaneMappingError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySurface { width, height } => {
                write!(f, "render surface must be non-empty, got {}x{}", width, height)
            }
            Self::ZeroIterationCap => write!(f, "iteration cap must be greater than zero"),
            Self::Kernel(err) => write!(f, "kernel error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptySurface { .. } | Self::ZeroIterationCap => None,
            Self::Kernel(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Computes one frame for a request: the engine's single entry point.
///
/// Synchronous and side-effect-free; the render coordinator calls it from its
/// worker thread, but it is equally usable directly.
pub fn render_frame(request: &RenderRequest) -> Result<PixelBuffer, RenderFrameError> {
    if request.width == 0 || request.height == 0 {
        return Err(RenderFrameError::EmptySurface {
            width: request.width,
            height: request.height,
        });
    }

    if request.iteration_cap == 0 {
        return Err(RenderFrameError::ZeroIterationCap);
    }

    let palette = palette_factory(request.palette);

    match request.kind.kernel() {
        Kernel::EscapeTime(rule) => {
            let algorithm = EscapeTimeAlgorithm::new(
                rule,
                request.viewport,
                request.width,
                request.height,
                request.iteration_cap,
            );
            render_per_pixel(&algorithm, palette, request)
        }
        Kernel::RootFinding(rule) => {
            let algorithm = RootFindingAlgorithm::new(
                rule,
                request.viewport,
                request.width,
                request.height,
                request.iteration_cap,
            );
            render_per_pixel(&algorithm, palette, request)
        }
        Kernel::Attractor(system) => {
            let mut buffer = PixelBuffer::new(request.width, request.height);
            plot_attractor(
                system,
                request.iteration_cap,
                palette.last_stop(),
                &mut buffer,
                &mut rand::thread_rng(),
            );
            Ok(buffer)
        }
    }
}

fn render_per_pixel<Alg>(
    algorithm: &Alg,
    palette: Palette,
    request: &RenderRequest,
) -> Result<PixelBuffer, RenderFrameError>
where
    Alg: FractalAlgorithm<Success = u32, Failure = PlaneMappingError> + Sync,
{
    let counts = generate_fractal_parallel(algorithm).map_err(RenderFrameError::Kernel)?;
    let map = IterationColourMap::new(palette, request.iteration_cap);

    generate_pixel_buffer(&counts, &map, request.width, request.height)
        .map_err(RenderFrameError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::kinds::FractalKind;
    use crate::core::fractals::target_function::TargetFunction;
    use crate::core::palettes::kinds::PaletteKind;

    fn pixel_at(buffer: &PixelBuffer, x: u32, y: u32) -> &[u8] {
        let index = (y as usize * buffer.width() as usize + x as usize) * 4;
        &buffer.bytes()[index..index + 4]
    }

    #[test]
    fn test_buffer_has_rgba_dimensions() {
        let request = RenderRequest::new(FractalKind::Mandelbrot, 16, 12);
        let buffer = render_frame(&request).unwrap();

        assert_eq!(buffer.width(), 16);
        assert_eq!(buffer.height(), 12);
        assert_eq!(buffer.bytes().len(), 16 * 12 * 4);
    }

    #[test]
    fn test_escape_time_pixels_are_opaque() {
        let request = RenderRequest::new(FractalKind::Mandelbrot, 16, 12);
        let buffer = render_frame(&request).unwrap();

        for pixel in buffer.bytes().chunks_exact(4) {
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_in_set_region_renders_black() {
        // A viewport inside the main cardioid: every pixel caps out
        let request = RenderRequest {
            viewport: Viewport::new(-0.1, 0.1, -0.1, 0.1).unwrap(),
            ..RenderRequest::new(FractalKind::Mandelbrot, 8, 8)
        };
        let buffer = render_frame(&request).unwrap();

        for pixel in buffer.bytes().chunks_exact(4) {
            assert_eq!(pixel, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_immediate_escape_uses_the_first_palette_stop() {
        // A viewport far outside the set: every pixel escapes within one
        // iteration, which selects stop 0 rather than the in-set black path
        let request = RenderRequest {
            viewport: Viewport::new(3.0, 4.0, 3.0, 4.0).unwrap(),
            ..RenderRequest::new(FractalKind::Mandelbrot, 4, 4)
        };
        let buffer = render_frame(&request).unwrap();

        assert_eq!(pixel_at(&buffer, 0, 0), &[0, 0, 0, 255]);
    }

    #[test]
    fn test_set_boundary_shows_palette_colours() {
        let request = RenderRequest {
            palette: PaletteKind::Grayscale,
            ..RenderRequest::new(FractalKind::Mandelbrot, 32, 24)
        };
        let buffer = render_frame(&request).unwrap();

        // the default view spans the set boundary, so some counts land
        // strictly between 0 and the cap
        let non_black = buffer
            .bytes()
            .chunks_exact(4)
            .filter(|pixel| pixel[..3] != [0, 0, 0])
            .count();

        assert!(non_black > 0);
    }

    #[test]
    fn test_newton_renders_convergence_speeds() {
        let request = RenderRequest::new(
            FractalKind::Newton {
                target: TargetFunction::CubeRootsOfUnity,
            },
            16,
            16,
        );
        let buffer = render_frame(&request).unwrap();

        // most seeds converge fast; expect non-black pixels somewhere
        let non_black = buffer
            .bytes()
            .chunks_exact(4)
            .filter(|pixel| pixel[..3] != [0, 0, 0])
            .count();

        assert!(non_black > 0);
    }

    #[test]
    fn test_attractor_buffer_keeps_transparent_background() {
        let request = RenderRequest::new(FractalKind::BarnsleyFern, 32, 32);
        let buffer = render_frame(&request).unwrap();

        let transparent = buffer
            .bytes()
            .chunks_exact(4)
            .filter(|pixel| pixel[3] == 0)
            .count();
        let painted = buffer
            .bytes()
            .chunks_exact(4)
            .filter(|pixel| pixel[3] == 255)
            .count();

        assert!(painted > 0);
        assert!(transparent > 0);
    }

    #[test]
    fn test_attractor_paints_with_the_palette_last_stop() {
        let request = RenderRequest {
            palette: PaletteKind::Grayscale,
            ..RenderRequest::new(FractalKind::Sierpinski, 32, 32)
        };
        let buffer = render_frame(&request).unwrap();

        for pixel in buffer.bytes().chunks_exact(4) {
            if pixel[3] == 255 {
                assert_eq!(&pixel[..3], &[255, 255, 255]);
            }
        }
    }

    #[test]
    fn test_empty_surface_is_rejected() {
        let request = RenderRequest {
            width: 0,
            ..RenderRequest::new(FractalKind::Mandelbrot, 8, 8)
        };

        assert_eq!(
            render_frame(&request),
            Err(RenderFrameError::EmptySurface {
                width: 0,
                height: 8
            })
        );
    }

    #[test]
    fn test_zero_iteration_cap_is_rejected() {
        let request = RenderRequest {
            iteration_cap: 0,
            ..RenderRequest::new(FractalKind::Mandelbrot, 8, 8)
        };

        assert_eq!(render_frame(&request), Err(RenderFrameError::ZeroIterationCap));
    }
}
