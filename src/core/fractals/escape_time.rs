use crate::core::actions::ports::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::{PlaneMappingError, pixel_to_plane};

/// Squared modulus at which an orbit counts as escaped (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Which recurrence the escape-time loop runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeTimeRule {
    Mandelbrot,
    Julia { seed: Complex },
    BurningShip,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    rule: EscapeTimeRule,
    viewport: Viewport,
    width: u32,
    height: u32,
    iteration_cap: u32,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        rule: EscapeTimeRule,
        viewport: Viewport,
        width: u32,
        height: u32,
        iteration_cap: u32,
    ) -> Self {
        Self {
            rule,
            viewport,
            width,
            height,
            iteration_cap,
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;
    type Failure = PlaneMappingError;

    // The inner loop runs on raw f64 pairs; per-pixel cost is the dominant
    // cost centre of the whole engine, so it must not allocate.
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let (cx, cy) = pixel_to_plane(pixel, self.width, self.height, self.viewport)?;

        let (mut zx, mut zy, ax, ay) = match self.rule {
            EscapeTimeRule::Mandelbrot | EscapeTimeRule::BurningShip => (0.0, 0.0, cx, cy),
            EscapeTimeRule::Julia { seed } => (cx, cy, seed.re, seed.im),
        };
        let fold_imag = matches!(self.rule, EscapeTimeRule::BurningShip);

        for iteration in 0..self.iteration_cap {
            if zx * zx + zy * zy >= ESCAPE_RADIUS_SQUARED {
                return Ok(iteration);
            }

            let cross = 2.0 * zx * zy;
            let next_zx = zx * zx - zy * zy + ax;
            zy = if fold_imag { cross.abs() + ay } else { cross + ay };
            zx = next_zx;
        }

        Ok(self.iteration_cap)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
