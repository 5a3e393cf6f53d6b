use crate::core::actions::ports::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::target_function::TargetFunction;
use crate::core::util::plane_mapping::{PlaneMappingError, pixel_to_plane};

/// Step-delta modulus below which an orbit counts as converged.
pub const DEFAULT_CONVERGENCE_EPSILON: f64 = 1e-5;

/// Newton iteration with an optional damping factor on the whole step:
/// `z' = (z - f(z)/f'(z)) * damping`. Newton uses `1.0`, Nova `0.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFindingRule {
    pub target: TargetFunction,
    pub damping: f64,
}

impl RootFindingRule {
    #[must_use]
    pub const fn newton(target: TargetFunction) -> Self {
        Self {
            target,
            damping: 1.0,
        }
    }

    #[must_use]
    pub const fn nova(target: TargetFunction) -> Self {
        Self {
            target,
            damping: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFindingAlgorithm {
    rule: RootFindingRule,
    viewport: Viewport,
    width: u32,
    height: u32,
    iteration_cap: u32,
    epsilon: f64,
}

impl RootFindingAlgorithm {
    #[must_use]
    pub fn new(
        rule: RootFindingRule,
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
            epsilon: DEFAULT_CONVERGENCE_EPSILON,
        }
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl FractalAlgorithm for RootFindingAlgorithm {
    type Success = u32;
    type Failure = PlaneMappingError;

    // A zero derivative makes f/f' non-finite; the delta comparison is then
    // false forever and the pixel runs to the cap instead of trapping.
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let (x, y) = pixel_to_plane(pixel, self.width, self.height, self.viewport)?;
        let mut z = Complex::new(x, y);
        let damping = Complex::new(self.rule.damping, 0.0);

        for iteration in 0..self.iteration_cap {
            let f = self.rule.target.eval(z);
            let df = self.rule.target.derivative(z);
            let next = (z - f / df) * damping;

            if (next - z).abs() < self.epsilon {
                return Ok(iteration);
            }

            z = next;
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
