use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::plane_to_pixel;
use rand::Rng;

/// Steps dropped before the orbit is considered to be on the attractor.
pub const BURN_IN_ITERATIONS: u32 = 20;

const SIERPINSKI_VERTICES: [(f64, f64); 3] = [(-1.0, -1.0), (1.0, -1.0), (0.0, 1.0)];

const KOCH_VERTICES: [(f64, f64); 4] = [(-1.0, -0.5), (-0.5, 0.5), (0.5, 0.5), (1.0, -0.5)];

/// An iterated function system: a handful of affine maps chosen per step by a
/// uniform draw over disjoint probability intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttractorSystem {
    Sierpinski,
    BarnsleyFern,
    KochCurve,
}

impl AttractorSystem {
    /// The fixed logical window the density cloud is projected from. This is
    /// intentionally independent of the interactive viewport: the cloud is a
    /// whole-attractor picture, not a zoomable region.
    #[must_use]
    pub fn window(self) -> Viewport {
        let bounds = match self {
            Self::Sierpinski | Self::KochCurve => (-1.5, 1.5, -1.5, 1.5),
            Self::BarnsleyFern => (-3.0, 3.0, 0.0, 10.0),
        };

        Viewport::new(bounds.0, bounds.1, bounds.2, bounds.3)
            .expect("attractor windows satisfy the viewport invariant")
    }

    /// Applies the affine map selected by `r` (uniform in `[0, 1)`) to the
    /// running point.
    #[must_use]
    pub fn step(self, x: f64, y: f64, r: f64) -> (f64, f64) {
        match self {
            Self::Sierpinski => {
                let (vx, vy) = SIERPINSKI_VERTICES[((r * 3.0) as usize).min(2)];
                ((x + vx) / 2.0, (y + vy) / 2.0)
            }
            Self::BarnsleyFern => {
                // canonical fern coefficients at the 1% / 85% / 7% / 7% split
                if r < 0.01 {
                    (0.0, 0.16 * y)
                } else if r < 0.86 {
                    (0.85 * x + 0.04 * y, -0.04 * x + 0.85 * y + 1.6)
                } else if r < 0.93 {
                    (0.2 * x - 0.26 * y, 0.23 * x + 0.22 * y + 1.6)
                } else {
                    (-0.15 * x + 0.28 * y, 0.26 * x + 0.24 * y + 0.44)
                }
            }
            Self::KochCurve => {
                let (vx, vy) = KOCH_VERTICES[((r * 4.0) as usize).min(3)];
                ((x + vx) / 2.0, (y + vy) / 2.0)
            }
        }
    }
}

/// Runs the orbit for `iteration_cap` steps from the origin, painting every
/// post-burn-in point that lands inside the buffer. Points outside are
/// silently dropped.
pub fn plot_attractor<R: Rng>(
    system: AttractorSystem,
    iteration_cap: u32,
    colour: Colour,
    buffer: &mut PixelBuffer,
    rng: &mut R,
) {
    let window = system.window();
    let (mut x, mut y) = (0.0, 0.0);

    for i in 0..iteration_cap {
        let r: f64 = rng.gen_range(0.0..1.0);
        (x, y) = system.step(x, y, r);

        if i < BURN_IN_ITERATIONS {
            continue;
        }

        if let Some(pixel) = plane_to_pixel(x, y, buffer.width(), buffer.height(), window) {
            buffer.paint(pixel, colour);
        }
    }
}
