use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::attractor::AttractorSystem;
use crate::core::fractals::escape_time::EscapeTimeRule;
use crate::core::fractals::root_finding::RootFindingRule;
use crate::core::fractals::target_function::TargetFunction;
use rand::Rng;

/// Seed used when a Julia set is first selected.
pub const DEFAULT_JULIA_SEED: Complex = Complex { re: -0.4, im: 0.6 };

/// Every renderable fractal, carrying its kind-specific parameters so that
/// dispatch over kinds is exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalKind {
    Mandelbrot,
    Julia { seed: Complex },
    BurningShip,
    Newton { target: TargetFunction },
    Nova { target: TargetFunction },
    Sierpinski,
    BarnsleyFern,
    KochCurve,
}

/// The three kernel families; a kind's family determines its default
/// iteration range and how a request is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalFamily {
    EscapeTime,
    RootFinding,
    Attractor,
}

/// A kind resolved into the concrete kernel that renders it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    EscapeTime(EscapeTimeRule),
    RootFinding(RootFindingRule),
    Attractor(AttractorSystem),
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia {
            seed: DEFAULT_JULIA_SEED,
        },
        Self::BurningShip,
        Self::Newton {
            target: TargetFunction::CubeRootsOfUnity,
        },
        Self::Nova {
            target: TargetFunction::CubeRootsOfUnity,
        },
        Self::Sierpinski,
        Self::BarnsleyFern,
        Self::KochCurve,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Newton { .. } => "Newton",
            Self::Nova { .. } => "Nova",
            Self::Sierpinski => "Sierpinski",
            Self::BarnsleyFern => "Barnsley fern",
            Self::KochCurve => "Koch curve",
        }
    }

    #[must_use]
    pub const fn family(self) -> FractalFamily {
        match self {
            Self::Mandelbrot | Self::Julia { .. } | Self::BurningShip => FractalFamily::EscapeTime,
            Self::Newton { .. } | Self::Nova { .. } => FractalFamily::RootFinding,
            Self::Sierpinski | Self::BarnsleyFern | Self::KochCurve => FractalFamily::Attractor,
        }
    }

    #[must_use]
    pub fn kernel(self) -> Kernel {
        match self {
            Self::Mandelbrot => Kernel::EscapeTime(EscapeTimeRule::Mandelbrot),
            Self::Julia { seed } => Kernel::EscapeTime(EscapeTimeRule::Julia { seed }),
            Self::BurningShip => Kernel::EscapeTime(EscapeTimeRule::BurningShip),
            Self::Newton { target } => Kernel::RootFinding(RootFindingRule::newton(target)),
            Self::Nova { target } => Kernel::RootFinding(RootFindingRule::nova(target)),
            Self::Sierpinski => Kernel::Attractor(AttractorSystem::Sierpinski),
            Self::BarnsleyFern => Kernel::Attractor(AttractorSystem::BarnsleyFern),
            Self::KochCurve => Kernel::Attractor(AttractorSystem::KochCurve),
        }
    }

    /// The extent shown when this kind is selected or the view is reset.
    #[must_use]
    pub fn default_viewport(self) -> Viewport {
        let bounds = match self {
            Self::Mandelbrot => (-2.5, 1.5, -1.5, 1.5),
            Self::BurningShip => (-2.5, 1.5, -2.0, 0.5),
            Self::Sierpinski | Self::KochCurve => (-1.5, 1.5, -1.5, 1.5),
            Self::BarnsleyFern => (-3.0, 3.0, 0.0, 10.0),
            Self::Julia { .. } | Self::Newton { .. } | Self::Nova { .. } => (-2.0, 2.0, -2.0, 2.0),
        };

        Viewport::new(bounds.0, bounds.1, bounds.2, bounds.3)
            .expect("default extents satisfy the viewport invariant")
    }

    /// Default iteration cap. The attractor family is point-density sampling
    /// and needs caps orders of magnitude above the per-pixel families.
    #[must_use]
    pub const fn default_iteration_cap(self) -> u32 {
        match self.family() {
            FractalFamily::EscapeTime | FractalFamily::RootFinding => 100,
            FractalFamily::Attractor => 10_000,
        }
    }

    /// A Julia set with a seed drawn uniformly from `[-1, 1)` on both axes.
    #[must_use]
    pub fn random_julia<R: Rng>(rng: &mut R) -> Self {
        Self::Julia {
            seed: Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
        }
    }
}
