use crate::core::data::complex::Complex;

/// The closed set of functions the root-finding kernels iterate against.
/// There is deliberately no expression parser; adding a function means adding
/// a variant here together with its derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFunction {
    /// `z³ − 1`
    CubeRootsOfUnity,
    /// `z⁴ − 1`
    QuarticRootsOfUnity,
    /// `sin z / cos z`
    Tangent,
}

impl TargetFunction {
    pub const ALL: &'static [Self] = &[
        Self::CubeRootsOfUnity,
        Self::QuarticRootsOfUnity,
        Self::Tangent,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CubeRootsOfUnity => "z^3 - 1",
            Self::QuarticRootsOfUnity => "z^4 - 1",
            Self::Tangent => "tan z",
        }
    }

    #[must_use]
    pub fn eval(self, z: Complex) -> Complex {
        match self {
            Self::CubeRootsOfUnity => z.powu(3) - Complex::ONE,
            Self::QuarticRootsOfUnity => z.powu(4) - Complex::ONE,
            Self::Tangent => z.sin() / z.cos(),
        }
    }

    #[must_use]
    pub fn derivative(self, z: Complex) -> Complex {
        match self {
            Self::CubeRootsOfUnity => Complex::new(3.0, 0.0) * z.powu(2),
            Self::QuarticRootsOfUnity => Complex::new(4.0, 0.0) * z.powu(3),
            Self::Tangent => {
                let cos = z.cos();
                Complex::ONE / (cos * cos)
            }
        }
    }
}
