#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Classic,
    Blue,
    Grayscale,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Blue, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Blue => "Blue",
            Self::Grayscale => "Grayscale",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Blue => "blue",
            Self::Grayscale => "grayscale",
        }
    }

    /// Resolves an external identifier; unknown ids fall back to the default
    /// palette rather than failing.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "blue" => Self::Blue,
            "grayscale" => Self::Grayscale,
            _ => Self::default(),
        }
    }
}

impl Default for PaletteKind {
    fn default() -> Self {
        Self::Classic
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
