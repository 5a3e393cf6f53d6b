use crate::core::actions::ports::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::palettes::palette::Palette;

/// Iteration-count colouring shared by the escape-time and root-finding
/// families: capped pixels are black, everything else is a palette lookup at
/// the normalized count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationColourMap {
    palette: Palette,
    iteration_cap: u32,
}

impl IterationColourMap {
    #[must_use]
    pub fn new(palette: Palette, iteration_cap: u32) -> Self {
        Self {
            palette,
            iteration_cap,
        }
    }
}

impl ColourMap for IterationColourMap {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.iteration_cap {
            return Err(ColourMapError::IterationsExceedCap {
                iterations,
                iteration_cap: self.iteration_cap,
            });
        }

        if iterations == self.iteration_cap {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iterations) / f64::from(self.iteration_cap);
        Ok(self.palette.colour_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palettes::factory::palette_factory;
    use crate::core::palettes::kinds::PaletteKind;

    fn map_with_cap(cap: u32) -> IterationColourMap {
        IterationColourMap::new(palette_factory(PaletteKind::Classic), cap)
    }

    #[test]
    fn test_capped_count_is_black() {
        assert_eq!(map_with_cap(100).map(100).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_zero_count_is_first_stop() {
        let palette = palette_factory(PaletteKind::Classic);

        assert_eq!(map_with_cap(100).map(0).unwrap(), palette.stops()[0]);
    }

    #[test]
    fn test_count_above_cap_is_an_error() {
        assert_eq!(
            map_with_cap(10).map(11),
            Err(ColourMapError::IterationsExceedCap {
                iterations: 11,
                iteration_cap: 10
            })
        );
    }

    #[test]
    fn test_counts_below_cap_walk_the_palette() {
        let map = map_with_cap(16);
        let palette = palette_factory(PaletteKind::Classic);

        // 15/16 of the way lands on the second-to-last stop, never black
        assert_eq!(map.map(15).unwrap(), palette.stops()[14]);
        assert_ne!(map.map(15).unwrap(), Colour::BLACK);
    }
}
