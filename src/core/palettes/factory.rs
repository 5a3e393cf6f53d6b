use crate::core::data::colour::Colour;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::palette::Palette;

const GRAYSCALE_STOPS: usize = 16;

const CLASSIC_STOPS: [Colour; 16] = [
    Colour { r: 0, g: 0, b: 0 },
    Colour { r: 25, g: 7, b: 26 },
    Colour { r: 9, g: 1, b: 47 },
    Colour { r: 4, g: 4, b: 73 },
    Colour { r: 0, g: 7, b: 100 },
    Colour { r: 12, g: 44, b: 138 },
    Colour { r: 24, g: 82, b: 177 },
    Colour { r: 57, g: 125, b: 209 },
    Colour { r: 134, g: 181, b: 229 },
    Colour { r: 211, g: 236, b: 248 },
    Colour { r: 241, g: 233, b: 191 },
    Colour { r: 248, g: 201, b: 95 },
    Colour { r: 255, g: 170, b: 0 },
    Colour { r: 204, g: 128, b: 0 },
    Colour { r: 153, g: 87, b: 0 },
    Colour { r: 106, g: 52, b: 3 },
];

const BLUE_STOPS: [Colour; 10] = [
    Colour { r: 0, g: 0, b: 0 },
    Colour { r: 8, g: 16, b: 44 },
    Colour { r: 16, g: 32, b: 88 },
    Colour { r: 24, g: 48, b: 132 },
    Colour { r: 32, g: 64, b: 176 },
    Colour { r: 40, g: 80, b: 220 },
    Colour { r: 48, g: 96, b: 255 },
    Colour { r: 96, g: 128, b: 255 },
    Colour { r: 144, g: 160, b: 255 },
    Colour { r: 192, g: 192, b: 255 },
];

fn grayscale_stops() -> Vec<Colour> {
    (0..GRAYSCALE_STOPS)
        .map(|index| {
            let value = (index * 255 / (GRAYSCALE_STOPS - 1)) as u8;
            Colour {
                r: value,
                g: value,
                b: value,
            }
        })
        .collect()
}

#[must_use]
pub fn palette_factory(kind: PaletteKind) -> Palette {
    let stops = match kind {
        PaletteKind::Classic => CLASSIC_STOPS.to_vec(),
        PaletteKind::Blue => BLUE_STOPS.to_vec(),
        PaletteKind::Grayscale => grayscale_stops(),
    };

    Palette::new(stops).expect("built-in palette tables have at least two stops")
}
