use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the buffer as binary PPM. The format carries no alpha channel, so
/// the A byte of every RGBA pixel is dropped.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    let mut out = BufWriter::new(file);

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;

    for pixel in buffer.bytes().chunks_exact(BYTES_PER_PIXEL) {
        out.write_all(&pixel[..3])?;
    }

    out.flush()
}
