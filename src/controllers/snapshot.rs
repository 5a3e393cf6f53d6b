use crate::core::actions::render_frame::render_frame;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::kinds::FractalKind;
use crate::storage::write_ppm::write_ppm;
use std::path::Path;
use std::time::Instant;

/// Renders one frame at the kind's default view and writes it as a PPM file.
///
/// A development utility, not a display surface: it exercises the full
/// kernel pipeline without any interactive session.
pub fn render_snapshot(
    kind: FractalKind,
    width: u32,
    height: u32,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = RenderRequest::new(kind, width, height);

    println!("Rendering {}...", kind.display_name());
    println!("Image size: {}x{}", width, height);
    println!("Iteration cap: {}", request.iteration_cap);

    let started = Instant::now();
    let buffer = render_frame(&request)?;
    println!("Duration:   {:?}", started.elapsed());

    if let Some(parent) = filepath.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    write_ppm(&buffer, &filepath)?;
    println!("Saved to {}", filepath.as_ref().display());

    Ok(())
}
