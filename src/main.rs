use fractalscope::FractalKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    fractalscope::render_snapshot(FractalKind::Mandelbrot, 800, 600, "output/mandelbrot.ppm")?;

    Ok(())
}
