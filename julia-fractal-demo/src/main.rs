mod config;

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use tracing::{error, info, warn};

use julia_fractal_render::{colorize, encode_png, render, ExportMetadata, RenderCancel};

use config::DemoConfig;

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (julia, viewport) = config.request.build()?;
    info!(
        width = viewport.width,
        height = viewport.height,
        zoom = viewport.zoom(),
        c = %julia.c(),
        max_iterations = julia.params().max_iterations,
        "Generating Julia fractal"
    );

    let result = render(&julia, &viewport, &RenderCancel::new())?;
    let image = &result.image;
    info!(
        elapsed_ms = result.elapsed.as_millis(),
        bounded = image.bounded_count(),
        escaped = image.escaped_count(),
        "Fractal ready"
    );

    let rgb = colorize(image, config.tint());
    let png = encode_png(&rgb, &ExportMetadata::from_render(&julia, &viewport))?;

    let mut stdout = std::io::stdout().lock();
    if stdout.is_terminal() {
        warn!(
            bytes = png.len(),
            "stdout is a terminal; pipe the output into an image viewer to display it"
        );
        return Ok(());
    }
    stdout.write_all(&png)?;
    stdout.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the PNG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting julia-demo");

    let config = DemoConfig::load();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
