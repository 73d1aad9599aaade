//! In-memory PNG encoding with embedded metadata (tEXt chunks).

use image::RgbImage;
use tracing::debug;

use julia_fractal_core::{Julia, Viewport};

/// Metadata to embed in an encoded PNG as tEXt chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMetadata {
    pub c_re: f64,
    pub c_im: f64,
    pub zoom: f64,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub width: u32,
    pub height: u32,
}

impl ExportMetadata {
    pub fn from_render(julia: &Julia, viewport: &Viewport) -> Self {
        Self {
            c_re: julia.c().re,
            c_im: julia.c().im,
            zoom: viewport.zoom(),
            max_iterations: julia.params().max_iterations,
            escape_radius: julia.params().escape_radius,
            width: viewport.width,
            height: viewport.height,
        }
    }

    fn description(&self) -> String {
        format!(
            "Julia set c = {} {:+}i, zoom {}, {} iterations",
            self.c_re, self.c_im, self.zoom, self.max_iterations
        )
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("JuliaFractal.C_Re", self.c_re.to_string()),
            ("JuliaFractal.C_Im", self.c_im.to_string()),
            ("JuliaFractal.Zoom", self.zoom.to_string()),
            ("JuliaFractal.MaxIterations", self.max_iterations.to_string()),
            ("JuliaFractal.EscapeRadius", self.escape_radius.to_string()),
            (
                "JuliaFractal.Resolution",
                format!("{}x{}", self.width, self.height),
            ),
        ]
    }
}

/// Encode an RGB image as PNG bytes with embedded fractal metadata.
///
/// Uses the `png` crate directly (rather than `image`) to inject custom
/// tEXt chunks. Nothing touches the filesystem.
pub fn encode_png(image: &RgbImage, metadata: &ExportMetadata) -> crate::Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();

    let mut encoder = png::Encoder::new(&mut bytes, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "julia-fractal".to_string())?;
    encoder.add_text_chunk("Description".to_string(), metadata.description())?;
    for (key, value) in metadata.pairs() {
        encoder.add_text_chunk(key.to_string(), value)?;
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;

    debug!(width, height, bytes = bytes.len(), "Encoded PNG");
    Ok(bytes)
}
