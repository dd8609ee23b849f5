//! Rasterising and converting figure SVG to PNG and PDF.

use std::path::Path;
use std::sync::Arc;

use resvg::usvg;
use thiserror::Error;
use tiny_skia::{Pixmap, Transform};
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid PNG scale value: {0}")]
    InvalidScale(f32),

    #[error("Failed to parse SVG: {0}")]
    Svg(String),

    #[error("Failed to create a {0}x{1} pixmap")]
    Pixmap(u32, u32),

    #[error("Failed to encode PNG: {0}")]
    Png(String),

    #[error("Failed to convert SVG to PDF: {0}")]
    Pdf(String),
}

/// Directory of extra fonts picked up next to the working directory.
const LOCAL_FONTS: &str = "fonts";

/// Load system and local fonts into `$fontdb` and point the generic
/// sans-serif family at a concrete face.
///
/// resvg and svg2pdf each bring their own fontdb version, so the two
/// `Database` types differ and a plain function cannot take both.
macro_rules! prepare_fontdb {
    ($fontdb:expr) => {{
        let fontdb = $fontdb;
        fontdb.load_system_fonts();

        let local_fonts = Path::new(LOCAL_FONTS);
        if local_fonts.is_dir() {
            fontdb.load_fonts_dir(local_fonts);
        }

        let family = sans_fallback(
            fontdb
                .faces()
                .flat_map(|face| face.families.iter().map(|(family, _)| family.as_str())),
        );
        if let Some(family) = family {
            debug!(%family, "sans-serif fallback");
            fontdb.set_sans_serif_family(family);
        }
    }};
}

/// Render `svg` to PNG bytes, `scale` times its nominal pixel size.
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, ExportError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::InvalidScale(scale));
    }

    let mut opts = usvg::Options::default();
    prepare_fontdb!(opts.fontdb_mut());

    let tree = usvg::Tree::from_str(svg, &opts).map_err(|e| ExportError::Svg(e.to_string()))?;

    let width = (tree.size().width() * scale).ceil() as u32;
    let height = (tree.size().height() * scale).ceil() as u32;
    debug!(width, height, "rasterising figure");

    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Pixmap(width, height))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| ExportError::Png(e.to_string()))
}

/// Convert `svg` to a single-page PDF with text drawn as paths.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, ExportError> {
    let mut fontdb = svg2pdf::usvg::fontdb::Database::new();
    prepare_fontdb!(&mut fontdb);

    let opts = svg2pdf::usvg::Options {
        fontdb: Arc::new(fontdb),
        ..Default::default()
    };
    let tree = svg2pdf::usvg::Tree::from_str(svg, &opts)
        .map_err(|e| ExportError::Svg(e.to_string()))?;

    let options = svg2pdf::ConversionOptions {
        embed_text: false,
        ..Default::default()
    };
    svg2pdf::to_pdf(&tree, options, svg2pdf::PageOptions::default())
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

/// The first family with "sans" in its name, else the first family seen.
/// Figures only ever ask for `sans-serif`.
fn sans_fallback<'a>(families: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut first: Option<&str> = None;
    for family in families {
        if family.to_ascii_lowercase().contains("sans") {
            return Some(family.to_string());
        }
        first.get_or_insert(family);
    }
    first.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20"><rect width="10" height="20" fill="red"/></svg>"#;

    #[test]
    fn sans_fallback_prefers_sans_families() {
        let picked = sans_fallback(["Arial", "DejaVu Serif", "DejaVu Sans"].into_iter());
        assert_eq!(picked.as_deref(), Some("DejaVu Sans"));
    }

    #[test]
    fn sans_fallback_uses_first_family_otherwise() {
        assert_eq!(
            sans_fallback(["Helvetica", "Times"].into_iter()).as_deref(),
            Some("Helvetica")
        );
        assert_eq!(sans_fallback(std::iter::empty()), None);
    }

    #[test]
    fn png_rejects_bad_scale() {
        assert!(matches!(
            svg_to_png("<svg/>", 0.0),
            Err(ExportError::InvalidScale(_))
        ));
        assert!(matches!(
            svg_to_png("<svg/>", f32::NAN),
            Err(ExportError::InvalidScale(_))
        ));
    }

    #[test]
    fn png_has_scaled_size() {
        let png = svg_to_png(SMALL_SVG, 2.0).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        // IHDR width and height, big endian
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 20);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 40);
    }

    #[test]
    fn malformed_svg_is_reported() {
        assert!(matches!(svg_to_png("not svg", 1.0), Err(ExportError::Svg(_))));
        assert!(matches!(svg_to_pdf("not svg"), Err(ExportError::Svg(_))));
    }

    #[test]
    fn pdf_has_pdf_header() {
        let pdf = svg_to_pdf(SMALL_SVG).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
