//! SVG to bitmap rasterization.

use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use image::{ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::card::FALLBACK_FONT_FAMILY;
use crate::error::{CardError, CardResult};

/// Oversampling factor relative to the on-screen card.
pub const PIXEL_RATIO: f32 = 3.0;

/// Solid color painted under the card (`#0B1220`).
pub const FALLBACK_BACKGROUND: [u8; 3] = [0x0B, 0x12, 0x20];

const FALLBACK_REGULAR: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const FALLBACK_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

/// System fonts plus the bundled fallback face.
///
/// `sans-serif` resolves to the bundled family, so card text renders even
/// on hosts with none of the preferred faces installed.
fn font_database() -> Arc<usvg::fontdb::Database> {
    Arc::clone(FONTS.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        let system = db.len();
        db.load_font_data(FALLBACK_REGULAR.to_vec());
        db.load_font_data(FALLBACK_BOLD.to_vec());
        db.set_sans_serif_family(FALLBACK_FONT_FAMILY);
        tracing::debug!(system, faces = db.len(), "Loaded fonts");
        Arc::new(db)
    }))
}

/// How a card is turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    pub pixel_ratio: f32,
    pub background: [u8; 3],
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: PIXEL_RATIO,
            background: FALLBACK_BACKGROUND,
        }
    }
}

/// Rasterize an SVG document.
///
/// The markup is parsed from scratch on every call, so embedded images are
/// always decoded from the current document.
pub fn rasterize(svg: &str, options: &RasterOptions) -> CardResult<RgbaImage> {
    let mut opt = usvg::Options::default();
    opt.fontdb = font_database();

    let tree =
        usvg::Tree::from_str(svg, &opt).map_err(|e| CardError::InvalidSvg(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * options.pixel_ratio).ceil() as u32;
    let height = (size.height() * options.pixel_ratio).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(CardError::PixmapAllocation { width, height })?;
    let [r, g, b] = options.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(options.pixel_ratio, options.pixel_ratio),
        &mut pixmap.as_mut(),
    );

    // Opaque background: premultiplied and straight alpha are identical.
    RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or(CardError::PixmapAllocation { width, height })
}

/// Encode a bitmap as PNG.
pub fn encode_png(image: &RgbaImage) -> CardResult<Vec<u8>> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}
