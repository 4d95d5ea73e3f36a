//! # Font Metrics and Glyph Generation
//!
//! Text measurement and bitmap glyphs on the Spleen font family.
//!
//! Layout code measures through the [`TextMeasure`] trait so the fitting
//! algorithms stay independent of any particular font; per-glyph advances
//! are queried individually and monospacing is never assumed.

use spleen_font::{FONT_6X12, FONT_12X24, PSF2Font};

/// Spleen glyphs are exactly half as wide as they are tall.
const GLYPH_ASPECT: f32 = 0.5;

/// Below this pixel height the small Spleen master is scaled instead of the
/// large one, which keeps strokes legible at ring font sizes.
const SMALL_MASTER_THRESHOLD: f32 = 12.0;

/// Text measurement primitive used by the layout engine.
pub trait TextMeasure {
    /// Advance width of one glyph at the given pixel height.
    fn glyph_width(&self, ch: char, size_px: f32) -> f32;

    /// Advance width of a whole string: the sum of its glyph advances.
    fn text_width(&self, text: &str, size_px: f32) -> f32 {
        text.chars().map(|ch| self.glyph_width(ch, size_px)).sum()
    }

    /// Width of the decorative star marker at the given pixel height.
    /// The marker is square, so it is as wide as the font is tall.
    fn marker_width(&self, size_px: f32) -> f32 {
        size_px
    }
}

/// A glyph rasterized at a target pixel height.
///
/// `data` is row-major, one byte per pixel, 0 (off) or 1 (on).
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

/// Bitmap font backed by the Spleen PSF2 masters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StampFont;

impl TextMeasure for StampFont {
    fn glyph_width(&self, _ch: char, size_px: f32) -> f32 {
        size_px * GLYPH_ASPECT
    }
}

impl StampFont {
    /// Rasterize a character at the given pixel height.
    ///
    /// Picks the closer Spleen master (6x12 below 12px, 12x24 at or above)
    /// and scales it to the target cell with nearest-neighbour sampling.
    pub fn glyph_bitmap(&self, ch: char, height_px: usize) -> GlyphBitmap {
        let height = height_px.max(1);
        let width = ((height as f32 * GLYPH_ASPECT).round() as usize).max(1);
        let mut data = vec![0u8; width * height];

        let (master, master_w, master_h) = if (height as f32) < SMALL_MASTER_THRESHOLD {
            (FONT_6X12, 6usize, 12usize)
        } else {
            (FONT_12X24, 12usize, 24usize)
        };

        let mut spleen = PSF2Font::new(master).unwrap();
        let utf8 = ch.to_string();

        if let Some(glyph) = spleen.glyph_for_utf8(utf8.as_bytes()) {
            let mut src = vec![0u8; master_w * master_h];
            for (row_y, row) in glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < master_h && col_x < master_w {
                        src[row_y * master_w + col_x] = if on { 1 } else { 0 };
                    }
                }
            }
            scale_bitmap(&src, master_w, master_h, &mut data, width, height);
        } else {
            // Unknown character: draw a box outline
            draw_box(&mut data, width, height);
        }

        GlyphBitmap {
            width,
            height,
            data,
        }
    }
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(src: &[u8], src_w: usize, src_h: usize, dst: &mut [u8], dst_w: usize, dst_h: usize) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            let src_idx = sy * src_w + sx;
            let dst_idx = dy * dst_w + dx;
            if src_idx < src.len() && dst_idx < dst.len() {
                dst[dst_idx] = src[src_idx];
            }
        }
    }
}

/// Draw a box outline in the glyph buffer.
fn draw_box(glyph: &mut [u8], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = 1;
        glyph[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        glyph[y * width] = 1;
        glyph[y * width + width - 1] = 1;
    }
}
