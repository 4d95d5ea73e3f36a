//! RGBA drawing surface.
//!
//! Executes a [`DrawList`] onto a pixel buffer: stroked outlines, rotated
//! glyph blitting and the procedural star marker. All drawing is opaque
//! single-color ink on a transparent background.

use std::f32::consts::{PI, TAU};
use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::draw::{DrawList, DrawOp};
use crate::error::SelloError;
use crate::font::{StampFont, TextMeasure};
use crate::stamp::Rgb;

/// The drawing surface one render owns for its whole duration.
pub struct Canvas {
    pixels: RgbaImage,
    font: StampFont,
}

impl Canvas {
    /// Create a canvas. Zero dimensions are a configuration error; the
    /// caller must supply a valid drawing surface.
    pub fn new(width: u32, height: u32) -> Result<Self, SelloError> {
        if width == 0 || height == 0 {
            return Err(SelloError::Canvas(format!(
                "canvas dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            pixels: RgbaImage::new(width, height),
            font: StampFont,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Reset every pixel to transparent. Called at the start of each render
    /// so nothing survives from the previous one.
    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    /// Draw a full list in one ink color.
    pub fn execute(&mut self, ops: &DrawList, color: Rgb) {
        let ink = Rgba([color.r, color.g, color.b, 255]);
        for op in ops {
            match op {
                DrawOp::Circle {
                    cx,
                    cy,
                    radius,
                    stroke,
                } => self.stroke_circle(*cx, *cy, *radius, *stroke, ink),
                DrawOp::Rect {
                    x,
                    y,
                    width,
                    height,
                    stroke,
                } => self.stroke_rect(*x, *y, *width, *height, *stroke, ink),
                DrawOp::Glyph {
                    ch,
                    x,
                    y,
                    size,
                    rotation,
                } => self.draw_glyph(*ch, *x, *y, *size, *rotation, ink),
                DrawOp::Text {
                    content,
                    x,
                    y,
                    size,
                } => self.draw_text(content, *x, *y, *size, ink),
                DrawOp::Marker { x, y, size } => self.draw_marker(*x, *y, *size, ink),
            }
        }
    }

    /// Encode the buffer as PNG at its native pixel dimensions.
    pub fn to_png(&self) -> Result<Vec<u8>, SelloError> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| SelloError::Image(format!("Failed to encode PNG: {}", e)))?;
        Ok(bytes)
    }

    fn set_pixel(&mut self, x: i32, y: i32, ink: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.pixels.put_pixel(x as u32, y as u32, ink);
        }
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke: f32, ink: Rgba<u8>) {
        let half = stroke / 2.0;
        let reach = radius + half;
        let min_x = (cx - reach).floor() as i32;
        let max_x = (cx + reach).ceil() as i32;
        let min_y = (cy - reach).floor() as i32;
        let max_y = (cy + reach).ceil() as i32;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if (dist - radius).abs() <= half {
                    self.set_pixel(px, py, ink);
                }
            }
        }
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: f32, ink: Rgba<u8>) {
        self.fill_rect(x, y, width, stroke, ink);
        self.fill_rect(x, y + height - stroke, width, stroke, ink);
        self.fill_rect(x, y, stroke, height, ink);
        self.fill_rect(x + width - stroke, y, stroke, height, ink);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, ink: Rgba<u8>) {
        let min_x = x.round() as i32;
        let min_y = y.round() as i32;
        let max_x = (x + width).round() as i32;
        let max_y = (y + height).round() as i32;
        for py in min_y..max_y {
            for px in min_x..max_x {
                self.set_pixel(px, py, ink);
            }
        }
    }

    /// Blit one glyph centred at (x, y), rotated clockwise by `rotation`.
    ///
    /// Walks the rotated bounding box and inverse-maps each destination
    /// pixel into glyph space, so the blit leaves no holes at any angle.
    fn draw_glyph(&mut self, ch: char, x: f32, y: f32, size: f32, rotation: f32, ink: Rgba<u8>) {
        let bitmap = self.font.glyph_bitmap(ch, size.round() as usize);
        let half_w = bitmap.width as f32 / 2.0;
        let half_h = bitmap.height as f32 / 2.0;
        let reach = (half_w * half_w + half_h * half_h).sqrt().ceil() as i32;
        let (sin, cos) = rotation.sin_cos();

        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let fx = dx as f32;
                let fy = dy as f32;
                let gx = fx * cos + fy * sin + half_w;
                let gy = -fx * sin + fy * cos + half_h;
                if gx < 0.0 || gy < 0.0 {
                    continue;
                }
                let (gx, gy) = (gx as usize, gy as usize);
                if gx >= bitmap.width || gy >= bitmap.height {
                    continue;
                }
                if bitmap.data[gy * bitmap.width + gx] != 0 {
                    self.set_pixel((x + fx).round() as i32, (y + fy).round() as i32, ink);
                }
            }
        }
    }

    /// Draw a horizontal run of text centred at (x, y). Empty content draws
    /// nothing.
    fn draw_text(&mut self, content: &str, x: f32, y: f32, size: f32, ink: Rgba<u8>) {
        let total = self.font.text_width(content, size);
        let mut pen = x - total / 2.0;
        for ch in content.chars() {
            let advance = self.font.glyph_width(ch, size);
            self.draw_glyph(ch, pen + advance / 2.0, y, size, 0.0, ink);
            pen += advance;
        }
    }

    fn draw_marker(&mut self, x: f32, y: f32, size: f32, ink: Rgba<u8>) {
        let outer_r = size / 2.0;
        let inner_r = outer_r * 0.382; // Golden ratio approximation
        let reach = outer_r.ceil() as i32;

        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if is_inside_star(dx as f32, dy as f32, outer_r, inner_r) {
                    self.set_pixel(x.round() as i32 + dx, y.round() as i32 + dy, ink);
                }
            }
        }
    }
}

/// Check if a point (relative to center) is inside a 5-pointed star.
///
/// The star has 5 outer points and 5 inner valleys; the edge radius is
/// interpolated by angle within each sector.
fn is_inside_star(dx: f32, dy: f32, outer_r: f32, inner_r: f32) -> bool {
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > outer_r {
        return false;
    }

    // Angle with a star point at top (negative y direction)
    let angle = dy.atan2(dx);
    let sector_angle = TAU / 5.0;
    let adjusted = (angle + PI / 2.0).rem_euclid(TAU);
    let local_angle = adjusted.rem_euclid(sector_angle);

    let half = sector_angle / 2.0;
    let edge_radius = if local_angle < half {
        let t = local_angle / half;
        outer_r * (1.0 - t) + inner_r * t
    } else {
        let t = (local_angle - half) / half;
        inner_r * (1.0 - t) + outer_r * t
    };

    dist <= edge_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb = Rgb {
        r: 0x1e,
        g: 0x40,
        b: 0xaf,
    };

    fn ink_count(canvas: &Canvas) -> usize {
        canvas.pixels.pixels().filter(|p| p.0[3] != 0).count()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Canvas::new(0, 200).is_err());
        assert!(Canvas::new(200, 0).is_err());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut canvas = Canvas::new(50, 50).unwrap();
        let mut ops = DrawList::new();
        ops.push(DrawOp::Marker {
            x: 25.0,
            y: 25.0,
            size: 20.0,
        });
        canvas.execute(&ops, INK);
        assert!(ink_count(&canvas) > 0);

        canvas.clear();
        assert_eq!(ink_count(&canvas), 0);
    }

    #[test]
    fn test_circle_stroke_on_ring() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        let mut ops = DrawList::new();
        ops.push(DrawOp::Circle {
            cx: 50.0,
            cy: 50.0,
            radius: 30.0,
            stroke: 3.0,
        });
        canvas.execute(&ops, INK);

        // On the ring at the east point, not at the centre
        assert_ne!(canvas.pixels.get_pixel(80, 50).0[3], 0);
        assert_eq!(canvas.pixels.get_pixel(50, 50).0[3], 0);
    }

    #[test]
    fn test_rect_outline_not_filled() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        let mut ops = DrawList::new();
        ops.push(DrawOp::Rect {
            x: 10.0,
            y: 10.0,
            width: 80.0,
            height: 60.0,
            stroke: 2.0,
        });
        canvas.execute(&ops, INK);

        assert_ne!(canvas.pixels.get_pixel(50, 10).0[3], 0);
        assert_eq!(canvas.pixels.get_pixel(50, 40).0[3], 0);
    }

    #[test]
    fn test_glyph_leaves_ink() {
        let mut canvas = Canvas::new(60, 60).unwrap();
        let mut ops = DrawList::new();
        ops.push(DrawOp::Glyph {
            ch: 'A',
            x: 30.0,
            y: 30.0,
            size: 13.0,
            rotation: 0.7,
        });
        canvas.execute(&ops, INK);
        assert!(ink_count(&canvas) > 0);
    }

    #[test]
    fn test_rotated_glyph_same_ink_footprint() {
        // A 180° rotation relocates pixels but must not lose the glyph
        let mut upright = Canvas::new(60, 60).unwrap();
        let mut flipped = Canvas::new(60, 60).unwrap();
        for (canvas, rotation) in [(&mut upright, 0.0f32), (&mut flipped, PI)] {
            let mut ops = DrawList::new();
            ops.push(DrawOp::Glyph {
                ch: 'E',
                x: 30.0,
                y: 30.0,
                size: 16.0,
                rotation,
            });
            canvas.execute(&ops, INK);
        }
        let a = ink_count(&upright);
        let b = ink_count(&flipped);
        assert!(a > 0);
        // Nearest-neighbour resampling moves a few edge pixels at most
        assert!((a as i64 - b as i64).unsigned_abs() as usize <= a / 4);
    }

    #[test]
    fn test_empty_text_is_noop() {
        let mut canvas = Canvas::new(60, 60).unwrap();
        let mut ops = DrawList::new();
        ops.push(DrawOp::Text {
            content: String::new(),
            x: 30.0,
            y: 30.0,
            size: 12.0,
        });
        canvas.execute(&ops, INK);
        assert_eq!(ink_count(&canvas), 0);
    }

    #[test]
    fn test_marker_centre_is_filled() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        let mut ops = DrawList::new();
        ops.push(DrawOp::Marker {
            x: 20.0,
            y: 20.0,
            size: 16.0,
        });
        canvas.execute(&ops, INK);
        assert_ne!(canvas.pixels.get_pixel(20, 20).0[3], 0);
        // Corner of the marker box stays empty
        assert_eq!(canvas.pixels.get_pixel(13, 13).0[3], 0);
    }

    #[test]
    fn test_star_point_up() {
        // Directly above the centre is inside, the same distance at the
        // inter-point angle is not
        assert!(is_inside_star(0.0, -7.0, 8.0, 3.0));
        assert!(!is_inside_star(7.0, 0.1, 8.0, 3.0));
    }

    #[test]
    fn test_png_roundtrip() {
        let mut canvas = Canvas::new(30, 20).unwrap();
        let mut ops = DrawList::new();
        ops.push(DrawOp::Marker {
            x: 15.0,
            y: 10.0,
            size: 10.0,
        });
        canvas.execute(&ops, INK);

        let png = canvas.to_png().unwrap();
        assert!(!png.is_empty());
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 30);
        assert_eq!(decoded.height(), 20);
    }
}
