//! Arc text placement.
//!
//! The single routine both ring arcs go through. Using one stepping rule for
//! top and bottom is what keeps the residual gaps symmetric, so the marker
//! centring in [`super::circle`] can assume it.

use std::f32::consts::FRAC_PI_2;

use crate::draw::{DrawList, DrawOp};

/// Which half of the ring the text sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcSide {
    Top,
    Bottom,
}

/// Place `text` character by character along a circular arc of `span`
/// radians at `radius` around (cx, cy).
///
/// Characters sit at equal angular increments, each rotated so its baseline
/// stays tangent to the circle. Top arcs are centred on north (-90°) and
/// walk clockwise; bottom arcs are centred on south (+90°) and walk the
/// angle backward, since walking forward under the circle would come out
/// upside-down and reversed.
pub fn arc_text(
    ops: &mut DrawList,
    text: &str,
    cx: f32,
    cy: f32,
    radius: f32,
    span: f32,
    side: ArcSide,
    font_size: f32,
) {
    let count = text.chars().count().max(1);
    let step = span / count as f32;

    for (i, ch) in text.chars().enumerate() {
        let slot = i as f32 + 0.5;
        let (angle, rotation) = match side {
            ArcSide::Top => {
                let a = -FRAC_PI_2 - span / 2.0 + slot * step;
                (a, a + FRAC_PI_2)
            }
            ArcSide::Bottom => {
                let a = FRAC_PI_2 + span / 2.0 - slot * step;
                (a, a - FRAC_PI_2)
            }
        };

        ops.push(DrawOp::Glyph {
            ch,
            x: cx + radius * angle.cos(),
            y: cy + radius * angle.sin(),
            size: font_size,
            rotation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-4;

    fn glyphs(ops: &DrawList) -> Vec<(char, f32, f32, f32)> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Glyph {
                    ch, x, y, rotation, ..
                } => Some((*ch, *x, *y, *rotation)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_char_sits_on_arc_centre() {
        let mut ops = DrawList::new();
        arc_text(&mut ops, "A", 100.0, 100.0, 60.0, 1.0, ArcSide::Top, 13.0);
        let g = glyphs(&ops);
        assert_eq!(g.len(), 1);
        // Centred on north: straight above the centre, upright
        assert!((g[0].1 - 100.0).abs() < EPS);
        assert!((g[0].2 - 40.0).abs() < EPS);
        assert!(g[0].3.abs() < EPS);
    }

    #[test]
    fn test_top_reads_clockwise() {
        let mut ops = DrawList::new();
        arc_text(&mut ops, "AB", 0.0, 0.0, 60.0, 1.0, ArcSide::Top, 13.0);
        let g = glyphs(&ops);
        // First char left of the seam, second right of it
        assert!(g[0].1 < 0.0);
        assert!(g[1].1 > 0.0);
    }

    #[test]
    fn test_bottom_reads_left_to_right_on_screen() {
        let mut ops = DrawList::new();
        arc_text(&mut ops, "AB", 0.0, 0.0, 60.0, 1.0, ArcSide::Bottom, 13.0);
        let g = glyphs(&ops);
        // Both below the centre, first on the left
        assert!(g[0].2 > 0.0 && g[1].2 > 0.0);
        assert!(g[0].1 < g[1].1);
    }

    #[test]
    fn test_bottom_glyphs_stay_upright() {
        let mut ops = DrawList::new();
        arc_text(&mut ops, "ABC", 0.0, 0.0, 60.0, 0.9, ArcSide::Bottom, 13.0);
        for (_, _, _, rotation) in glyphs(&ops) {
            // Near zero, never the naive PI-flipped orientation
            assert!(rotation.abs() < PI / 2.0);
        }
    }

    #[test]
    fn test_equal_angular_steps() {
        let mut ops = DrawList::new();
        let span = 1.2f32;
        arc_text(&mut ops, "ABCD", 0.0, 0.0, 60.0, span, ArcSide::Top, 13.0);
        let g = glyphs(&ops);
        // Rotation difference between consecutive glyphs equals the step
        let step = span / 4.0;
        for pair in g.windows(2) {
            assert!(((pair[1].3 - pair[0].3) - step).abs() < EPS);
        }
    }

    #[test]
    fn test_empty_text_no_ops() {
        let mut ops = DrawList::new();
        arc_text(&mut ops, "", 0.0, 0.0, 60.0, 1.0, ArcSide::Top, 13.0);
        assert!(ops.is_empty());
    }
}
