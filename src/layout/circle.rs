//! # Circular Stamp Layout
//!
//! Fits the business name along the top inner arc and the place text along
//! the bottom inner arc of a ring, with a decorative star marker centred in
//! each of the two remaining gaps. The font shrinks until everything fits
//! inside the usable share of the circle.

use std::f32::consts::PI;

use crate::draw::{DrawList, DrawOp};
use crate::font::TextMeasure;
use crate::stamp::StampRequest;

use super::arc::{ArcSide, arc_text};

/// Outer ring radius as a fraction of the smaller canvas edge (75px at the
/// default 200px canvas).
pub const OUTER_RADIUS_RATIO: f32 = 0.375;

/// Inner ring radius fraction (52px at 200px).
pub const INNER_RADIUS_RATIO: f32 = 0.26;

/// Candidate font size the fit starts from.
pub const START_FONT_SIZE: f32 = 13.0;

/// Font-fit floor. Below this the layout accepts overflow instead of
/// shrinking further.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Shrink step per fitting iteration.
pub const FONT_STEP: f32 = 0.5;

/// Letter-spacing inflation applied to text spans only, not markers.
/// Tunable presentation parameter.
pub const KERNING: f32 = 1.15;

/// Usable share of the full circle. The missing 0.05π guarantees a minimum
/// visible gap at the seams even for a perfectly tight fit. Tunable
/// presentation parameter.
pub const MAX_SPAN: f32 = 1.95 * PI;

/// Hard cap on fitting iterations. The step/floor pair terminates long
/// before this; the cap holds even for a misbehaving measure.
const MAX_FIT_ITERATIONS: usize = 32;

pub const OUTER_STROKE: f32 = 3.0;
pub const INNER_STROKE: f32 = 2.0;

/// Pixel height of the year text in the ring centre.
const YEAR_FONT_SIZE: f32 = 10.0;

/// A fitted circular layout. Derived fresh per render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleLayout {
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Baseline radius of both text arcs: the ring midline.
    pub text_radius: f32,
    pub font_size: f32,
    /// Angular span of the top (name) arc, radians.
    pub top_span: f32,
    /// Angular span of the bottom (place) arc. Zero when there is no place.
    pub bottom_span: f32,
    /// Gap centres for the two markers: right gap first, then left.
    pub marker_angles: [f32; 2],
}

/// Angular demand of one candidate font size.
struct Spans {
    top: f32,
    bottom: f32,
    marker_block: f32,
}

impl Spans {
    fn total(&self) -> f32 {
        self.top + self.bottom + 2.0 * self.marker_block
    }
}

fn measure_spans(
    name: &str,
    place: &str,
    radius: f32,
    size: f32,
    measure: &dyn TextMeasure,
) -> Spans {
    let top = measure.text_width(name, size) / radius * KERNING;
    let bottom = if place.is_empty() {
        0.0
    } else {
        measure.text_width(place, size) / radius * KERNING
    };
    // One space either side of the marker reserves its breathing room
    let marker = measure.marker_width(size) / radius;
    let space = measure.glyph_width(' ', size) / radius;
    Spans {
        top,
        bottom,
        marker_block: marker + 2.0 * space,
    }
}

impl CircleLayout {
    /// Fit the ring layout for a request.
    ///
    /// Shrinks the font from [`START_FONT_SIZE`] in [`FONT_STEP`] steps
    /// until the name, place and both marker blocks fit in [`MAX_SPAN`],
    /// or the floor is reached. At the floor whatever overflow remains is
    /// accepted; degraded output, not an error.
    pub fn fit(request: &StampRequest, measure: &dyn TextMeasure) -> CircleLayout {
        let min_edge = request.canvas_width.min(request.canvas_height) as f32;
        let outer_radius = min_edge * OUTER_RADIUS_RATIO;
        let inner_radius = min_edge * INNER_RADIUS_RATIO;
        let text_radius = (outer_radius + inner_radius) / 2.0;

        let name = request.display_primary();
        let place = request.display_secondary();

        let mut font_size = START_FONT_SIZE;
        let mut spans = measure_spans(&name, &place, text_radius, font_size, measure);
        for _ in 0..MAX_FIT_ITERATIONS {
            if spans.total() <= MAX_SPAN || font_size <= MIN_FONT_SIZE {
                break;
            }
            font_size = (font_size - FONT_STEP).max(MIN_FONT_SIZE);
            spans = measure_spans(&name, &place, text_radius, font_size, measure);
        }

        // Centre each marker in its residual gap. With unequal arcs the gap
        // midpoints shift by a quarter of the span difference.
        let skew = (spans.top - spans.bottom) / 4.0;

        CircleLayout {
            outer_radius,
            inner_radius,
            text_radius,
            font_size,
            top_span: spans.top,
            bottom_span: spans.bottom,
            marker_angles: [skew, PI - skew],
        }
    }
}

/// Emit the draw ops for a fitted circular stamp.
pub fn emit(request: &StampRequest, layout: &CircleLayout, ops: &mut DrawList) {
    let cx = request.canvas_width as f32 / 2.0;
    let cy = request.canvas_height as f32 / 2.0;

    ops.push(DrawOp::Circle {
        cx,
        cy,
        radius: layout.outer_radius,
        stroke: OUTER_STROKE,
    });
    ops.push(DrawOp::Circle {
        cx,
        cy,
        radius: layout.inner_radius,
        stroke: INNER_STROKE,
    });

    let name = request.display_primary();
    arc_text(
        ops,
        &name,
        cx,
        cy,
        layout.text_radius,
        layout.top_span,
        ArcSide::Top,
        layout.font_size,
    );

    let place = request.display_secondary();
    if !place.is_empty() {
        arc_text(
            ops,
            &place,
            cx,
            cy,
            layout.text_radius,
            layout.bottom_span,
            ArcSide::Bottom,
            layout.font_size,
        );
    }

    for &angle in &layout.marker_angles {
        ops.push(DrawOp::Marker {
            x: cx + layout.text_radius * angle.cos(),
            y: cy + layout.text_radius * angle.sin(),
            size: layout.font_size,
        });
    }

    if let Some(year) = request.year {
        ops.push(DrawOp::Text {
            content: year.to_string(),
            x: cx,
            y: cy,
            size: YEAR_FONT_SIZE,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StampFont;

    const EPS: f32 = 1e-4;

    fn circle_request(name: &str, place: &str) -> StampRequest {
        StampRequest::new(name).place(place)
    }

    #[test]
    fn test_reference_radii_at_default_canvas() {
        let layout = CircleLayout::fit(&circle_request("ACME", ""), &StampFont);
        assert!((layout.outer_radius - 75.0).abs() < EPS);
        assert!((layout.inner_radius - 52.0).abs() < EPS);
        assert!((layout.text_radius - 63.5).abs() < EPS);
    }

    #[test]
    fn test_short_text_keeps_start_size() {
        let layout = CircleLayout::fit(&circle_request("ACME TRADERS", "MUMBAI"), &StampFont);
        assert_eq!(layout.font_size, START_FONT_SIZE);
    }

    #[test]
    fn test_long_text_shrinks() {
        let long = "A".repeat(60);
        let layout = CircleLayout::fit(&circle_request(&long, "MUMBAI"), &StampFont);
        assert!(layout.font_size < START_FONT_SIZE);
        assert!(layout.font_size >= MIN_FONT_SIZE);
    }

    #[test]
    fn test_absurd_text_stops_at_floor() {
        let absurd = "A".repeat(400);
        let layout = CircleLayout::fit(&circle_request(&absurd, "MUMBAI"), &StampFont);
        assert_eq!(layout.font_size, MIN_FONT_SIZE);
        // Overflow accepted at the floor
        assert!(layout.top_span + layout.bottom_span > MAX_SPAN);
    }

    #[test]
    fn test_no_place_means_zero_bottom_span() {
        let layout = CircleLayout::fit(&circle_request("ACME", ""), &StampFont);
        assert_eq!(layout.bottom_span, 0.0);
    }

    #[test]
    fn test_markers_mirror_for_equal_arcs() {
        // Equal-width texts give equal spans, so the gaps sit exactly
        // east and west
        let layout = CircleLayout::fit(&circle_request("AAAA", "BBBB"), &StampFont);
        assert!((layout.top_span - layout.bottom_span).abs() < EPS);
        assert!(layout.marker_angles[0].abs() < EPS);
        assert!((layout.marker_angles[1] - PI).abs() < EPS);
    }

    #[test]
    fn test_marker_skew_follows_span_difference() {
        let layout = CircleLayout::fit(&circle_request("LONG BUSINESS NAME", "X"), &StampFont);
        let skew = (layout.top_span - layout.bottom_span) / 4.0;
        assert!((layout.marker_angles[0] - skew).abs() < EPS);
        assert!((layout.marker_angles[1] - (PI - skew)).abs() < EPS);
    }

    #[test]
    fn test_emit_draws_ring_arcs_and_markers() {
        let request = circle_request("ACME TRADERS", "MUMBAI");
        let layout = CircleLayout::fit(&request, &StampFont);
        let mut ops = DrawList::new();
        emit(&request, &layout, &mut ops);

        let circles = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count();
        let markers = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Marker { .. }))
            .count();
        assert_eq!(circles, 2);
        assert_eq!(markers, 2);
        assert_eq!(ops.glyph_count(), "ACME TRADERS".len() + "MUMBAI".len());
    }

    #[test]
    fn test_emit_year_in_centre() {
        let request = circle_request("ACME", "").year(2026);
        let layout = CircleLayout::fit(&request, &StampFont);
        let mut ops = DrawList::new();
        emit(&request, &layout, &mut ops);

        let year_op = ops.iter().find_map(|op| match op {
            DrawOp::Text { content, x, y, .. } => Some((content.clone(), *x, *y)),
            _ => None,
        });
        let (content, x, y) = year_op.expect("year text op");
        assert_eq!(content, "2026");
        assert_eq!((x, y), (100.0, 100.0));
    }

    #[test]
    fn test_emit_without_place_has_single_arc() {
        let request = circle_request("ACME", "");
        let layout = CircleLayout::fit(&request, &StampFont);
        let mut ops = DrawList::new();
        emit(&request, &layout, &mut ops);
        assert_eq!(ops.glyph_count(), 4);
    }
}
