//! # Rectangular Stamp Layout
//!
//! A double-line bordered box with the business name on one line and the
//! place text on one or two lines below it. Name and place shrink or wrap
//! independently to fit the usable width.

use crate::draw::{DrawList, DrawOp};
use crate::font::TextMeasure;
use crate::stamp::StampRequest;

/// Box width as a fraction of the canvas width (160px at the default 200px).
pub const BOX_WIDTH_RATIO: f32 = 0.8;

/// Box height fraction (90px at 200px).
pub const BOX_HEIGHT_RATIO: f32 = 0.45;

/// Candidate size the name fit starts from.
pub const NAME_START_SIZE: f32 = 18.0;

/// Name font floor. Below this overflow is accepted.
pub const NAME_MIN_SIZE: f32 = 10.0;

const NAME_STEP: f32 = 1.0;

/// The place line never shrinks; it wraps to two lines instead.
pub const PLACE_FONT_SIZE: f32 = 12.0;

/// Horizontal padding between the border and the text.
const H_PADDING: f32 = 12.0;

/// Inset of the inner border line.
const BORDER_INSET: f32 = 4.0;

const OUTER_STROKE: f32 = 2.0;
const INNER_STROKE: f32 = 1.0;

/// Vertical offset of the name baseline from box centre.
const NAME_OFFSET_Y: f32 = -14.0;

/// Single place line offset from box centre.
const PLACE_SINGLE_OFFSET_Y: f32 = 14.0;

/// Two-line place offsets from box centre.
const PLACE_LINE_OFFSETS_Y: [f32; 2] = [8.0, 24.0];

const MAX_FIT_ITERATIONS: usize = 32;

/// A fitted rectangular layout. Derived fresh per render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RectLayout {
    pub box_width: f32,
    pub box_height: f32,
    pub name_font_size: f32,
    pub place_font_size: f32,
    /// One or two lines. An empty place stays as one empty line, which
    /// renders as a harmless no-op.
    pub place_lines: Vec<String>,
}

impl RectLayout {
    /// Fit the box layout for a request.
    pub fn fit(request: &StampRequest, measure: &dyn TextMeasure) -> RectLayout {
        let box_width = request.canvas_width as f32 * BOX_WIDTH_RATIO;
        let box_height = request.canvas_height as f32 * BOX_HEIGHT_RATIO;
        let usable_width = box_width - 2.0 * H_PADDING;

        let name = request.display_primary();
        let mut name_font_size = NAME_START_SIZE;
        for _ in 0..MAX_FIT_ITERATIONS {
            if measure.text_width(&name, name_font_size) <= usable_width
                || name_font_size <= NAME_MIN_SIZE
            {
                break;
            }
            name_font_size = (name_font_size - NAME_STEP).max(NAME_MIN_SIZE);
        }

        let place = request.display_secondary();
        let place_lines =
            if !place.is_empty() && measure.text_width(&place, PLACE_FONT_SIZE) > usable_width {
                split_at_word_midpoint(&place)
            } else {
                vec![place]
            };

        RectLayout {
            box_width,
            box_height,
            name_font_size,
            place_font_size: PLACE_FONT_SIZE,
            place_lines,
        }
    }
}

/// Split at the word-count midpoint: the first line takes floor(n/2) words,
/// the second the remainder. Single words cannot wrap.
fn split_at_word_midpoint(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < 2 {
        return vec![text.to_string()];
    }
    let mid = words.len() / 2;
    vec![words[..mid].join(" "), words[mid..].join(" ")]
}

/// Emit the draw ops for a fitted rectangular stamp.
pub fn emit(request: &StampRequest, layout: &RectLayout, ops: &mut DrawList) {
    let cx = request.canvas_width as f32 / 2.0;
    let cy = request.canvas_height as f32 / 2.0;
    let x = cx - layout.box_width / 2.0;
    let y = cy - layout.box_height / 2.0;

    ops.push(DrawOp::Rect {
        x,
        y,
        width: layout.box_width,
        height: layout.box_height,
        stroke: OUTER_STROKE,
    });
    ops.push(DrawOp::Rect {
        x: x + BORDER_INSET,
        y: y + BORDER_INSET,
        width: layout.box_width - 2.0 * BORDER_INSET,
        height: layout.box_height - 2.0 * BORDER_INSET,
        stroke: INNER_STROKE,
    });

    ops.push(DrawOp::Text {
        content: request.display_primary(),
        x: cx,
        y: cy + NAME_OFFSET_Y,
        size: layout.name_font_size,
    });

    match layout.place_lines.as_slice() {
        [line] => ops.push(DrawOp::Text {
            content: line.clone(),
            x: cx,
            y: cy + PLACE_SINGLE_OFFSET_Y,
            size: layout.place_font_size,
        }),
        lines => {
            for (line, offset) in lines.iter().zip(PLACE_LINE_OFFSETS_Y) {
                ops.push(DrawOp::Text {
                    content: line.clone(),
                    x: cx,
                    y: cy + offset,
                    size: layout.place_font_size,
                });
            }
        }
    }
}
