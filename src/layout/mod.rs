//! # Stamp Layout Engine
//!
//! Pure geometry: turns a [`StampRequest`] into a [`DrawList`] without ever
//! touching a drawing surface, so every fitting rule is testable on its own.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`circle`] | Ring layout with arc text, auto-fit and gap markers |
//! | [`rect`] | Bordered box layout with independent name/place fitting |
//! | [`arc`] | Shared arc-text placement primitive |

pub mod arc;
pub mod circle;
pub mod rect;

pub use circle::CircleLayout;
pub use rect::RectLayout;

use crate::draw::DrawList;
use crate::font::TextMeasure;
use crate::stamp::{StampRequest, StampShape};

/// Compute the draw list for one request.
///
/// Deterministic: identical requests produce identical lists. Layout never
/// fails; impossible fits degrade to the font floor instead.
pub fn layout_stamp(request: &StampRequest, measure: &dyn TextMeasure) -> DrawList {
    let mut ops = DrawList::new();
    match request.shape {
        StampShape::Circle => {
            let layout = CircleLayout::fit(request, measure);
            circle::emit(request, &layout, &mut ops);
        }
        StampShape::Rectangle => {
            let layout = RectLayout::fit(request, measure);
            rect::emit(request, &layout, &mut ops);
        }
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StampFont;

    #[test]
    fn test_layout_is_deterministic() {
        let request = StampRequest::new("ACME TRADERS").place("MUMBAI");
        let a = layout_stamp(&request, &StampFont);
        let b = layout_stamp(&request, &StampFont);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shape_dispatch() {
        let circle = layout_stamp(&StampRequest::new("ACME"), &StampFont);
        assert!(
            circle
                .iter()
                .any(|op| matches!(op, crate::draw::DrawOp::Circle { .. }))
        );

        let rect = layout_stamp(
            &StampRequest::new("ACME").shape(StampShape::Rectangle),
            &StampFont,
        );
        assert!(
            rect.iter()
                .any(|op| matches!(op, crate::draw::DrawOp::Rect { .. }))
        );
    }

    #[test]
    fn test_empty_name_renders_placeholder() {
        let ops = layout_stamp(&StampRequest::new(""), &StampFont);
        let chars: String = ops
            .iter()
            .filter_map(|op| match op {
                crate::draw::DrawOp::Glyph { ch, .. } => Some(*ch),
                _ => None,
            })
            .collect();
        assert_eq!(chars, "SEAL");
    }
}
