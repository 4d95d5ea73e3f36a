//! # Stamp Request Model
//!
//! The immutable input to one render: texts, shape, canvas dimensions and
//! ink color. Layouts are derived from a request fresh on every render and
//! never stored.

use std::str::FromStr;

use chrono::Datelike;

use crate::error::SelloError;

/// Placeholder drawn when the business name is empty. A stamp never renders
/// with zero visible text.
pub const PLACEHOLDER_TEXT: &str = "SEAL";

/// Default canvas edge in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 200;

/// Stamp outline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StampShape {
    #[default]
    Circle,
    Rectangle,
}

impl FromStr for StampShape {
    type Err = SelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(StampShape::Circle),
            "rectangle" | "rect" => Ok(StampShape::Rectangle),
            other => Err(SelloError::InvalidRequest(format!(
                "unknown stamp shape '{}' (expected 'circle' or 'rectangle')",
                other
            ))),
        }
    }
}

/// Ink color of the stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// The default "official" blue.
    pub const SEAL_BLUE: Rgb = Rgb {
        r: 0x1e,
        g: 0x40,
        b: 0xaf,
    };
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::SEAL_BLUE
    }
}

impl FromStr for Rgb {
    type Err = SelloError;

    /// Parse a six-digit hex color, with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SelloError::InvalidRequest(format!(
                "invalid color '{}' (expected six hex digits, e.g. 1e40af)",
                s
            )));
        }
        // Length checked above, the three parses cannot fail
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap();
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap();
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap();
        Ok(Rgb { r, g, b })
    }
}

/// One stamp render request.
///
/// ## Example
///
/// ```
/// use sello::stamp::{StampRequest, StampShape};
///
/// let request = StampRequest::new("Acme Traders")
///     .place("Mumbai")
///     .shape(StampShape::Circle)
///     .canvas(200, 200);
///
/// assert_eq!(request.display_primary(), "ACME TRADERS");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StampRequest {
    /// Business name, drawn along the top arc (circle) or headline (rectangle).
    pub primary_text: String,
    /// Place text, drawn along the bottom arc or below the headline. Optional.
    pub secondary_text: String,
    pub shape: StampShape,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub color: Rgb,
    /// Issue year stamped in the circle centre. `None` omits it.
    pub year: Option<i32>,
}

impl Default for StampRequest {
    fn default() -> Self {
        Self {
            primary_text: String::new(),
            secondary_text: String::new(),
            shape: StampShape::Circle,
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            color: Rgb::SEAL_BLUE,
            year: None,
        }
    }
}

impl StampRequest {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary_text: primary.into(),
            ..Default::default()
        }
    }

    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.secondary_text = place.into();
        self
    }

    pub fn shape(mut self, shape: StampShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Business name as drawn: trimmed and uppercased, with the placeholder
    /// substituted when empty.
    pub fn display_primary(&self) -> String {
        let trimmed = self.primary_text.trim();
        if trimmed.is_empty() {
            PLACEHOLDER_TEXT.to_string()
        } else {
            trimmed.to_uppercase()
        }
    }

    /// Place text as drawn: trimmed and uppercased. Empty stays empty.
    pub fn display_secondary(&self) -> String {
        self.secondary_text.trim().to_uppercase()
    }
}

/// Current local year, used by callers that want the stamp dated.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
