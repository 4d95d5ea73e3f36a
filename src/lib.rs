//! # Sello - Official Seal Stamp Generator
//!
//! Sello renders circular and rectangular "official seal" graphics for
//! printable invoices. Arbitrary-length business-name and place text is fit
//! around a ring (or inside a bordered box) with auto-shrinking font sizes,
//! symmetric decorative markers and upright character orientation, then
//! exported as a PNG the invoice form can carry as a base64 data URI.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sello::render::StampRenderer;
//! use sello::stamp::{StampRequest, StampShape};
//!
//! let request = StampRequest::new("Acme Traders")
//!     .place("Mumbai")
//!     .shape(StampShape::Circle);
//!
//! let mut renderer = StampRenderer::for_request(&request)?;
//! let png = renderer.render(&request)?;
//! std::fs::write("stamp.png", png)?;
//! # Ok::<(), sello::SelloError>(())
//! ```
//!
//! ## Pipeline
//!
//! Layout is pure geometry and never touches a drawing surface; the
//! rendering backend consumes its draw commands:
//!
//! ```text
//! StampRequest → layout (DrawList) → render::Canvas → PNG / data URI
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`stamp`] | Request model: texts, shape, canvas, color |
//! | [`layout`] | Fitting algorithms producing draw commands |
//! | [`draw`] | The draw-command list itself |
//! | [`font`] | Text measurement and Spleen glyph bitmaps |
//! | [`render`] | Canvas backend and PNG/data-URI encoding |
//! | [`debounce`] | Trailing-edge debounce for reactive re-renders |
//! | [`server`] | HTTP generator with a browser form |
//! | [`error`] | Error types |

pub mod debounce;
pub mod draw;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;
pub mod server;
pub mod stamp;

// Re-exports for convenience
pub use error::SelloError;
pub use render::StampRenderer;
pub use stamp::{Rgb, StampRequest, StampShape};
