//! # Stamp Rendering
//!
//! The I/O side of the pipeline: executes a layout's draw list on a canvas
//! and encodes the result.
//!
//! ```text
//! StampRequest → layout::layout_stamp → DrawList → Canvas → PNG / data URI
//! ```

mod canvas;

pub use canvas::Canvas;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::SelloError;
use crate::font::StampFont;
use crate::layout::layout_stamp;
use crate::stamp::StampRequest;

/// Renders stamps onto an owned, reusable canvas.
///
/// One render owns the canvas for its whole synchronous duration and fully
/// clears it first, so identical requests produce byte-identical output.
///
/// ## Example
///
/// ```
/// use sello::render::StampRenderer;
/// use sello::stamp::StampRequest;
///
/// let request = StampRequest::new("ACME TRADERS").place("MUMBAI");
/// let mut renderer = StampRenderer::for_request(&request)?;
/// let png = renderer.render(&request)?;
/// assert!(!png.is_empty());
/// # Ok::<(), sello::SelloError>(())
/// ```
pub struct StampRenderer {
    canvas: Canvas,
}

impl StampRenderer {
    /// Create a renderer with a canvas of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, SelloError> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
        })
    }

    /// Create a renderer sized for a request.
    pub fn for_request(request: &StampRequest) -> Result<Self, SelloError> {
        Self::new(request.canvas_width, request.canvas_height)
    }

    /// Render one stamp to PNG bytes at the canvas's native dimensions.
    ///
    /// Clears the surface, lays the request out and executes the draw list.
    /// The canvas is recreated if the request asks for different dimensions
    /// than the previous render.
    pub fn render(&mut self, request: &StampRequest) -> Result<Vec<u8>, SelloError> {
        if self.canvas.width() != request.canvas_width
            || self.canvas.height() != request.canvas_height
        {
            self.canvas = Canvas::new(request.canvas_width, request.canvas_height)?;
        }

        self.canvas.clear();
        let ops = layout_stamp(request, &StampFont);
        self.canvas.execute(&ops, request.color);
        self.canvas.to_png()
    }

    /// Render and wrap as a `data:image/png;base64,…` URI, the form the
    /// stamp travels in inside an invoice submission.
    pub fn render_data_uri(&mut self, request: &StampRequest) -> Result<String, SelloError> {
        let png = self.render(request)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
    }
}

/// One-shot convenience: render a request to PNG bytes.
pub fn render(request: &StampRequest) -> Result<Vec<u8>, SelloError> {
    StampRenderer::for_request(request)?.render(request)
}
