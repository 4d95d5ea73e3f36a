//! # HTTP Server for the Stamp Generator
//!
//! Provides a web interface for generating invoice seal stamps via HTTP.
//!
//! ## Usage
//!
//! ```bash
//! sello serve --listen 0.0.0.0:8080
//! ```
//!
//! Then open http://localhost:8080 in a browser. The form re-renders the
//! stamp as you type (debounced) and stores the base64 data URI in a hidden
//! field, ready to travel with the rest of an invoice submission.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::SelloError;
use crate::render::StampRenderer;
use crate::stamp::{DEFAULT_CANVAS_SIZE, Rgb, StampRequest, StampShape};

/// Largest canvas edge the server will render.
const MAX_CANVAS_EDGE: u32 = 1024;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

/// Shared state: one renderer behind a lock, so renders never overlap and
/// the canvas buffer is reused across requests.
struct AppState {
    renderer: Mutex<StampRenderer>,
}

/// Form data submitted by the generator page.
#[derive(Debug, Deserialize)]
pub struct StampForm {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub place: String,
    #[serde(default = "default_shape")]
    pub shape: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub color: Option<String>,
    pub year: Option<i32>,
}

fn default_shape() -> String {
    "circle".to_string()
}

/// Response for the render endpoint: what the hidden form field stores.
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use sello::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), sello::SelloError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), SelloError> {
    let state = Arc::new(AppState {
        renderer: Mutex::new(StampRenderer::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE)?),
    });

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/stamp/preview", post(preview_handler))
        .route("/api/stamp/render", post(render_handler))
        .with_state(state);

    println!("Sello stamp generator starting...");
    println!("Listening on: {}", config.listen_addr);
    println!();
    println!(
        "Open http://{}/ in your browser to generate stamps",
        config.listen_addr
    );
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            SelloError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| SelloError::Server(format!("Server error: {}", e)))?;

    Ok(())
}

/// Handle GET / - return the generator page.
async fn index_handler() -> Html<&'static str> {
    Html(GENERATOR_PAGE)
}

/// Handle POST /api/stamp/preview - render and return the PNG directly.
async fn preview_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<StampForm>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let request = build_request(&form).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut renderer = state.renderer.lock().await;
    let png = renderer
        .render(&request)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// Handle POST /api/stamp/render - render and return the data URI that the
/// hidden form field stores.
async fn render_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<StampForm>,
) -> Result<Json<RenderResponse>, (StatusCode, String)> {
    let request = build_request(&form).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut renderer = state.renderer.lock().await;
    let data_uri = renderer
        .render_data_uri(&request)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(RenderResponse {
        data_uri,
        width: request.canvas_width,
        height: request.canvas_height,
    }))
}

/// Build a render request from form data.
fn build_request(form: &StampForm) -> Result<StampRequest, SelloError> {
    let shape: StampShape = form.shape.parse()?;
    let color = match &form.color {
        Some(hex) => hex.parse()?,
        None => Rgb::SEAL_BLUE,
    };

    let width = form.width.unwrap_or(DEFAULT_CANVAS_SIZE);
    let height = form.height.unwrap_or(DEFAULT_CANVAS_SIZE);
    if width == 0 || height == 0 || width > MAX_CANVAS_EDGE || height > MAX_CANVAS_EDGE {
        return Err(SelloError::InvalidRequest(format!(
            "canvas dimensions must be between 1 and {}, got {}x{}",
            MAX_CANVAS_EDGE, width, height
        )));
    }

    Ok(StampRequest {
        primary_text: form.business_name.clone(),
        secondary_text: form.place.clone(),
        shape,
        canvas_width: width,
        canvas_height: height,
        color,
        year: form.year,
    })
}

/// The generator page: form inputs wired to debounced re-renders, an enable
/// toggle that hides the panel and clears the stored image, and a hidden
/// field carrying the data URI.
const GENERATOR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sello Stamp Generator</title>
    <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        background: linear-gradient(135deg, #1e3a8a 0%, #1e40af 100%);
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 20px;
    }

    .container {
        background: white;
        border-radius: 16px;
        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
        max-width: 560px;
        width: 100%;
        padding: 40px;
    }

    h1 { color: #2d3748; font-size: 28px; margin-bottom: 8px; font-weight: 700; }
    .subtitle { color: #718096; font-size: 15px; margin-bottom: 28px; }

    .form-group { margin-bottom: 20px; }

    label {
        display: block;
        color: #4a5568;
        font-weight: 600;
        margin-bottom: 8px;
        font-size: 13px;
        text-transform: uppercase;
        letter-spacing: 0.5px;
    }

    input[type="text"] {
        width: 100%;
        padding: 12px 16px;
        border: 2px solid #e2e8f0;
        border-radius: 8px;
        font-size: 16px;
        transition: border-color 0.3s ease;
    }

    input[type="text"]:focus { outline: none; border-color: #1e40af; }

    .radio-row label { display: inline; text-transform: none; font-weight: 500; margin-right: 16px; }
    .toggle-row label { display: inline; text-transform: none; font-weight: 600; }

    .preview {
        display: flex;
        justify-content: center;
        padding: 16px;
        border: 2px dashed #e2e8f0;
        border-radius: 8px;
        min-height: 216px;
    }

    .hint { color: #a0aec0; font-size: 13px; margin-top: 6px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Sello Stamp Generator</h1>
        <p class="subtitle">Generate an official seal for your invoices</p>

        <div class="form-group toggle-row">
            <input type="checkbox" id="autoGenerate" checked>
            <label for="autoGenerate">Auto-generate stamp</label>
        </div>

        <div id="stampOptions">
            <div class="form-group">
                <label for="businessName">Business name</label>
                <input type="text" id="businessName" placeholder="Acme Traders">
            </div>

            <div class="form-group">
                <label for="place">Place</label>
                <input type="text" id="place" placeholder="Mumbai">
            </div>

            <div class="form-group radio-row">
                <input type="radio" name="shape" id="shapeCircle" value="circle" checked>
                <label for="shapeCircle">Circle</label>
                <input type="radio" name="shape" id="shapeRect" value="rectangle">
                <label for="shapeRect">Rectangle</label>
            </div>

            <div class="preview"><img id="stampPreview" alt=""></div>
            <p class="hint">The stamp is stored as a PNG data URI and submitted with the invoice form.</p>
        </div>

        <input type="hidden" id="stampData" name="stamp_data">
    </div>

    <script>
    (function () {
        const toggle = document.getElementById('autoGenerate');
        const options = document.getElementById('stampOptions');
        const nameInput = document.getElementById('businessName');
        const placeInput = document.getElementById('place');
        const shapeInputs = document.querySelectorAll('input[name="shape"]');
        const preview = document.getElementById('stampPreview');
        const stampData = document.getElementById('stampData');

        function debounce(fn, wait) {
            let timeout;
            return function (...args) {
                clearTimeout(timeout);
                timeout = setTimeout(() => fn(...args), wait);
            };
        }

        async function generate() {
            if (!toggle.checked) return;
            const shape = document.querySelector('input[name="shape"]:checked').value;
            const response = await fetch('/api/stamp/render', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({
                    business_name: nameInput.value,
                    place: placeInput.value,
                    shape: shape,
                    year: new Date().getFullYear()
                })
            });
            if (!response.ok) return;
            const result = await response.json();
            preview.src = result.data_uri;
            stampData.value = result.data_uri;
        }

        toggle.addEventListener('change', function () {
            options.style.display = this.checked ? 'block' : 'none';
            if (this.checked) {
                generate();
            } else {
                stampData.value = '';
                preview.removeAttribute('src');
            }
        });

        nameInput.addEventListener('input', debounce(generate, 300));
        placeInput.addEventListener('input', debounce(generate, 300));
        shapeInputs.forEach(input => input.addEventListener('change', generate));

        generate();
    })();
    </script>
</body>
</html>"#;
