//! # Sello CLI
//!
//! Command-line interface for the stamp generator.
//!
//! ## Usage
//!
//! ```bash
//! # Render a circular stamp to stamp.png
//! sello render "Acme Traders" --place Mumbai
//!
//! # Rectangular stamp with custom canvas and color
//! sello render "Acme Traders" --shape rectangle --width 240 --height 200 --color 8b0000
//!
//! # Print the base64 data URI instead of writing a file
//! sello render "Acme Traders" --data-uri
//!
//! # Start the web generator
//! sello serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sello::{
    SelloError,
    render::StampRenderer,
    server::{self, ServerConfig},
    stamp::{self, Rgb, StampRequest, StampShape},
};

/// Sello - official seal stamp generator
#[derive(Parser, Debug)]
#[command(name = "sello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a stamp to a PNG file or data URI
    Render {
        /// Business name (drawn along the top arc, or as the box headline)
        name: String,

        /// Place text (bottom arc / second box line)
        #[arg(long, default_value = "")]
        place: String,

        /// Stamp shape: circle or rectangle
        #[arg(long, default_value = "circle")]
        shape: String,

        /// Canvas width in pixels
        #[arg(long, default_value_t = stamp::DEFAULT_CANVAS_SIZE)]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = stamp::DEFAULT_CANVAS_SIZE)]
        height: u32,

        /// Ink color as six hex digits
        #[arg(long, default_value = "1e40af")]
        color: String,

        /// Year stamped in the circle centre (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Omit the year entirely
        #[arg(long)]
        no_year: bool,

        /// Output file
        #[arg(long, value_name = "FILE", default_value = "stamp.png")]
        out: PathBuf,

        /// Print the base64 data URI to stdout instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },

    /// Start the HTTP stamp generator
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SelloError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            name,
            place,
            shape,
            width,
            height,
            color,
            year,
            no_year,
            out,
            data_uri,
        } => {
            let shape: StampShape = shape.parse()?;
            let color: Rgb = color.parse()?;

            let mut request = StampRequest::new(name)
                .place(place)
                .shape(shape)
                .canvas(width, height)
                .color(color);
            if !no_year {
                request = request.year(year.unwrap_or_else(stamp::current_year));
            }

            let mut renderer = StampRenderer::for_request(&request)?;
            if data_uri {
                println!("{}", renderer.render_data_uri(&request)?);
            } else {
                let png = renderer.render(&request)?;
                std::fs::write(&out, png)?;
                println!("Saved to {}", out.display());
            }
        }

        Commands::Serve { listen } => {
            let config = ServerConfig {
                listen_addr: listen,
            };
            tokio::runtime::Runtime::new()?.block_on(server::serve(config))?;
        }
    }

    Ok(())
}
