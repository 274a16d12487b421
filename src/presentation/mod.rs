//! Presentation Layer
//!
//! Output formatting (text/JSON) for run reports.
//!
//! ## Usage
//!
//! ```
//! use minicalc::application::{demo_requests, run_requests};
//! use minicalc::config::OutputFormat;
//! use minicalc::presentation::{create_renderer, RenderOptions};
//!
//! let report = run_requests(demo_requests());
//! let renderer = create_renderer(OutputFormat::Text, RenderOptions::default());
//! let mut out = Vec::new();
//! renderer.render(&report, &mut out, &mut std::io::sink()).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("4 + 5 = 9"));
//! ```

mod number;
pub mod output;

pub use number::format_number;
pub use output::{
    create_renderer, JsonEvent, JsonRenderer, RenderOptions, ReportRenderer, TextRenderer,
};
