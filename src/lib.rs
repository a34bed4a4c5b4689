//! # printsection
//!
//! printsection prints one element of the current page in a separate popup
//! window. The element's inner HTML is copied (with the live state of its
//! form controls frozen into the markup) into a freshly written document,
//! together with the page's `<base>` tags, optional inline style rules,
//! optional external stylesheets and, on request, all `<style>` / `<link>`
//! tags of the page. A small script in that document opens the print dialog
//! once it has loaded and closes the window afterwards.
//!
//! # Getting started
//!
//! The page is reached through the [`HostEnvironment`] trait. In the browser
//! (`--features web`, wasm32) that is `web::WebHost`:
//!
//! ```rust,ignore
//! use printsection::*;
//!
//! let host = web::WebHost::from_window().unwrap();
//! let options = PrintOptions::new("invoice")?
//!     .with_print_title("Invoice 2024-113")
//!     .with_use_existing_css(true)
//!     .with_print_delay(250);
//!
//! let mut warnings = Vec::new();
//! PrintAssembler::new().print(&host, &options, &mut warnings);
//! // "Print section with id invoice not found." etc. end up in `warnings`
//! ```
//!
//! The written document can also be produced without any page:
//!
//! ```rust
//! use printsection::{PrintDocument, PrintOptions, PrintStyle, StyleRule};
//!
//! let options = PrintOptions::new("section")
//!     .unwrap()
//!     .with_print_style(PrintStyle::new().with_rule(
//!         StyleRule::new("h1").with_declaration("color", "red"),
//!     ));
//! let doc = PrintDocument::compose(
//!     &options,
//!     None,
//!     "<h1>Hello</h1>".to_string(),
//!     String::new(),
//!     String::new(),
//!     String::new(),
//! );
//! assert!(doc.render().contains("<style> h1{color:red} </style>"));
//! ```
//!
//! ## Known limitations
//!
//! Inline style rules lose every quote character and every `,` turns into
//! `;` (see [`PrintStyle`]). Once the print window is written, its scheduled
//! print / close can't be cancelled from here.

pub mod errors;
pub use errors::PrintError;

/// Per-print configuration
pub mod options;
pub use options::PrintOptions;

/// Inline style rules and external stylesheet links
pub mod style;
pub use style::{PrintStyle, StyleRule, StyleSheetLinks};

/// Traits abstracting the page and the popup window
pub mod host;
pub use host::{HostElement, HostEnvironment, PrintWindow};

/// Form state freezing and section serialization
pub mod snapshot;

/// The document written into the print window
pub mod document;
pub use document::{PrintDocument, PrintTrigger};

mod print;
pub use print::{PrintAssembler, PrintWarnMsg};

/// Browser host on top of web-sys
#[cfg(all(feature = "web", target_family = "wasm"))]
pub mod web;

/// JSON API, exported to JS on wasm
pub mod wasm;
