//! Per-invocation print configuration.

use serde_derive::{Deserialize, Serialize};

use crate::errors::PrintError;
use crate::style::{PrintStyle, StyleSheetLinks};

/// Everything one `PrintAssembler::print` call needs to know.
///
/// Built once per print, either with [`PrintOptions::new`] and the `with_*`
/// methods or from JSON with [`PrintOptions::from_json`]. Field names on the
/// JSON side are the camelCase option names (`printSectionId`, `printTitle`,
/// `useExistingCss`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOptions {
    /// Id of the element whose inner HTML gets printed
    pub print_section_id: String,
    /// `<title>` of the popup document, empty title if `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_title: Option<String>,
    /// Copy the host page's `<style>` and `<link>` tags into the popup
    #[serde(default)]
    pub use_existing_css: bool,
    /// `class` attribute of the popup `<body>`, omitted if empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body_class: String,
    /// Open a plain new tab instead of a positioned popup window
    #[serde(default)]
    pub open_new_tab: bool,
    /// Show the document without opening the print dialog
    #[serde(default)]
    pub preview_only: bool,
    /// Close the popup once `window.print()` returns
    #[serde(default = "default_close_window")]
    pub close_window: bool,
    /// Milliseconds between the popup's load event and `window.print()`
    #[serde(default)]
    pub print_delay: u32,
    #[serde(default, skip_serializing_if = "PrintStyle::is_empty")]
    pub print_style: PrintStyle,
    #[serde(
        default,
        rename = "styleSheetFile",
        skip_serializing_if = "StyleSheetLinks::is_empty"
    )]
    pub style_sheet_files: StyleSheetLinks,
    /// Replace `<canvas>` elements in the section by `<img>` snapshots
    #[serde(default)]
    pub canvas_to_image: bool,
}

fn default_close_window() -> bool {
    true
}

impl PrintOptions {
    /// Options for printing the element with the given id, everything else default.
    pub fn new(print_section_id: &str) -> Result<Self, PrintError> {
        let options = Self {
            print_section_id: print_section_id.to_string(),
            print_title: None,
            use_existing_css: false,
            body_class: String::new(),
            open_new_tab: false,
            preview_only: false,
            close_window: default_close_window(),
            print_delay: 0,
            print_style: PrintStyle::default(),
            style_sheet_files: StyleSheetLinks::default(),
            canvas_to_image: false,
        };
        options.validate()?;
        Ok(options)
    }

    /// Parses options from a JSON object and validates them.
    pub fn from_json(json: &str) -> Result<Self, PrintError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), PrintError> {
        if self.print_section_id.trim().is_empty() {
            return Err(PrintError::InvalidOptions(
                "printSectionId must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_print_title(mut self, title: &str) -> Self {
        self.print_title = Some(title.to_string());
        self
    }

    pub fn with_use_existing_css(mut self, use_existing_css: bool) -> Self {
        self.use_existing_css = use_existing_css;
        self
    }

    pub fn with_body_class(mut self, body_class: &str) -> Self {
        self.body_class = body_class.to_string();
        self
    }

    pub fn with_open_new_tab(mut self, open_new_tab: bool) -> Self {
        self.open_new_tab = open_new_tab;
        self
    }

    pub fn with_preview_only(mut self, preview_only: bool) -> Self {
        self.preview_only = preview_only;
        self
    }

    pub fn with_close_window(mut self, close_window: bool) -> Self {
        self.close_window = close_window;
        self
    }

    pub fn with_print_delay(mut self, print_delay: u32) -> Self {
        self.print_delay = print_delay;
        self
    }

    /// Replaces all inline style rules.
    pub fn with_print_style(mut self, print_style: PrintStyle) -> Self {
        self.print_style = print_style;
        self
    }

    /// Sets the external stylesheets from a comma-separated list (`"a.css,b.css"`).
    pub fn with_style_sheet_file(mut self, css_list: &str) -> Self {
        self.style_sheet_files = StyleSheetLinks::from_list(css_list);
        self
    }

    pub fn with_style_sheet_files(mut self, urls: Vec<String>) -> Self {
        self.style_sheet_files = StyleSheetLinks::new(urls);
        self
    }

    pub fn with_canvas_to_image(mut self, canvas_to_image: bool) -> Self {
        self.canvas_to_image = canvas_to_image;
        self
    }

    /// `features` argument of `window.open`
    pub fn window_features(&self) -> &'static str {
        if self.open_new_tab {
            ""
        } else {
            "top=0,left=0,height=auto,width=auto"
        }
    }
}
