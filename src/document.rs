//! The HTML document written into the print window.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::options::PrintOptions;

/// All interpolated pieces of the print document.
///
/// The text layout (indentation, line breaks) is fixed; pages that diff or
/// post-process the written document rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintDocument {
    pub title: String,
    /// Host `<base>` tags, CRLF-joined
    pub base_tags: String,
    /// Complete inline `<style>` tag
    pub style_block: String,
    /// External stylesheet `<link>` tags, concatenated
    pub link_tags: String,
    /// Host `<style>` tags, CRLF-joined, empty unless `useExistingCss`
    pub host_styles: String,
    /// Host `<link>` tags, CRLF-joined, empty unless `useExistingCss`
    pub host_links: String,
    pub body_class: String,
    /// Inner HTML of the print section
    pub content: String,
    pub trigger: PrintTrigger,
}

/// What the load-triggered script of the print window does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintTrigger {
    pub preview_only: bool,
    pub close_window: bool,
    pub print_delay: u32,
}

impl Default for PrintTrigger {
    fn default() -> Self {
        Self {
            preview_only: false,
            close_window: true,
            print_delay: 0,
        }
    }
}

impl PrintTrigger {
    pub fn from_options(options: &PrintOptions) -> Self {
        Self {
            preview_only: options.preview_only,
            close_window: options.close_window,
            print_delay: options.print_delay,
        }
    }

    /// Body of the `<script defer>` tag
    pub fn to_script(&self) -> String {
        let schedule = if self.preview_only {
            String::new()
        } else {
            format!(
                "setTimeout(function() {{\n                    closeWindow(window.print());\n                  }}, {});",
                self.print_delay
            )
        };
        let close = if self.close_window { "window.close();" } else { "" };

        [
            "                function triggerPrint(event) {".to_string(),
            "                  window.removeEventListener('load', triggerPrint, false);".to_string(),
            format!("                  {}", schedule),
            "                }".to_string(),
            "                function closeWindow(){".to_string(),
            format!("                  {}", close),
            "                }".to_string(),
            "                window.addEventListener('load', triggerPrint, false);".to_string(),
        ]
        .join("\n")
    }
}

impl PrintDocument {
    /// Assembles the document from already-serialized pieces.
    ///
    /// `style_block` and `link_tags` are rendered from the options here;
    /// `host_styles` / `host_links` are dropped unless `use_existing_css` is set.
    pub fn compose(
        options: &PrintOptions,
        nonce: Option<&str>,
        content: String,
        base_tags: String,
        host_styles: String,
        host_links: String,
    ) -> Self {
        let (host_styles, host_links) = if options.use_existing_css {
            (host_styles, host_links)
        } else {
            (String::new(), String::new())
        };
        Self {
            title: options.print_title.clone().unwrap_or_default(),
            base_tags,
            style_block: options.print_style.to_style_tag(nonce),
            link_tags: options.style_sheet_files.to_link_tags(),
            host_styles,
            host_links,
            body_class: options.body_class.clone(),
            content,
            trigger: PrintTrigger::from_options(options),
        }
    }

    pub fn render(&self) -> String {
        let body_attr = if self.body_class.is_empty() {
            String::new()
        } else {
            format!("class=\"{}\"", self.body_class)
        };

        [
            String::new(),
            "          <html>".to_string(),
            "            <head>".to_string(),
            format!("              <title>{}</title>", self.title),
            format!("              {}", self.base_tags),
            format!("              {}", self.style_block),
            format!("              {}", self.link_tags),
            format!("              {}", self.host_styles),
            format!("              {}", self.host_links),
            "            </head>".to_string(),
            format!("            <body {}>", body_attr),
            format!("              {}", self.content),
            "              <script defer>".to_string(),
            self.trigger.to_script(),
            "              </script>".to_string(),
            "            </body>".to_string(),
            "          </html>".to_string(),
        ]
        .join("\n")
    }
}

impl fmt::Display for PrintDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
