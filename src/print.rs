use serde_derive::{Deserialize, Serialize};

use crate::document::PrintDocument;
use crate::errors::PrintError;
use crate::host::{HostEnvironment, PrintWindow};
use crate::options::PrintOptions;
use crate::snapshot;

/// Message produced while printing. Failures never propagate as errors, they
/// end up here (and in the `tracing` log).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintWarnMsg {
    pub severity: String,
    pub msg: String,
}

impl PrintWarnMsg {
    pub const ERROR: &'static str = "error";
    pub const WARNING: &'static str = "warning";

    pub fn error(msg: String) -> Self {
        PrintWarnMsg {
            severity: Self::ERROR.to_string(),
            msg,
        }
    }

    pub fn warning(msg: String) -> Self {
        PrintWarnMsg {
            severity: Self::WARNING.to_string(),
            msg,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Self::ERROR
    }
}

/// Prints a section of the host page in a new window.
///
/// Holds only what outlives a single print: the CSP nonce for the inline
/// `<style>` tag. Everything else comes with each call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintAssembler {
    nonce: Option<String>,
}

impl PrintAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content-Security-Policy nonce added to the inline `<style>` tag
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    /// Opens a window with the section `options.print_section_id` and arms
    /// the print / close script.
    ///
    /// Form controls inside the section get their current state copied onto
    /// their defaults *in the host page*. If the section doesn't exist, the
    /// window can't be opened or its document can't be written, an error is
    /// logged and pushed to `warnings` and the run stops there.
    pub fn print<H: HostEnvironment>(
        &self,
        host: &H,
        options: &PrintOptions,
        warnings: &mut Vec<PrintWarnMsg>,
    ) {
        if let Err(e) = self.try_print(host, options, warnings) {
            tracing::error!(target: "printsection", "{}", e);
            warnings.push(PrintWarnMsg::error(e.to_string()));
        }
    }

    fn try_print<H: HostEnvironment>(
        &self,
        host: &H,
        options: &PrintOptions,
        warnings: &mut Vec<PrintWarnMsg>,
    ) -> Result<(), PrintError> {
        let root = host
            .element_by_id(&options.print_section_id)
            .ok_or_else(|| PrintError::ContentRootNotFound {
                id: options.print_section_id.clone(),
            })?;

        let content = snapshot::snapshot_section(&root, options.canvas_to_image, warnings);

        let base_tags = snapshot::join_outer_html(&host.elements_by_tag("base"));
        let (host_styles, host_links) = if options.use_existing_css {
            (
                snapshot::join_outer_html(&host.elements_by_tag("style")),
                snapshot::join_outer_html(&host.elements_by_tag("link")),
            )
        } else {
            (String::new(), String::new())
        };

        let document = PrintDocument::compose(
            options,
            self.nonce(),
            content,
            base_tags,
            host_styles,
            host_links,
        );

        let features = options.window_features();
        tracing::debug!(target: "printsection", "opening print window, features {:?}", features);
        let window = host
            .open_window("", "_blank", features)
            .ok_or(PrintError::PopupBlocked)?;

        let html = document.render();
        tracing::debug!(target: "printsection", "writing print document ({} bytes)", html.len());
        window.open_document().map_err(PrintError::DocumentWrite)?;
        window
            .write_document(&html)
            .map_err(PrintError::DocumentWrite)?;
        window.close_document().map_err(PrintError::DocumentWrite)?;
        Ok(())
    }
}
