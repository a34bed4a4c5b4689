//! Datastructures for the WASM API entrypoint. Useful if you want to
//! use the same API without going through JS serialization / deserialization.

use serde_derive::{Deserialize, Serialize};

use crate::{HostEnvironment, PrintAssembler, PrintDocument, PrintOptions, PrintWarnMsg};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct PrintSectionInput {
    /// Print options, `printSectionId` is required
    pub options: PrintOptions,
    /// CSP nonce for the inline `<style>` tag, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct PrintSectionOutput {
    /// Errors and warnings of the print run; empty if the document was written
    #[serde(default)]
    pub warnings: Vec<PrintWarnMsg>,
}

impl PrintSectionOutput {
    pub fn printed(&self) -> bool {
        !self.warnings.iter().any(PrintWarnMsg::is_error)
    }
}

/// Input for composing a print document without touching any page
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ComposeDocumentInput {
    pub options: PrintOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Inner HTML of the section to print
    #[serde(default)]
    pub content: String,
    /// Outer HTML of the page's `<base>` tags
    #[serde(default)]
    pub base_tags: Vec<String>,
    /// Outer HTML of the page's `<style>` tags, only used with `useExistingCss`
    #[serde(default)]
    pub host_styles: Vec<String>,
    /// Outer HTML of the page's `<link>` tags, only used with `useExistingCss`
    #[serde(default)]
    pub host_links: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ComposeDocumentOutput {
    pub html: String,
}

/// Prints `input.options.print_section_id` of `host`. Fails only if the options
/// don't validate; print failures are returned as warnings.
pub fn print_section<H: HostEnvironment>(
    host: &H,
    input: PrintSectionInput,
) -> Result<PrintSectionOutput, String> {
    input.options.validate().map_err(|e| e.to_string())?;
    let assembler = match input.nonce.as_deref() {
        Some(n) => PrintAssembler::new().with_nonce(n),
        None => PrintAssembler::new(),
    };
    let mut warnings = Vec::new();
    assembler.print(host, &input.options, &mut warnings);
    Ok(PrintSectionOutput { warnings })
}

pub fn compose_document(input: ComposeDocumentInput) -> Result<ComposeDocumentOutput, String> {
    input.options.validate().map_err(|e| e.to_string())?;
    let doc = PrintDocument::compose(
        &input.options,
        input.nonce.as_deref(),
        input.content,
        input.base_tags.join("\r\n"),
        input.host_styles.join("\r\n"),
        input.host_links.join("\r\n"),
    );
    Ok(ComposeDocumentOutput { html: doc.render() })
}
