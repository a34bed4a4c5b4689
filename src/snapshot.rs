//! Freezes the live state of form controls inside the print section so that
//! serializing it as HTML captures what the user currently sees.
//!
//! `innerHTML` only carries the *default* state of a control (`value`
//! attribute, `checked` attribute, `selected` attribute). The live state is
//! copied onto the defaults of the host page's controls in place; that
//! mutation stays visible in the host page after printing.

use crate::host::HostElement;
use crate::print::PrintWarnMsg;

/// `<input>`: default value := value, default checked := true when checked.
/// An unchecked control never gets its default checked state cleared.
pub fn freeze_inputs<E: HostElement>(root: &E) {
    for input in root.elements_by_tag("input") {
        input.set_default_value(&input.value());
        if input.checked() {
            input.set_default_checked(true);
        }
    }
}

/// `<select>`: the option at the selected index becomes default-selected.
/// Only the first selected option of a multi-select is touched.
pub fn freeze_selects<E: HostElement>(root: &E) {
    for select in root.elements_by_tag("select") {
        let idx = match select.selected_index() {
            Some(s) => s,
            None => continue,
        };
        if let Some(option) = select.options().get(idx) {
            option.set_default_selected(true);
        }
    }
}

/// `<textarea>`: default value := value
pub fn freeze_text_areas<E: HostElement>(root: &E) {
    for text_area in root.elements_by_tag("textarea") {
        text_area.set_default_value(&text_area.value());
    }
}

/// Replaces every `<canvas>` with an `<img>` of its current bitmap.
/// Canvases that can't be read or replaced stay in place (they print blank).
pub fn canvases_to_images<E: HostElement>(root: &E, warnings: &mut Vec<PrintWarnMsg>) {
    for (i, canvas) in root.elements_by_tag("canvas").into_iter().enumerate() {
        let msg = match canvas.canvas_data_url() {
            Some(data_url) => match canvas.replace_with_html(&canvas_image_html(&data_url)) {
                Ok(()) => continue,
                Err(e) => format!("canvas #{} could not be replaced ({}), printing it as-is", i, e),
            },
            None => format!("canvas #{} could not be read, printing it as-is", i),
        };
        tracing::warn!(target: "printsection", "{}", msg);
        warnings.push(PrintWarnMsg::warning(msg));
    }
}

pub fn canvas_image_html(data_url: &str) -> String {
    format!("<img src=\"{}\" style=\"max-width: 100%;\">", data_url)
}

/// Runs all freezing steps on `root` and returns its inner HTML.
pub fn snapshot_section<E: HostElement>(
    root: &E,
    canvas_to_image: bool,
    warnings: &mut Vec<PrintWarnMsg>,
) -> String {
    freeze_inputs(root);
    freeze_selects(root);
    freeze_text_areas(root);
    if canvas_to_image {
        canvases_to_images(root, warnings);
    }
    root.inner_html()
}

/// Concatenated `outerHTML` of the given elements, joined with CRLF.
pub fn join_outer_html<E: HostElement>(elements: &[E]) -> String {
    elements
        .iter()
        .map(HostElement::outer_html)
        .collect::<Vec<_>>()
        .join("\r\n")
}
