//! `web-sys` implementation of the host traits, only built for wasm targets
//! with the `web` feature.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCanvasElement, HtmlCollection, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

use crate::host::{HostElement, HostEnvironment, PrintWindow};
use crate::print::PrintWarnMsg;

/// The page this module runs in.
#[derive(Clone)]
pub struct WebHost {
    pub window: Window,
    pub document: Document,
}

impl WebHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// `None` outside of a browser main thread (workers, Node.js)
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }
}

#[derive(Clone)]
pub struct WebElement(pub Element);

fn collect(collection: &HtmlCollection) -> Vec<WebElement> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .map(WebElement)
        .collect()
}

impl HostElement for WebElement {
    fn elements_by_tag(&self, tag: &str) -> Vec<Self> {
        collect(&self.0.get_elements_by_tag_name(tag))
    }

    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(text_area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            text_area.value()
        } else {
            String::new()
        }
    }

    fn set_default_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_default_value(value);
        } else if let Some(text_area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            text_area.set_default_value(value);
        }
    }

    fn checked(&self) -> bool {
        self.0
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::checked)
            .unwrap_or(false)
    }

    fn set_default_checked(&self, checked: bool) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_default_checked(checked);
        }
    }

    fn selected_index(&self) -> Option<usize> {
        let select = self.0.dyn_ref::<HtmlSelectElement>()?;
        usize::try_from(select.selected_index()).ok()
    }

    fn options(&self) -> Vec<Self> {
        match self.0.dyn_ref::<HtmlSelectElement>() {
            Some(select) => collect(&select.options()),
            None => Vec::new(),
        }
    }

    fn set_default_selected(&self, selected: bool) {
        if let Some(option) = self.0.dyn_ref::<HtmlOptionElement>() {
            option.set_default_selected(selected);
        }
    }

    fn canvas_data_url(&self) -> Option<String> {
        self.0.dyn_ref::<HtmlCanvasElement>()?.to_data_url().ok()
    }

    fn replace_with_html(&self, html: &str) -> Result<(), String> {
        self.0
            .insert_adjacent_html("afterend", html)
            .map_err(|e| format!("{:?}", e))?;
        self.0.remove();
        Ok(())
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn outer_html(&self) -> String {
        self.0.outer_html()
    }
}

/// Popup window returned by `window.open`
pub struct WebWindow(pub Window);

impl WebWindow {
    fn document(&self) -> Result<Document, String> {
        self.0
            .document()
            .ok_or_else(|| "print window has no document".to_string())
    }
}

impl PrintWindow for WebWindow {
    fn open_document(&self) -> Result<(), String> {
        self.document()?
            .open()
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    }

    fn write_document(&self, html: &str) -> Result<(), String> {
        self.document()?
            .write(&js_sys::Array::of1(&JsValue::from_str(html)))
            .map_err(|e| format!("{:?}", e))
    }

    fn close_document(&self) -> Result<(), String> {
        self.document()?.close().map_err(|e| format!("{:?}", e))
    }
}

impl HostEnvironment for WebHost {
    type Element = WebElement;
    type Window = WebWindow;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<WebElement> {
        collect(&self.document.get_elements_by_tag_name(tag))
    }

    fn open_window(&self, url: &str, target: &str, features: &str) -> Option<WebWindow> {
        self.window
            .open_with_url_and_target_and_features(url, target, features)
            .ok()
            .flatten()
            .map(WebWindow)
    }
}

/// Mirrors error messages to the browser console, where users of the page
/// see them. `tracing` has no subscriber there unless the app installs one.
pub fn report_to_console(warnings: &[PrintWarnMsg]) {
    for w in warnings.iter().filter(|w| w.is_error()) {
        web_sys::console::error_1(&JsValue::from_str(&w.msg));
    }
}
