//! Capabilities the assembler needs from the page it runs in.
//!
//! Nothing in this crate reaches for a global `window` or `document`: the
//! host is always passed in. `crate::web::WebHost` implements these traits
//! on top of `web-sys`, tests use an in-memory DOM.

/// Handle to one element of the host document.
///
/// Handles are cheap to clone and share the underlying node (like DOM
/// references do), so setters take `&self`. Form accessors are only called
/// on elements of the matching tag; for other elements they may return the
/// empty value.
pub trait HostElement: Clone {
    /// All descendants with the given tag, in document order
    fn elements_by_tag(&self, tag: &str) -> Vec<Self>;

    /// Live value of an `<input>` or `<textarea>`
    fn value(&self) -> String;
    /// Sets the `defaultValue` (the value attribute / textarea text)
    fn set_default_value(&self, value: &str);
    /// Live checked state of an `<input>`
    fn checked(&self) -> bool;
    fn set_default_checked(&self, checked: bool);

    /// Index of the selected option of a `<select>`, `None` if nothing is selected
    fn selected_index(&self) -> Option<usize>;
    /// `<option>` elements of a `<select>`
    fn options(&self) -> Vec<Self>;
    fn set_default_selected(&self, selected: bool);

    /// `canvas.toDataURL()`, `None` if the bitmap can't be read (tainted canvas)
    fn canvas_data_url(&self) -> Option<String>;
    /// Inserts `html` right after this element, then removes the element.
    /// On error the element stays where it is.
    fn replace_with_html(&self, html: &str) -> Result<(), String>;

    fn inner_html(&self) -> String;
    fn outer_html(&self) -> String;
}

/// A freshly opened browsing context. Errors carry the host's message.
pub trait PrintWindow {
    /// `document.open()`
    fn open_document(&self) -> Result<(), String>;
    /// `document.write(html)`
    fn write_document(&self, html: &str) -> Result<(), String>;
    /// `document.close()`, fires the load event of the written document
    fn close_document(&self) -> Result<(), String>;
}

/// The page the print section lives in.
pub trait HostEnvironment {
    type Element: HostElement;
    type Window: PrintWindow;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// All elements of the whole document with the given tag, in document order
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Element>;
    /// `window.open(url, target, features)`, `None` if the browser refused
    fn open_window(&self, url: &str, target: &str, features: &str) -> Option<Self::Window>;
}
