//! In-memory page used by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use printsection::{HostElement, HostEnvironment, PrintWindow};

const VOID_TAGS: &[&str] = &["input", "img", "base", "link", "meta", "br", "hr"];

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    /// Verbatim markup (text or inserted HTML) if `tag` is empty
    raw: String,
    children: Vec<FakeElement>,
    parent: Weak<RefCell<Node>>,

    value: String,
    default_value: Option<String>,
    checked: bool,
    default_checked: bool,
    selected_index: Option<usize>,
    default_selected: bool,
    canvas_url: Option<String>,
    /// `insertAdjacentHTML` throws (e.g. the parent is the document itself)
    reject_insert: bool,
}

#[derive(Debug, Clone)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        FakeElement(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            ..Default::default()
        })))
    }

    pub fn text(text: &str) -> Self {
        FakeElement(Rc::new(RefCell::new(Node {
            raw: text.to_string(),
            ..Default::default()
        })))
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attrs
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn child(self, child: FakeElement) -> Self {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
        self
    }

    /// Markup default value (`value` attribute / textarea text)
    pub fn with_default_value(self, value: &str) -> Self {
        {
            let mut n = self.0.borrow_mut();
            n.default_value = Some(value.to_string());
            n.value = value.to_string();
        }
        self
    }

    pub fn with_default_checked(self) -> Self {
        {
            let mut n = self.0.borrow_mut();
            n.default_checked = true;
            n.checked = true;
        }
        self
    }

    pub fn with_canvas_url(self, url: &str) -> Self {
        self.0.borrow_mut().canvas_url = Some(url.to_string());
        self
    }

    pub fn with_failing_replace(self) -> Self {
        self.0.borrow_mut().reject_insert = true;
        self
    }

    /// What the user typed
    pub fn type_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    pub fn set_checked(&self, checked: bool) {
        self.0.borrow_mut().checked = checked;
    }

    pub fn select(&self, index: Option<usize>) {
        self.0.borrow_mut().selected_index = index;
    }

    pub fn default_value(&self) -> Option<String> {
        self.0.borrow().default_value.clone()
    }

    pub fn default_checked(&self) -> bool {
        self.0.borrow().default_checked
    }

    pub fn default_selected(&self) -> bool {
        self.0.borrow().default_selected
    }

    fn attr_value(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn descendants(&self, out: &mut Vec<FakeElement>) {
        for c in self.0.borrow().children.iter() {
            out.push(c.clone());
            c.descendants(out);
        }
    }

    fn serialize(&self) -> String {
        let n = self.0.borrow();
        if n.tag.is_empty() {
            return n.raw.clone();
        }
        let mut s = format!("<{}", n.tag);
        for (k, v) in n.attrs.iter() {
            s.push_str(&format!(" {}=\"{}\"", k, v));
        }
        if n.tag == "input" {
            if let Some(v) = &n.default_value {
                s.push_str(&format!(" value=\"{}\"", v));
            }
            if n.default_checked {
                s.push_str(" checked=\"\"");
            }
        }
        if n.tag == "option" && n.default_selected {
            s.push_str(" selected=\"\"");
        }
        s.push('>');
        if VOID_TAGS.contains(&n.tag.as_str()) {
            return s;
        }
        if n.tag == "textarea" {
            s.push_str(n.default_value.as_deref().unwrap_or(""));
        } else {
            for c in n.children.iter() {
                s.push_str(&c.serialize());
            }
        }
        s.push_str(&format!("</{}>", n.tag));
        s
    }
}

impl HostElement for FakeElement {
    fn elements_by_tag(&self, tag: &str) -> Vec<Self> {
        let mut all = Vec::new();
        self.descendants(&mut all);
        all.into_iter().filter(|e| e.0.borrow().tag == tag).collect()
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_default_value(&self, value: &str) {
        self.0.borrow_mut().default_value = Some(value.to_string());
    }

    fn checked(&self) -> bool {
        self.0.borrow().checked
    }

    fn set_default_checked(&self, checked: bool) {
        self.0.borrow_mut().default_checked = checked;
    }

    fn selected_index(&self) -> Option<usize> {
        self.0.borrow().selected_index
    }

    fn options(&self) -> Vec<Self> {
        self.elements_by_tag("option")
    }

    fn set_default_selected(&self, selected: bool) {
        self.0.borrow_mut().default_selected = selected;
    }

    fn canvas_data_url(&self) -> Option<String> {
        self.0.borrow().canvas_url.clone()
    }

    fn replace_with_html(&self, html: &str) -> Result<(), String> {
        if self.0.borrow().reject_insert {
            return Err("NoModificationAllowedError".to_string());
        }
        let parent = self
            .0
            .borrow()
            .parent
            .upgrade()
            .ok_or_else(|| "element has no parent".to_string())?;
        let replacement = FakeElement::text(html);
        replacement.0.borrow_mut().parent = Rc::downgrade(&parent);
        let mut p = parent.borrow_mut();
        if let Some(pos) = p.children.iter().position(|c| Rc::ptr_eq(&c.0, &self.0)) {
            p.children[pos] = replacement;
        }
        Ok(())
    }

    fn inner_html(&self) -> String {
        self.0
            .borrow()
            .children
            .iter()
            .map(FakeElement::serialize)
            .collect()
    }

    fn outer_html(&self) -> String {
        self.serialize()
    }
}

#[derive(Debug, Default)]
pub struct WindowLog {
    pub url: String,
    pub target: String,
    pub features: String,
    pub calls: Vec<String>,
    pub written: String,
    /// `document.write` throws with this message
    pub fail_write: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeWindow(pub Rc<RefCell<WindowLog>>);

impl PrintWindow for FakeWindow {
    fn open_document(&self) -> Result<(), String> {
        self.0.borrow_mut().calls.push("open".to_string());
        Ok(())
    }

    fn write_document(&self, html: &str) -> Result<(), String> {
        let mut log = self.0.borrow_mut();
        log.calls.push("write".to_string());
        if let Some(e) = log.fail_write.clone() {
            return Err(e);
        }
        log.written.push_str(html);
        Ok(())
    }

    fn close_document(&self) -> Result<(), String> {
        self.0.borrow_mut().calls.push("close".to_string());
        Ok(())
    }
}

pub struct FakeHost {
    pub document: FakeElement,
    pub block_popups: bool,
    pub fail_writes: Option<String>,
    pub windows: RefCell<Vec<FakeWindow>>,
}

impl FakeHost {
    pub fn new(document: FakeElement) -> Self {
        Self {
            document,
            block_popups: false,
            fail_writes: None,
            windows: RefCell::new(Vec::new()),
        }
    }

    pub fn blocking_popups(mut self) -> Self {
        self.block_popups = true;
        self
    }

    /// Every opened window rejects `document.write` with `message`
    pub fn failing_writes(mut self, message: &str) -> Self {
        self.fail_writes = Some(message.to_string());
        self
    }

    pub fn window_count(&self) -> usize {
        self.windows.borrow().len()
    }

    /// Document written into the only opened window
    pub fn written(&self) -> String {
        let windows = self.windows.borrow();
        assert_eq!(windows.len(), 1, "expected exactly one print window");
        let html = windows[0].0.borrow().written.clone();
        html
    }
}

impl HostEnvironment for FakeHost {
    type Element = FakeElement;
    type Window = FakeWindow;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        let mut all = Vec::new();
        self.document.descendants(&mut all);
        all.into_iter()
            .find(|e| e.attr_value("id").as_deref() == Some(id))
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<FakeElement> {
        self.document.elements_by_tag(tag)
    }

    fn open_window(&self, url: &str, target: &str, features: &str) -> Option<FakeWindow> {
        if self.block_popups {
            return None;
        }
        let window = FakeWindow::default();
        {
            let mut log = window.0.borrow_mut();
            log.url = url.to_string();
            log.target = target.to_string();
            log.features = features.to_string();
            log.fail_write = self.fail_writes.clone();
        }
        self.windows.borrow_mut().push(window.clone());
        Some(window)
    }
}
