//! Stylesheet pieces injected into the head of the print window:
//! programmatic rules (`<style>` block) and external stylesheet `<link>` tags.

use std::fmt;

use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single `selector { property: value; ... }` rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleRule {
    pub selector: String,
    /// Declarations in insertion order
    pub declarations: Vec<(String, String)>,
}

impl StyleRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
        }
    }

    /// Adds or overwrites a declaration. Overwriting keeps the original position.
    pub fn with_declaration(mut self, property: &str, value: &str) -> Self {
        match self.declarations.iter_mut().find(|(p, _)| p == property) {
            Some(slot) => slot.1 = value.to_string(),
            None => self
                .declarations
                .push((property.to_string(), value.to_string())),
        }
        self
    }

    /// `selector{"prop":"value",...}` with every quote character removed
    fn to_css_fragment(&self) -> String {
        let declarations = serde_json::to_string(&Declarations(&self.declarations))
            .unwrap_or_default();
        strip_quotes(&format!("{}{}", self.selector, declarations))
    }
}

/// Ordered mapping of selector to declarations, rendered into one `<style>` tag.
///
/// Rendering is deliberately lossy: the rule is encoded as JSON, every `'` and
/// `"` is removed and every `,` becomes `;`. That also hits selector lists
/// (`h1, h2` becomes `h1; h2`) and quoted values (`font-family: "Arial"`).
/// Existing pages depend on this output, so it is kept as-is.
///
/// From JSON, declaration values may be strings, numbers, booleans or `null`
/// (rendered as `null`). Arrays and nested objects are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrintStyle {
    pub rules: Vec<StyleRule>,
}

impl PrintStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Adds a rule; a rule for an already-known selector replaces the old one in place.
    pub fn with_rule(mut self, rule: StyleRule) -> Self {
        match self.rules.iter_mut().find(|r| r.selector == rule.selector) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
        self
    }

    /// Inner text of the `<style>` tag, without the surrounding padding.
    pub fn css_text(&self) -> String {
        self.rules
            .iter()
            .map(StyleRule::to_css_fragment)
            .collect::<Vec<_>>()
            .join(" ")
            .replace(',', ";")
    }

    /// Renders the complete `<style>` tag. An empty nonce is treated as absent.
    pub fn to_style_tag(&self, nonce: Option<&str>) -> String {
        let nonce_attr = match nonce {
            Some(n) if !n.is_empty() => format!(" nonce=\"{}\"", n),
            _ => String::new(),
        };
        format!("<style{}> {} </style>", nonce_attr, self.css_text())
    }
}

fn strip_quotes(s: &str) -> String {
    s.chars().filter(|c| *c != '\'' && *c != '"').collect()
}

/// Serializes declarations as a JSON object, keeping their order
struct Declarations<'a>(&'a [(String, String)]);

impl Serialize for Declarations<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for PrintStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.selector, &Declarations(&rule.declarations))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PrintStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // preserve_order keeps the object key order of the input
        let raw = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut style = PrintStyle::new();
        for (selector, declarations) in raw {
            let obj = declarations.as_object().ok_or_else(|| {
                <D::Error as de::Error>::custom(format!(
                    "printStyle: declarations for {:?} must be an object",
                    selector
                ))
            })?;
            let mut rule = StyleRule::new(&selector);
            for (property, value) in obj {
                let value = match value {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    serde_json::Value::Null => "null".to_string(),
                    other => {
                        return Err(<D::Error as de::Error>::custom(format!(
                            "printStyle: unsupported value for {}: {}",
                            property, other
                        )))
                    }
                };
                rule = rule.with_declaration(property, &value);
            }
            style = style.with_rule(rule);
        }
        Ok(style)
    }
}

/// Ordered list of external stylesheet URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheetLinks {
    pub urls: Vec<String>,
}

impl StyleSheetLinks {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    /// Parses a `styleSheetFile` value: `"a.css,b.css"` yields two links.
    /// Entries are not trimmed; `""` yields a single link with an empty href.
    pub fn from_list(css_list: &str) -> Self {
        Self {
            urls: css_list.split(',').map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn to_link_tags(&self) -> String {
        self.urls
            .iter()
            .map(|href| {
                format!(
                    "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">",
                    href
                )
            })
            .collect()
    }
}

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum ListOrString {
    List(Vec<String>),
    Str(String),
}

impl Serialize for StyleSheetLinks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.urls.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StyleSheetLinks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ListOrString::deserialize(deserializer)? {
            ListOrString::List(urls) => StyleSheetLinks::new(urls),
            ListOrString::Str(s) => StyleSheetLinks::from_list(&s),
        })
    }
}

impl fmt::Display for StyleSheetLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_link_tags())
    }
}
