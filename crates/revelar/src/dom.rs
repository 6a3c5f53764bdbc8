//! Page snapshot model.
//!
//! A `PageDocument` is an immutable snapshot of server-rendered markup:
//! enough structure to discover animation targets by class, read `data-*`
//! diagnostics, and render fixture HTML. It is not a live DOM; queries never
//! mutate the snapshot, so discovery is idempotent by construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An element in the page snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Tag name (e.g. "section", "div")
    pub tag: String,
    /// Element ID, if any
    pub id: Option<String>,
    /// CSS classes in declaration order
    pub classes: Vec<String>,
    /// Dataset entries with camelCase keys, DOM-dataset style
    /// (`currentUsername` renders as `data-current-username`)
    pub dataset: BTreeMap<String, String>,
    /// Child elements in document order
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create a new element with the given tag
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            dataset: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the element ID
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single CSS class
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add several CSS classes
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Set a dataset entry (camelCase key)
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    /// Append a child element
    #[must_use]
    pub fn child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Check whether the element carries a CSS class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Read a dataset entry by camelCase key
    #[must_use]
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    /// Render element to an HTML string
    #[must_use]
    pub fn render(&self) -> String {
        let mut attrs = String::new();
        if let Some(id) = &self.id {
            attrs.push_str(&format!(r#" id="{id}""#));
        }
        if !self.classes.is_empty() {
            attrs.push_str(&format!(r#" class="{}""#, self.classes.join(" ")));
        }
        for (key, value) in &self.dataset {
            attrs.push_str(&format!(r#" {}="{value}""#, dataset_attr_name(key)));
        }
        let inner: String = self.children.iter().map(ElementNode::render).collect();
        format!("<{tag}{attrs}>{inner}</{tag}>", tag = self.tag)
    }

    /// Depth-first pre-order walk, self first
    fn visit<'a>(&'a self, out: &mut Vec<&'a ElementNode>) {
        out.push(self);
        for child in &self.children {
            child.visit(out);
        }
    }
}

/// Convert a camelCase dataset key to its `data-*` attribute name.
fn dataset_attr_name(key: &str) -> String {
    let mut name = String::from("data-");
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Dataset key for the diagnostic username attribute
pub const USERNAME_DATA_KEY: &str = "currentUsername";

/// An immutable page snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDocument {
    /// Document title
    pub title: String,
    /// Document language
    pub lang: String,
    /// Body element
    pub body: ElementNode,
}

impl PageDocument {
    /// Create a document with an empty body
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: "en".to_string(),
            body: ElementNode::new("body"),
        }
    }

    /// Set the document language
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Replace the body element
    #[must_use]
    pub fn with_body(mut self, body: ElementNode) -> Self {
        self.body = body;
        self
    }

    /// Read the `currentUsername` dataset entry from the body element.
    ///
    /// Populated by the server-rendered templating layer; may be absent.
    #[must_use]
    pub fn current_username(&self) -> Option<&str> {
        self.body.data(USERNAME_DATA_KEY)
    }

    /// Collect all elements carrying a class, in document order.
    ///
    /// Depth-first pre-order over the body, body included. Read-only:
    /// calling this twice against the same snapshot yields the same
    /// sequence both times.
    #[must_use]
    pub fn query_class(&self, class: &str) -> Vec<&ElementNode> {
        let mut all = Vec::new();
        self.body.visit(&mut all);
        all.into_iter().filter(|el| el.has_class(class)).collect()
    }

    /// Render the full HTML document
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n</head>\n{body}\n</html>",
            lang = self.lang,
            title = self.title,
            body = self.body.render(),
        )
    }
}
