use std::fmt;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationDescriptor;

/// An attribute value as handed to the builder.
///
/// Numbers are kept as numbers so composers and tests can read them back;
/// they are stringified only when the element reaches a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(f64::from(n))
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(f64::from(n))
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

/// A node of a declarative scene: a tag, its attributes, child nodes, an
/// optional text body and the native animations attached to it.
///
/// Elements are built once and never touch a live surface. Builder methods
/// consume `self`, so a finished tree is not mutated after composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    /// Attribute names in first-insertion order.
    pub attributes: Vec<(String, AttrValue)>,
    pub children: Vec<Element>,
    pub text: Option<String>,
    /// Rendered as `<animate>`/`<animateTransform>` children after `children`.
    pub animations: Vec<AnimationDescriptor>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
            animations: Vec::new(),
        }
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn animate(mut self, animation: AnimationDescriptor) -> Self {
        self.animations.push(animation);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn number_attr(&self, name: &str) -> Option<f64> {
        self.get_attr(name).and_then(AttrValue::as_number)
    }

    pub fn id(&self) -> Option<&str> {
        match self.get_attr("id") {
            Some(AttrValue::Text(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Depth-first search for the element carrying `id`, including `self`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// All elements of the tree in pre-order, `self` first.
    pub fn descendants(&self) -> Vec<&Element> {
        fn collect<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
            out.push(element);
            for child in &element.children {
                collect(child, out);
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Number of elements in the tree with the given tag.
    pub fn count_tag(&self, tag: &str) -> usize {
        self.descendants().iter().filter(|e| e.tag == tag).count()
    }
}
