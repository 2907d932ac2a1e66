//! Fragments d'interface rendus par les renderers de cellules
//!
//! Un fragment est un petit arbre d'éléments (`div`, `span`, `br`) et de
//! texte. Il se sérialise en JSON sous la forme d'un élément React
//! (`type`/`props`/`children`) et se rend aussi directement en HTML.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

/// Balises supportées
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Br,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Br => "br",
        }
    }

    /// Élément sans contenu ni balise fermante
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Br)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style inline, propriétés CSS en camelCase dans l'ordre d'insertion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    properties: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute ou remplace une propriété
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.properties.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Déclarations CSS (`background-color:#fff;color:black`)
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|(name, value)| format!("{}:{}", kebab_case(name), value))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Noeud d'un fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: Tag,
        style: Style,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn div(style: Style, children: Vec<Node>) -> Self {
        Node::Element { tag: Tag::Div, style, children }
    }

    /// `span` contenant un seul caractère
    pub fn span(style: Style, ch: char) -> Self {
        Node::Element {
            tag: Tag::Span,
            style,
            children: vec![Node::Text(ch.to_string())],
        }
    }

    pub fn br() -> Self {
        Node::Element {
            tag: Tag::Br,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Element { tag, .. } => Some(*tag),
            Node::Text(_) => None,
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Node::Element { style, .. } => Some(style),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// Texte visible, `br` rendu comme saut de ligne
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element { tag: Tag::Br, .. } => out.push('\n'),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Rend le fragment en HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_html_into(out, text),
            Node::Element { tag, style, children } => {
                out.push('<');
                out.push_str(tag.as_str());
                if !style.is_empty() {
                    out.push_str(" style=\"");
                    escape_html_into(out, &style.to_css());
                    out.push('"');
                }
                out.push('>');
                if tag.is_void() {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag.as_str());
                out.push('>');
            }
        }
    }
}

/// Propriétés d'un élément au format React
struct Props<'a> {
    style: &'a Style,
}

impl Serialize for Props<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = usize::from(!self.style.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        if !self.style.is_empty() {
            map.serialize_entry("style", self.style)?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Text(text) => serializer.serialize_str(text),
            Node::Element { tag, style, children } => {
                let mut state = serializer.serialize_struct("Element", 3)?;
                state.serialize_field("type", tag.as_str())?;
                state.serialize_field("props", &Props { style })?;
                state.serialize_field("children", children)?;
                state.end()
            }
        }
    }
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn escape_html_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_html_rendering() {
        let style = Style::new()
            .with("backgroundColor", "#FFCCCB")
            .with("color", "black");
        let node = Node::div(
            Style::new().with("fontFamily", "monospace"),
            vec![Node::span(style, 'A'), Node::br(), Node::text("<C>")],
        );

        assert_eq!(
            node.to_html(),
            "<div style=\"font-family:monospace\">\
             <span style=\"background-color:#FFCCCB;color:black\">A</span>\
             <br>&lt;C&gt;</div>"
        );
    }

    #[test]
    fn test_unstyled_span() {
        let node = Node::span(Style::new(), '.');
        assert_eq!(node.to_html(), "<span>.</span>");
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "span", "props": {}, "children": ["."]})
        );
    }

    #[test]
    fn test_style_set_replaces() {
        let mut style = Style::new().with("color", "red");
        style.set("color", "black");
        assert_eq!(style.get("color"), Some("black"));
        assert_eq!(style.iter().count(), 1);
    }

    #[test]
    fn test_text_content() {
        let node = Node::div(
            Style::new(),
            vec![Node::text("A"), Node::br(), Node::span(Style::new(), 'C')],
        );
        assert_eq!(node.text_content(), "A\nC");
    }
}
