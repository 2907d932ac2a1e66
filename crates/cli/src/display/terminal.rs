//! Rendu des fragments avec couleurs ANSI

use console::Style;
use seqvis_core::{Node, Tag};

/// Convertit `#rrggbb` (ou `black`, `white`) vers le cube 256 couleurs
pub fn hex_to_color256(color: &str) -> Option<u8> {
    match color {
        "black" => return Some(16),
        "white" => return Some(231),
        _ => {}
    }

    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| -> Option<u16> {
        let value = u8::from_str_radix(hex.get(i..i + 2)?, 16).ok()?;
        Some((u16::from(value) * 5 + 127) / 255)
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    u8::try_from(16 + 36 * r + 6 * g + b).ok()
}

fn span_style(node: &Node) -> Style {
    let Some(css) = node.style().filter(|s| !s.is_empty()) else {
        // Mutation seule : simple emphase
        return Style::new().bold();
    };

    let mut style = Style::new();
    if let Some(bg) = css.get("backgroundColor").and_then(hex_to_color256) {
        style = style.on_color256(bg);
    }
    if let Some(fg) = css.get("color").and_then(hex_to_color256) {
        style = style.color256(fg);
    }
    style
}

/// Rend un fragment pour le terminal
pub fn fragment_to_ansi(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element { tag: Tag::Br, .. } => out.push('\n'),
        Node::Element { tag: Tag::Span, .. } => {
            let style = span_style(node);
            out.push_str(&style.apply_to(node.text_content()).to_string());
        }
        Node::Element { children, .. } => {
            for child in children {
                write_node(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqvis_core::AlignmentVisualizer;

    #[test]
    fn test_hex_conversion() {
        assert_eq!(hex_to_color256("#000000"), Some(16));
        assert_eq!(hex_to_color256("#ffffff"), Some(231));
        assert_eq!(hex_to_color256("black"), Some(16));
        assert_eq!(hex_to_color256("#FFCCCB"), Some(224));
        assert_eq!(hex_to_color256("red"), None);
        assert_eq!(hex_to_color256("#12"), None);
    }

    #[test]
    fn test_plain_text_kept() {
        console::set_colors_enabled(false);
        let node = AlignmentVisualizer::default().render_text("AC\n.|\nHN\nGC");
        assert_eq!(fragment_to_ansi(&node), "AC\n.|\nGC");
    }
}
