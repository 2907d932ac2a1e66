//! Renderer de cellule pour les blocs d'alignement

use super::block::{split_lines, GROUP_SIZE};
use super::highlight::{Classification, HighlightMap};
use crate::cell::{CellOutput, CellValue};
use crate::fragment::{Node, Style};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Suppression de la ligne d'annotation avant affichage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationRowPolicy {
    /// Supprime uniquement la ligne 2 du bloc, puis cherche les mises en
    /// évidence par index de ligne affichée. Les annotations des groupes
    /// suivants restent visibles.
    #[default]
    Reference,
    /// Supprime l'annotation de chaque groupe et garde l'index d'origine
    /// de chaque ligne affichée
    PerGroup,
}

/// Couleurs de fond par classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub cold: String,
    pub hot: String,
    pub both: String,
    /// Couleur du texte sur fond coloré
    pub text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cold: "#d0ddfa".to_string(),
            hot: "#FFCCCB".to_string(),
            both: "#e9d8fd".to_string(),
            text: "black".to_string(),
        }
    }
}

impl Palette {
    fn background(&self, color: &str) -> Style {
        Style::new()
            .with("backgroundColor", color)
            .with("color", &self.text)
    }

    /// Style d'une position : chaque test réussi écrase le précédent,
    /// une mutation seule donne un style vide
    pub fn style_for(&self, classification: Classification) -> Style {
        let mut style = Style::new();
        if classification.cold {
            style = self.background(&self.cold);
        }
        if classification.hot {
            style = self.background(&self.hot);
        }
        if classification.both {
            style = self.background(&self.both);
        }
        style
    }
}

/// Configuration du visualiseur
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    #[serde(default)]
    pub policy: AnnotationRowPolicy,
    #[serde(default)]
    pub palette: Palette,
}

/// Visualiseur d'alignement, sans état entre deux appels
#[derive(Debug, Clone, Default)]
pub struct AlignmentVisualizer {
    config: VisualizerConfig,
}

impl AlignmentVisualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        Self { config }
    }

    pub fn with_policy(policy: AnnotationRowPolicy) -> Self {
        Self::new(VisualizerConfig {
            policy,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Rend une cellule ; toute valeur non textuelle est renvoyée telle quelle
    pub fn visualize(&self, value: &CellValue) -> CellOutput {
        match value.as_text() {
            Some(text) => CellOutput::Fragment(self.render_text(text)),
            None => CellOutput::PassThrough(value.clone()),
        }
    }

    /// Mises en évidence calculées sur les lignes d'origine
    pub fn highlights(&self, text: &str) -> HighlightMap {
        HighlightMap::scan(&split_lines(text))
    }

    /// Lignes affichées, chacune avec l'index utilisé pour la recherche
    /// des mises en évidence
    pub fn displayed_lines<'a>(&self, lines: &[&'a str]) -> Vec<(usize, &'a str)> {
        match self.config.policy {
            AnnotationRowPolicy::Reference => {
                let mut kept = lines.to_vec();
                if kept.len() > 2 {
                    kept.remove(2);
                }
                kept.into_iter().enumerate().collect()
            }
            AnnotationRowPolicy::PerGroup => lines
                .iter()
                .enumerate()
                .filter(|(row, _)| row % GROUP_SIZE != 2)
                .map(|(row, line)| (row, *line))
                .collect(),
        }
    }

    pub fn render_text(&self, text: &str) -> Node {
        let lines = split_lines(text);
        let highlights = HighlightMap::scan(&lines);
        let displayed = self.displayed_lines(&lines);

        debug!(
            lines = lines.len(),
            displayed = displayed.len(),
            marks = highlights.len(),
            "Rendu du bloc d'alignement"
        );

        let mut children = Vec::new();
        let mut plain = String::new();

        for (position, (row, line)) in displayed.iter().enumerate() {
            if position > 0 {
                flush_text(&mut children, &mut plain);
                children.push(Node::br());
            }

            for (column, ch) in line.chars().enumerate() {
                let classification = highlights.classify(*row, column);
                if classification.is_highlighted() {
                    flush_text(&mut children, &mut plain);
                    let style = self.config.palette.style_for(classification);
                    children.push(Node::span(style, ch));
                } else {
                    plain.push(ch);
                }
            }
        }
        flush_text(&mut children, &mut plain);

        Node::div(Style::new().with("fontFamily", "monospace"), children)
    }
}

/// Regroupe les caractères non marqués consécutifs en un seul noeud texte
fn flush_text(children: &mut Vec<Node>, plain: &mut String) {
    if !plain.is_empty() {
        children.push(Node::Text(std::mem::take(plain)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Tag;
    use serde_json::json;

    const HOT_SPAN: &str = "<span style=\"background-color:#FFCCCB;color:black\">";

    #[test]
    fn test_non_text_passes_through() {
        let visualizer = AlignmentVisualizer::default();
        for raw in [json!(null), json!(12.5), json!(["AC"])] {
            let value = CellValue::from(raw);
            assert_eq!(visualizer.visualize(&value), CellOutput::PassThrough(value.clone()));
        }
    }

    #[test]
    fn test_single_group_reference() {
        let visualizer = AlignmentVisualizer::default();
        let node = visualizer.render_text("AC\n.|\nHN\nGC");

        assert_eq!(node.text_content(), "AC\n.|\nGC");
        assert_eq!(
            node.to_html(),
            format!(
                "<div style=\"font-family:monospace\">{HOT_SPAN}A</span>C<br>{HOT_SPAN}.</span>|<br>GC</div>"
            )
        );
    }

    #[test]
    fn test_single_group_per_group_policy() {
        let visualizer = AlignmentVisualizer::with_policy(AnnotationRowPolicy::PerGroup);
        let node = visualizer.render_text("AC\n.|\nHN\nGC");

        // La requête garde son index d'origine : mutation seule, span sans style
        assert_eq!(
            node.to_html(),
            format!(
                "<div style=\"font-family:monospace\">{HOT_SPAN}A</span>C<br>{HOT_SPAN}.</span>|<br><span>G</span>C</div>"
            )
        );
    }

    #[test]
    fn test_plain_group_has_no_span() {
        let node = AlignmentVisualizer::default().render_text("ACGT\n||||\n    \nACGT");
        assert!(node.children().iter().all(|c| c.tag() != Some(Tag::Span)));
        assert_eq!(node.text_content(), "ACGT\n||||\nACGT");
    }

    #[test]
    fn test_cold_and_both_colors() {
        let node = AlignmentVisualizer::default().render_text("AC\n||\nCB\nAC");
        let spans: Vec<_> = node
            .children()
            .iter()
            .filter(|c| c.tag() == Some(Tag::Span))
            .collect();

        assert_eq!(spans.len(), 4);
        let backgrounds: Vec<_> = spans
            .iter()
            .map(|s| s.style().and_then(|st| st.get("backgroundColor")).unwrap_or(""))
            .collect();
        assert_eq!(backgrounds, vec!["#d0ddfa", "#e9d8fd", "#d0ddfa", "#e9d8fd"]);
    }

    #[test]
    fn test_overwrite_order() {
        let palette = Palette::default();
        let all = Classification { mutation: true, hot: true, cold: true, both: true };
        assert_eq!(palette.style_for(all).get("backgroundColor"), Some("#e9d8fd"));

        let hot_cold = Classification { cold: true, hot: true, ..Default::default() };
        assert_eq!(palette.style_for(hot_cold).get("backgroundColor"), Some("#FFCCCB"));

        let mutation = Classification { mutation: true, ..Default::default() };
        assert!(palette.style_for(mutation).is_empty());
    }

    #[test]
    fn test_multi_group_reference_quirk() {
        let text = "AC\n||\n  \nAC\nGT\n.|\nH \nAT";
        let node = AlignmentVisualizer::default().render_text(text);

        // Seule la première annotation disparaît
        assert_eq!(node.text_content(), "AC\n||\nAC\nGT\n.|\nH \nAT");
        assert!(node.to_html().contains(&format!("GT<br>{HOT_SPAN}.</span>|<br>{HOT_SPAN}H</span> <br>AT")));
    }

    #[test]
    fn test_multi_group_per_group() {
        let text = "AC\n||\n  \nAC\nGT\n.|\nH \nAT";
        let node = AlignmentVisualizer::with_policy(AnnotationRowPolicy::PerGroup).render_text(text);

        assert_eq!(node.text_content(), "AC\n||\nAC\nGT\n.|\nAT");
        assert!(node.to_html().ends_with(&format!(
            "{HOT_SPAN}G</span>T<br>{HOT_SPAN}.</span>|<br><span>A</span>T</div>"
        )));
    }

    #[test]
    fn test_short_input_keeps_all_lines() {
        let node = AlignmentVisualizer::default().render_text("AC\n.|");
        assert_eq!(node.text_content(), "AC\n.|");

        let empty = AlignmentVisualizer::default().render_text("");
        assert!(empty.children().is_empty());
    }

    #[test]
    fn test_custom_palette() {
        let config: VisualizerConfig =
            serde_json::from_value(json!({"palette": {"hot": "red"}})).unwrap();
        assert_eq!(config.palette.cold, "#d0ddfa");
        let node = AlignmentVisualizer::new(config).render_text("A\n|\nH\nA");
        assert!(node.to_html().contains("background-color:red"));
    }
}
