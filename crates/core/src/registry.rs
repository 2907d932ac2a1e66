//! Registre explicite des renderers et formateurs de cellules
//!
//! La configuration de la grille reçoit ce registre au démarrage et y
//! résout les noms référencés par les définitions de colonnes.

use crate::alignment::{AlignmentVisualizer, VisualizerConfig};
use crate::cell::{CellOutput, CellParams, CellValue};
use crate::error::{Result, VisError};
use crate::label::LabelAbbreviator;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Nom du renderer d'alignement
pub const ALIGNMENT_RENDERER: &str = "seqAlignmentVis";

/// Nom du formateur de méthode de mutagenèse
pub const MUTAGENESIS_FORMATTER: &str = "shortenMutagenesisMethod";

/// Produit le contenu d'une cellule
pub trait CellRenderer: Send + Sync {
    fn render(&self, params: &CellParams) -> CellOutput;
}

/// Transforme la valeur affichée d'une cellule
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: &CellValue) -> CellValue;
}

impl CellRenderer for AlignmentVisualizer {
    fn render(&self, params: &CellParams) -> CellOutput {
        self.visualize(&params.value)
    }
}

impl ValueFormatter for LabelAbbreviator {
    fn format(&self, value: &CellValue) -> CellValue {
        match value.as_text() {
            Some(label) => CellValue::Text(self.abbreviate(label).to_string()),
            None => value.clone(),
        }
    }
}

/// Table nom → renderer / formateur
#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn CellRenderer>>,
    formatters: HashMap<String, Box<dyn ValueFormatter>>,
}

impl RendererRegistry {
    /// Registre vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Registre avec le renderer d'alignement et le formateur de libellés
    pub fn with_defaults(config: VisualizerConfig) -> Self {
        let mut registry = Self::new();
        registry.register_renderer(ALIGNMENT_RENDERER, AlignmentVisualizer::new(config));
        registry.register_formatter(MUTAGENESIS_FORMATTER, LabelAbbreviator);
        registry
    }

    pub fn register_renderer(&mut self, name: &str, renderer: impl CellRenderer + 'static) {
        debug!(renderer = name, "Enregistrement du renderer");
        self.renderers.insert(name.to_string(), Box::new(renderer));
    }

    pub fn register_formatter(&mut self, name: &str, formatter: impl ValueFormatter + 'static) {
        debug!(formatter = name, "Enregistrement du formateur");
        self.formatters.insert(name.to_string(), Box::new(formatter));
    }

    pub fn has_renderer(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    pub fn has_formatter(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Noms des renderers, triés
    pub fn renderer_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Noms des formateurs, triés
    pub fn formatter_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.formatters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn renderer(&self, name: &str) -> Result<&dyn CellRenderer> {
        self.renderers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| VisError::UnknownRenderer(name.to_string()))
    }

    pub fn render(&self, name: &str, params: &CellParams) -> Result<CellOutput> {
        Ok(self.renderer(name)?.render(params))
    }

    pub fn format(&self, name: &str, value: &CellValue) -> Result<CellValue> {
        let formatter = self
            .formatters
            .get(name)
            .ok_or_else(|| VisError::UnknownFormatter(name.to_string()))?;
        Ok(formatter.format(value))
    }

    /// Rend toute une colonne en parallèle, dans l'ordre des valeurs
    pub fn render_column(&self, name: &str, values: &[CellValue]) -> Result<Vec<CellOutput>> {
        let renderer = self.renderer(name)?;
        let outputs = crate::log_operation!("render_column", {
            values
                .par_iter()
                .map(|value| renderer.render(&CellParams { value: value.clone() }))
                .collect::<Vec<_>>()
        });
        debug!(renderer = name, cells = outputs.len(), "Colonne rendue");
        Ok(outputs)
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("renderers", &self.renderer_names())
            .field("formatters", &self.formatter_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_registered() {
        let registry = RendererRegistry::with_defaults(VisualizerConfig::default());
        assert_eq!(registry.renderer_names(), vec![ALIGNMENT_RENDERER]);
        assert_eq!(registry.formatter_names(), vec![MUTAGENESIS_FORMATTER]);
    }

    #[test]
    fn test_render_by_name() {
        let registry = RendererRegistry::with_defaults(VisualizerConfig::default());
        let output = registry
            .render(ALIGNMENT_RENDERER, &CellParams::new("AC\n.|\nHN\nGC"))
            .unwrap();
        assert_eq!(output.fragment().unwrap().text_content(), "AC\n.|\nGC");
    }

    #[test]
    fn test_unknown_names() {
        let registry = RendererRegistry::new();
        let err = registry.render("missing", &CellParams::default()).unwrap_err();
        assert!(matches!(err, VisError::UnknownRenderer(ref name) if name == "missing"));
        assert!(err.is_unknown_name());
        assert!(matches!(
            registry.format("missing", &CellValue::empty()),
            Err(VisError::UnknownFormatter(_))
        ));
    }

    #[test]
    fn test_formatter_passes_non_text() {
        let registry = RendererRegistry::with_defaults(VisualizerConfig::default());
        let value = CellValue::from(json!(7));
        assert_eq!(registry.format(MUTAGENESIS_FORMATTER, &value).unwrap(), value);
        assert_eq!(
            registry
                .format(MUTAGENESIS_FORMATTER, &"Error-prone PCR (epPCR)".into())
                .unwrap(),
            CellValue::Text("epPCR".to_string())
        );
    }

    #[test]
    fn test_render_column_keeps_order() {
        let registry = RendererRegistry::with_defaults(VisualizerConfig::default());
        let values: Vec<CellValue> = (0..64usize)
            .map(|i| if i % 3 == 0 { CellValue::from(json!(i)) } else { CellValue::from(format!("{i}")) })
            .collect();

        let outputs = registry.render_column(ALIGNMENT_RENDERER, &values).unwrap();
        assert_eq!(outputs.len(), values.len());
        for (i, output) in outputs.iter().enumerate() {
            match output {
                CellOutput::PassThrough(value) => assert_eq!(value, &CellValue::from(json!(i))),
                CellOutput::Fragment(node) => assert_eq!(node.text_content(), i.to_string()),
            }
        }
    }
}
