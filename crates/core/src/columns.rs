//! Définitions de colonnes de la grille
//!
//! Les colonnes référencent renderers et formateurs par leur nom ; un
//! `ColumnSet` se valide contre le registre avant d'être publié.

use crate::error::{Result, VisError};
use crate::registry::{RendererRegistry, ALIGNMENT_RENDERER, MUTAGENESIS_FORMATTER};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const FIELD_ALIGNMENT: &str = "sequence_alignment";
pub const FIELD_MUTAGENESIS: &str = "mutagenesis_method";
pub const FIELD_MISMATCHES: &str = "seq_align_mismatch_indices";

/// Définition d'une colonne, sérialisée au format attendu par la grille
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_renderer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_formatter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_height: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_style: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Colonne du bloc d'alignement
pub fn alignment_column() -> ColumnDef {
    let style = json!({
        "whiteSpace": "pre-wrap",
        "fontFamily": "monospace",
        "fontSize": 10,
        "lineHeight": "1.1",
        "padding": "5px",
    });

    ColumnDef {
        field: FIELD_ALIGNMENT.to_string(),
        cell_renderer: Some(ALIGNMENT_RENDERER.to_string()),
        auto_height: Some(true),
        cell_style: style.as_object().cloned(),
        width: Some(7000),
        ..Default::default()
    }
}

/// Colonne de la méthode de mutagenèse, abrégée
pub fn mutagenesis_method_column() -> ColumnDef {
    ColumnDef {
        field: FIELD_MUTAGENESIS.to_string(),
        header_name: Some("Mutagenesis Method".to_string()),
        value_formatter: Some(MUTAGENESIS_FORMATTER.to_string()),
        width: Some(90),
        ..Default::default()
    }
}

/// Positions des mutations
pub fn mismatches_column() -> ColumnDef {
    ColumnDef {
        field: FIELD_MISMATCHES.to_string(),
        header_name: Some("Mismatched Residue".to_string()),
        tooltip_field: Some(FIELD_MISMATCHES.to_string()),
        width: Some(300),
        ..Default::default()
    }
}

/// Ensemble ordonné de colonnes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSet {
    pub columns: Vec<ColumnDef>,
}

impl ColumnSet {
    /// Colonnes de la table des séquences correspondantes
    pub fn matched_sequences() -> Self {
        Self {
            columns: vec![
                mutagenesis_method_column(),
                mismatches_column(),
                alignment_column(),
            ],
        }
    }

    /// Vérifie que chaque nom référencé est enregistré
    pub fn validate(&self, registry: &RendererRegistry) -> Result<()> {
        for column in &self.columns {
            if let Some(name) = &column.cell_renderer {
                if !registry.has_renderer(name) {
                    return Err(VisError::UnknownRenderer(name.clone()));
                }
            }
            if let Some(name) = &column.value_formatter {
                if !registry.has_formatter(name) {
                    return Err(VisError::UnknownFormatter(name.clone()));
                }
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::VisualizerConfig;

    #[test]
    fn test_alignment_column_json() {
        let value = serde_json::to_value(alignment_column()).unwrap();
        assert_eq!(value["cellRenderer"], "seqAlignmentVis");
        assert_eq!(value["autoHeight"], true);
        assert_eq!(value["cellStyle"]["whiteSpace"], "pre-wrap");
        assert_eq!(value["cellStyle"]["fontSize"], 10);
        assert_eq!(value["width"], 7000);
        assert!(value.get("valueFormatter").is_none());
    }

    #[test]
    fn test_validate_against_registry() {
        let columns = ColumnSet::matched_sequences();
        assert!(columns
            .validate(&RendererRegistry::with_defaults(VisualizerConfig::default()))
            .is_ok());
        assert!(matches!(
            columns.validate(&RendererRegistry::new()),
            Err(VisError::UnknownFormatter(_))
        ));
    }

    #[test]
    fn test_column_set_is_array() {
        let json = ColumnSet::matched_sequences().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }
}
