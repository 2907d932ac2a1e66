//! Modèles de données pour l'API web

use seqvis_core::{
    AlignmentAnnotator, AnnotatedAlignment, CellOutput, CellValue, ColumnSet, HighlightKind,
    RendererRegistry, VisError,
};
use serde::{Deserialize, Serialize};

/// État global de l'application
#[derive(Debug)]
pub struct AppState {
    pub tera: tera::Tera,
    pub registry: RendererRegistry,
    pub columns: ColumnSet,
    pub annotator: AlignmentAnnotator,
    pub config: crate::config::AppConfig,
}

impl AppState {
    /// Enregistre les renderers et valide les colonnes publiées
    pub fn new(config: crate::config::AppConfig, tera: tera::Tera) -> Result<Self, VisError> {
        let registry = RendererRegistry::with_defaults(config.visualizer.clone());
        let columns = ColumnSet::matched_sequences();
        columns.validate(&registry)?;

        Ok(Self {
            tera,
            registry,
            columns,
            annotator: AlignmentAnnotator::new()?,
            config,
        })
    }
}

/// Requête de formatage d'une valeur
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRequest {
    #[serde(default)]
    pub value: CellValue,
}

/// Réponse de formatage
#[derive(Debug, Clone, Serialize)]
pub struct FormatResponse {
    pub value: CellValue,
}

/// Rendu d'une colonne entière
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRenderRequest {
    pub values: Vec<CellValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchRenderResponse {
    pub outputs: Vec<CellOutput>,
}

/// Requête d'annotation hot/cold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateRequest {
    pub alignment: String,
    #[serde(default)]
    pub hot: Vec<usize>,
    #[serde(default)]
    pub cold: Vec<usize>,
}

/// Réponse d'annotation
#[derive(Debug, Clone, Serialize)]
pub struct AnnotateResponse {
    pub block: String,
    pub mismatches: Vec<usize>,
    pub hot: usize,
    pub cold: usize,
    pub both: usize,
}

impl From<AnnotatedAlignment> for AnnotateResponse {
    fn from(annotated: AnnotatedAlignment) -> Self {
        Self {
            block: annotated.block(),
            hot: annotated.count(HighlightKind::Hot),
            cold: annotated.count(HighlightKind::Cold),
            both: annotated.count(HighlightKind::Both),
            mismatches: annotated.mismatches,
        }
    }
}

/// Réponse d'erreur standard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: String, code: u16) -> Self {
        Self {
            error,
            details: None,
            code,
        }
    }

    pub fn with_details(error: String, details: String, code: u16) -> Self {
        Self {
            error,
            details: Some(details),
            code,
        }
    }
}
