//! Types d'erreurs pour la bibliothèque de visualisation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisError {
    #[error("Alignement mal formé: {0}")]
    MalformedAlignment(String),

    #[error("Index de résidu hors plage: {index} pas dans [1, {len}]")]
    ResidueIndexOutOfRange { index: usize, len: usize },

    #[error("Renderer inconnu: {0}")]
    UnknownRenderer(String),

    #[error("Formateur inconnu: {0}")]
    UnknownFormatter(String),

    #[error("Motif invalide: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VisError {
    /// Vrai si l'erreur vient d'un nom non enregistré
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, VisError::UnknownRenderer(_) | VisError::UnknownFormatter(_))
    }
}

pub type Result<T> = std::result::Result<T, VisError>;
