//! Abréviation des libellés de méthode de mutagenèse

use serde::{Deserialize, Serialize};
use std::fmt;

/// Méthodes de mutagenèse connues de la grille
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutagenesisMethod {
    #[serde(rename = "Error-prone PCR (epPCR)")]
    EpPcr,
    #[serde(rename = "Site saturation mutagenesis (SSM)")]
    Ssm,
}

impl MutagenesisMethod {
    pub const ALL: [MutagenesisMethod; 2] = [MutagenesisMethod::EpPcr, MutagenesisMethod::Ssm];

    /// Libellé complet
    pub fn full_name(self) -> &'static str {
        match self {
            MutagenesisMethod::EpPcr => "Error-prone PCR (epPCR)",
            MutagenesisMethod::Ssm => "Site saturation mutagenesis (SSM)",
        }
    }

    /// Code court affiché dans la grille
    pub fn abbreviation(self) -> &'static str {
        match self {
            MutagenesisMethod::EpPcr => "epPCR",
            MutagenesisMethod::Ssm => "SSM",
        }
    }

    /// Correspondance exacte, sensible à la casse
    pub fn from_full_name(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.full_name() == label)
    }
}

impl fmt::Display for MutagenesisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Retourne le code court d'un libellé connu, sinon le libellé inchangé
pub fn abbreviate(label: &str) -> &str {
    match MutagenesisMethod::from_full_name(label) {
        Some(method) => method.abbreviation(),
        None => label,
    }
}

/// Formateur de cellule pour la colonne méthode de mutagenèse
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelAbbreviator;

impl LabelAbbreviator {
    pub fn abbreviate<'a>(&self, label: &'a str) -> &'a str {
        abbreviate(label)
    }
}
