//! Classification des positions (ligne, colonne) d'un bloc

use super::block::{AlignmentGroup, GroupIter, MUTATION_MARKER};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type de mise en évidence d'une position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Mutation,
    Hot,
    Cold,
    /// Hot et cold à la fois
    Both,
}

impl HighlightKind {
    /// Lit un caractère de la ligne d'annotation
    pub fn from_annotation(code: char) -> Option<Self> {
        match code {
            'H' => Some(HighlightKind::Hot),
            'C' => Some(HighlightKind::Cold),
            'B' => Some(HighlightKind::Both),
            _ => None,
        }
    }

    pub fn as_code(self) -> char {
        match self {
            HighlightKind::Mutation => 'M',
            HighlightKind::Hot => 'H',
            HighlightKind::Cold => 'C',
            HighlightKind::Both => 'B',
        }
    }
}

/// Position enregistrée ; `kind` vaut `None` pour la ligne requête d'une
/// colonne annotée, sans effet visuel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub row: usize,
    pub column: usize,
    pub kind: Option<HighlightKind>,
}

/// Ensemble des types présents à une position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub mutation: bool,
    pub hot: bool,
    pub cold: bool,
    pub both: bool,
}

impl Classification {
    pub fn is_highlighted(&self) -> bool {
        self.mutation || self.hot || self.cold || self.both
    }

    fn insert(&mut self, kind: HighlightKind) {
        match kind {
            HighlightKind::Mutation => self.mutation = true,
            HighlightKind::Hot => self.hot = true,
            HighlightKind::Cold => self.cold = true,
            HighlightKind::Both => self.both = true,
        }
    }
}

/// Mises en évidence d'un bloc, indexées par ligne d'origine
#[derive(Debug, Clone, Default)]
pub struct HighlightMap {
    marks: Vec<Mark>,
    index: HashMap<(usize, usize), Classification>,
}

impl HighlightMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parcourt les groupes et enregistre mutations puis annotations
    pub fn scan(lines: &[&str]) -> Self {
        let mut map = Self::new();
        for group in GroupIter::new(lines) {
            map.scan_group(&group);
        }
        map
    }

    fn scan_group(&mut self, group: &AlignmentGroup<'_>) {
        let marker: Vec<char> = group.marker.chars().collect();

        // La ligne d'annotation n'est jamais marquée
        for column in 0..group.annotation.chars().count() {
            if marker.get(column) == Some(&MUTATION_MARKER) {
                let kind = Some(HighlightKind::Mutation);
                self.record(group.target_row(), column, kind);
                self.record(group.marker_row(), column, kind);
                self.record(group.query_row(), column, kind);
            }
        }

        for (column, code) in group.annotation.chars().enumerate() {
            if let Some(kind) = HighlightKind::from_annotation(code) {
                self.record(group.target_row(), column, Some(kind));
                self.record(group.marker_row(), column, Some(kind));
                self.record(group.query_row(), column, None);
            }
        }
    }

    pub fn record(&mut self, row: usize, column: usize, kind: Option<HighlightKind>) {
        self.marks.push(Mark { row, column, kind });
        let entry = self.index.entry((row, column)).or_default();
        if let Some(kind) = kind {
            entry.insert(kind);
        }
    }

    pub fn classify(&self, row: usize, column: usize) -> Classification {
        self.index.get(&(row, column)).copied().unwrap_or_default()
    }

    pub fn contains(&self, row: usize, column: usize, kind: HighlightKind) -> bool {
        self.marks
            .iter()
            .any(|m| m.row == row && m.column == column && m.kind == Some(kind))
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Positions effectivement mises en évidence, triées
    pub fn highlighted_positions(&self) -> Vec<(usize, usize)> {
        let mut positions: Vec<_> = self
            .index
            .iter()
            .filter(|(_, c)| c.is_highlighted())
            .map(|(pos, _)| *pos)
            .collect();
        positions.sort_unstable();
        positions
    }
}
