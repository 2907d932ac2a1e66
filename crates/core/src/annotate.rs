//! Construction du bloc d'alignement à partir de la sortie de l'aligneur
//!
//! L'aligneur produit des groupes de lignes `target`, marqueurs et `query`
//! préfixés par leur nom et leur coordonnée, séparés par une ligne vide.
//! On fusionne les groupes, on relève les mutations et on ajoute la ligne
//! d'annotation hot/cold attendue par le visualiseur.

use crate::alignment::{HighlightKind, MUTATION_MARKER};
use crate::error::{Result, VisError};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

const ROW_PREFIX: &str = r"^(query|target)?\s*\d*\s*";

/// Bloc prêt pour la grille
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedAlignment {
    pub target: String,
    pub marker: String,
    pub annotation: String,
    pub query: String,
    /// Positions des mutations, à partir de 1
    pub mismatches: Vec<usize>,
}

impl AnnotatedAlignment {
    /// Bloc à quatre lignes terminé par un saut de ligne
    pub fn block(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n",
            self.target, self.marker, self.annotation, self.query
        )
    }

    /// Nombre de colonnes annotées avec le code donné
    pub fn count(&self, kind: HighlightKind) -> usize {
        self.annotation
            .chars()
            .filter(|&c| HighlightKind::from_annotation(c) == Some(kind))
            .count()
    }
}

/// Annotateur d'alignements
#[derive(Debug, Clone)]
pub struct AlignmentAnnotator {
    prefix: Regex,
}

impl AlignmentAnnotator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            prefix: Regex::new(ROW_PREFIX)?,
        })
    }

    fn strip_prefix(&self, line: &str) -> String {
        self.prefix.replace(line, "").trim().to_string()
    }

    /// Fusionne les groupes et marque les résidus hot et cold (index à partir de 1)
    pub fn annotate(&self, raw: &str, hot: &[usize], cold: &[usize]) -> Result<AnnotatedAlignment> {
        let lines: Vec<&str> = raw.trim().split('\n').collect();

        let mut target = String::new();
        let mut marker = String::new();
        let mut query = String::new();

        for start in (0..lines.len()).step_by(4) {
            let (Some(marker_line), Some(query_line)) = (lines.get(start + 1), lines.get(start + 2)) else {
                return Err(VisError::MalformedAlignment(format!(
                    "groupe incomplet à la ligne {}",
                    start + 1
                )));
            };
            target.push_str(&self.strip_prefix(lines[start]));
            marker.push_str(&self.strip_prefix(marker_line));
            query.push_str(&self.strip_prefix(query_line));
        }

        let mismatches: Vec<usize> = marker
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == MUTATION_MARKER)
            .map(|(i, _)| i + 1)
            .collect();

        let len = marker.chars().count();
        let mut spots = vec![' '; len];

        for &index in hot {
            let slot = spot_at(&mut spots, index)?;
            *slot = HighlightKind::Hot.as_code();
        }
        for &index in cold {
            let slot = spot_at(&mut spots, index)?;
            *slot = match *slot {
                'H' | 'B' => HighlightKind::Both.as_code(),
                _ => HighlightKind::Cold.as_code(),
            };
        }

        debug!(
            groups = lines.len().div_ceil(4),
            columns = len,
            mismatches = mismatches.len(),
            "Alignement annoté"
        );

        Ok(AnnotatedAlignment {
            target,
            marker,
            annotation: spots.into_iter().collect(),
            query,
            mismatches,
        })
    }
}

fn spot_at(spots: &mut [char], index: usize) -> Result<&mut char> {
    let len = spots.len();
    if index == 0 || index > len {
        return Err(VisError::ResidueIndexOutOfRange { index, len });
    }
    Ok(&mut spots[index - 1])
}

/// Raccourci sans réutilisation de l'annotateur
pub fn annotate(raw: &str, hot: &[usize], cold: &[usize]) -> Result<AnnotatedAlignment> {
    AlignmentAnnotator::new()?.annotate(raw, hot, cold)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "target            0 MKTAY 5\n                  0 ||.|. 5\nquery             0 MKAAW 5\n\ntarget            5 LLG 8\n                  5 |.| 8\nquery             5 LAG 8\n";

    #[test]
    fn test_merges_groups_and_finds_mismatches() {
        let annotated = annotate(RAW, &[], &[]).unwrap();

        // La coordonnée de fin reste collée à la ligne
        assert_eq!(annotated.target, "MKTAY 5LLG 8");
        assert_eq!(annotated.marker, "||.|. 5|.| 8");
        assert_eq!(annotated.query, "MKAAW 5LAG 8");
        assert_eq!(annotated.mismatches, vec![3, 5, 9]);
        assert_eq!(annotated.annotation.trim(), "");
        assert_eq!(annotated.annotation.chars().count(), annotated.marker.chars().count());
    }

    #[test]
    fn test_hot_cold_and_both() {
        let annotated = annotate(RAW, &[1, 3], &[3, 4]).unwrap();
        assert!(annotated.annotation.starts_with("H BC"));
        assert_eq!(annotated.count(HighlightKind::Both), 1);
        assert_eq!(annotated.count(HighlightKind::Hot), 1);
        assert_eq!(annotated.count(HighlightKind::Cold), 1);
    }

    #[test]
    fn test_index_out_of_range() {
        assert!(matches!(
            annotate(RAW, &[0], &[]),
            Err(VisError::ResidueIndexOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            annotate(RAW, &[1], &[100]),
            Err(VisError::ResidueIndexOutOfRange { index: 100, len: 12 })
        ));
    }

    #[test]
    fn test_incomplete_group() {
        assert!(matches!(
            annotate("target 0 MK 2\n       0 || 2", &[], &[]),
            Err(VisError::MalformedAlignment(_))
        ));
    }

    #[test]
    fn test_block_layout() {
        let annotated = annotate("target 0 AC 2\n 0 .| 2\nquery 0 GC 2", &[1], &[]).unwrap();
        assert_eq!(annotated.block(), "AC 2\n.| 2\nH   \nGC 2\n");
    }
}
