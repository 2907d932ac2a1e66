//! Commande d'annotation hot/cold

use crate::AnnotateFormat;
use anyhow::{Context, Result};
use seqvis_core::{AlignmentAnnotator, AnnotatedAlignment, HighlightKind};
use std::path::PathBuf;

pub fn run(input: PathBuf, hot: Vec<usize>, cold: Vec<usize>, format: AnnotateFormat) -> Result<()> {
    let raw = std::fs::read_to_string(&input)
        .with_context(|| format!("Lecture impossible: {}", input.display()))?;

    let annotated = AlignmentAnnotator::new()?
        .annotate(&raw, &hot, &cold)
        .with_context(|| format!("Annotation de {}", input.display()))?;

    match format {
        AnnotateFormat::Table => print_table(&annotated),
        AnnotateFormat::Json => print_json(&annotated)?,
        AnnotateFormat::Block => print!("{}", annotated.block()),
    }

    Ok(())
}

fn print_table(annotated: &AnnotatedAlignment) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct SummaryRow {
        #[tabled(rename = "Colonnes")]
        columns: usize,
        #[tabled(rename = "Mutations")]
        mutations: usize,
        #[tabled(rename = "Hot")]
        hot: usize,
        #[tabled(rename = "Cold")]
        cold: usize,
        #[tabled(rename = "Both")]
        both: usize,
        #[tabled(rename = "Positions")]
        positions: String,
    }

    let row = SummaryRow {
        columns: annotated.marker.chars().count(),
        mutations: annotated.mismatches.len(),
        hot: annotated.count(HighlightKind::Hot),
        cold: annotated.count(HighlightKind::Cold),
        both: annotated.count(HighlightKind::Both),
        positions: annotated
            .mismatches
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    };

    println!("{}", Table::new([row]));
    println!();
    print!("{}", annotated.block());
}

fn print_json(annotated: &AnnotatedAlignment) -> Result<()> {
    let data = serde_json::json!({
        "block": annotated.block(),
        "mismatches": annotated.mismatches,
        "hot": annotated.count(HighlightKind::Hot),
        "cold": annotated.count(HighlightKind::Cold),
        "both": annotated.count(HighlightKind::Both),
    });
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
