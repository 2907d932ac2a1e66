//! Commande d'export des définitions de colonnes

use anyhow::Result;
use seqvis_core::{ColumnSet, RendererRegistry, VisualizerConfig};

pub fn run() -> Result<()> {
    let registry = RendererRegistry::with_defaults(VisualizerConfig::default());
    let columns = ColumnSet::matched_sequences();
    columns.validate(&registry)?;

    println!("{}", columns.to_json()?);
    Ok(())
}
