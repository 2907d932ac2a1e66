//! Commande d'abréviation des libellés

use seqvis_core::{abbreviate, MutagenesisMethod};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct LabelRow {
    #[tabled(rename = "Libellé")]
    label: String,
    #[tabled(rename = "Abréviation")]
    short: String,
    #[tabled(rename = "Connu")]
    known: bool,
}

pub fn run(labels: &[String]) {
    let rows: Vec<LabelRow> = labels
        .iter()
        .map(|label| LabelRow {
            label: label.clone(),
            short: abbreviate(label).to_string(),
            known: MutagenesisMethod::from_full_name(label).is_some(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
