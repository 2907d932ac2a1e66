//! Commande de rendu des blocs d'alignement

use crate::display::fragment_to_ansi;
use crate::{create_progress_bar, RenderFormat};
use anyhow::{Context, Result};
use seqvis_core::{
    AlignmentVisualizer, AnnotationRowPolicy, CellOutput, CellValue, VisualizerConfig,
};
use std::path::PathBuf;
use tracing::info;

/// Bloc rendu et son fichier d'origine
struct Rendered {
    source: PathBuf,
    output: CellOutput,
}

pub fn run(
    inputs: Vec<PathBuf>,
    format: RenderFormat,
    policy: AnnotationRowPolicy,
    output: Option<PathBuf>,
) -> Result<()> {
    let visualizer = AlignmentVisualizer::new(VisualizerConfig {
        policy,
        ..Default::default()
    });

    let pb = if inputs.len() > 1 {
        Some(create_progress_bar(inputs.len() as u64, "Rendu en cours...")?)
    } else {
        None
    };

    let mut rendered = Vec::with_capacity(inputs.len());
    for source in inputs {
        let content = std::fs::read_to_string(&source)
            .with_context(|| format!("Lecture impossible: {}", source.display()))?;
        info!(file = %source.display(), bytes = content.len(), "Bloc chargé");

        let output = visualizer.visualize(&CellValue::Text(content));
        rendered.push(Rendered { source, output });

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_with_message(String::from("Rendu terminé"));
    }

    let text = match format {
        RenderFormat::Terminal => render_terminal(&rendered),
        RenderFormat::Json => render_json(&rendered)?,
        RenderFormat::Html => render_html(&rendered),
    };

    if let Some(output) = output {
        std::fs::write(&output, text)?;
        println!("Résultat écrit dans: {}", output.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn render_terminal(rendered: &[Rendered]) -> String {
    rendered
        .iter()
        .map(|r| {
            let body = match &r.output {
                CellOutput::Fragment(node) => fragment_to_ansi(node),
                CellOutput::PassThrough(value) => value.to_json().to_string(),
            };
            if rendered.len() > 1 {
                format!("── {} ──\n{}", r.source.display(), body)
            } else {
                body
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_json(rendered: &[Rendered]) -> Result<String> {
    let data: Vec<serde_json::Value> = rendered
        .iter()
        .map(|r| -> Result<serde_json::Value> {
            Ok(serde_json::json!({
                "source": r.source.display().to_string(),
                "output": serde_json::to_value(&r.output)?,
            }))
        })
        .collect::<Result<_>>()?;

    Ok(serde_json::to_string_pretty(&data)?)
}

fn render_html(rendered: &[Rendered]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Sequence Alignment</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        table {{ border-collapse: collapse; }}
        th, td {{ border: 1px solid #ddd; padding: 5px; text-align: left; vertical-align: top; }}
        td.alignment {{ white-space: pre-wrap; font-size: 10px; line-height: 1.1; }}
    </style>
</head>
<body>
    <h1>Sequence Alignment</h1>
    <table>
        <tr><th>Source</th><th>Alignment</th></tr>
        {}
    </table>
</body>
</html>
"#,
        rendered
            .iter()
            .map(|r| {
                let cell = match r.output.fragment() {
                    Some(node) => node.to_html(),
                    None => String::new(),
                };
                format!(
                    "<tr><td>{}</td><td class=\"alignment\">{}</td></tr>",
                    r.source.display(),
                    cell
                )
            })
            .collect::<Vec<_>>()
            .join("\n        ")
    )
}
