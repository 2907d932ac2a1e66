//! CLI pour la visualisation des alignements

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use seqvis_core::AnnotationRowPolicy;
use std::path::PathBuf;

mod commands;
mod display;

use commands::{abbreviate, annotate, columns, render};

#[derive(Parser)]
#[command(name = "seqvis")]
#[command(about = "Visualisation des alignements de séquences pour la grille", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rend des blocs d'alignement (cible, marqueurs, annotation, requête)
    Render {
        /// Fichiers contenant un bloc chacun
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: RenderFormat,

        /// Suppression de la ligne d'annotation
        #[arg(long, value_enum, default_value = "reference")]
        policy: PolicyArg,

        /// Exporter en fichier
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Construit un bloc annoté depuis la sortie texte de l'aligneur
    Annotate {
        /// Fichier de sortie de l'aligneur
        #[arg(short, long)]
        input: PathBuf,

        /// Résidus hot (GoF), à partir de 1
        #[arg(long, value_delimiter = ',')]
        hot: Vec<usize>,

        /// Résidus cold (LoF), à partir de 1
        #[arg(long, value_delimiter = ',')]
        cold: Vec<usize>,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: AnnotateFormat,
    },

    /// Abrège des libellés de méthode de mutagenèse
    Abbreviate {
        /// Libellés à abréger
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Affiche les définitions de colonnes de la grille
    Columns,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum RenderFormat {
    Terminal,
    Json,
    Html,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum AnnotateFormat {
    Table,
    Json,
    Block,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum PolicyArg {
    Reference,
    PerGroup,
}

impl From<PolicyArg> for AnnotationRowPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Reference => AnnotationRowPolicy::Reference,
            PolicyArg::PerGroup => AnnotationRowPolicy::PerGroup,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    seqvis_core::init_logging_with_level(level);

    match cli.command {
        Commands::Render {
            input,
            format,
            policy,
            output,
        } => {
            render::run(input, format, policy.into(), output)?;
        }
        Commands::Annotate {
            input,
            hot,
            cold,
            format,
        } => {
            annotate::run(input, hot, cold, format)?;
        }
        Commands::Abbreviate { labels } => {
            abbreviate::run(&labels);
        }
        Commands::Columns => {
            columns::run()?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    Ok(pb)
}
