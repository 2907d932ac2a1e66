//! seqvis Core Library
//!
//! Renderers de cellules pour la grille des alignements de séquences :
//! visualisation colorée des blocs d'alignement et abréviation des
//! méthodes de mutagenèse.

pub mod alignment;
pub mod annotate;
pub mod cell;
pub mod columns;
pub mod error;
pub mod fragment;
pub mod label;
pub mod logging;
pub mod registry;

// Réexportations principales
pub use alignment::{
    AlignmentVisualizer, AnnotationRowPolicy, Classification, HighlightKind, HighlightMap, Mark,
    Palette, VisualizerConfig,
};
pub use annotate::{annotate, AlignmentAnnotator, AnnotatedAlignment};
pub use cell::{CellOutput, CellParams, CellValue};
pub use columns::{ColumnDef, ColumnSet};
pub use error::{Result, VisError};
pub use fragment::{Node, Style, Tag};
pub use label::{abbreviate, LabelAbbreviator, MutagenesisMethod};
pub use logging::{init_logging, init_logging_with_level};
// Les macros log_operation et log_error sont exportées à la racine du crate
pub use registry::{
    CellRenderer, RendererRegistry, ValueFormatter, ALIGNMENT_RENDERER, MUTAGENESIS_FORMATTER,
};
