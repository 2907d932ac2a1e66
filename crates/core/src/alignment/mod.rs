//! Visualisation des blocs d'alignement de séquences
//!
//! Un bloc est une suite de groupes de quatre lignes (cible, marqueurs,
//! annotation, requête). Le visualiseur colore les mutations et les
//! positions « hot », « cold » ou les deux, puis masque la ligne
//! d'annotation.

pub mod block;
pub mod highlight;
pub mod visualizer;

pub use block::{split_lines, AlignmentGroup, GroupIter, MUTATION_MARKER};
pub use highlight::{Classification, HighlightKind, HighlightMap, Mark};
pub use visualizer::{AlignmentVisualizer, AnnotationRowPolicy, Palette, VisualizerConfig};
