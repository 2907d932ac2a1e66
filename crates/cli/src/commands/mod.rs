//! Sous-commandes du CLI

pub mod abbreviate;
pub mod annotate;
pub mod columns;
pub mod render;
