//! Affichage en terminal

pub mod terminal;

pub use terminal::fragment_to_ansi;
