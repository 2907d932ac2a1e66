//! Valeurs de cellules de la grille
//!
//! L'hôte fournit des valeurs JSON arbitraires. Les chaînes sont rendues,
//! tout le reste est renvoyé tel quel.

use crate::fragment::Node;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Valeur brute d'une cellule
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Texte (seul cas rendu par les renderers)
    Text(String),
    /// Toute autre valeur JSON, opaque
    Other(Value),
}

impl CellValue {
    /// Cellule vide
    pub fn empty() -> Self {
        CellValue::Other(Value::Null)
    }

    /// Retourne le texte si la valeur est une chaîne
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Other(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// Convertit en valeur JSON
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Text(text) => Value::String(text.clone()),
            CellValue::Other(value) => value.clone(),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => CellValue::Text(text),
            other => CellValue::Other(other),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(text) => serializer.serialize_str(text),
            CellValue::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(CellValue::from)
    }
}

/// Paramètres passés par la grille à un renderer de cellule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellParams {
    #[serde(default)]
    pub value: CellValue,
}

impl CellParams {
    pub fn new(value: impl Into<CellValue>) -> Self {
        Self { value: value.into() }
    }
}

/// Résultat d'un renderer de cellule
#[derive(Debug, Clone, PartialEq)]
pub enum CellOutput {
    /// Fragment d'interface à afficher
    Fragment(Node),
    /// Valeur d'entrée renvoyée sans modification
    PassThrough(CellValue),
}

impl CellOutput {
    pub fn fragment(&self) -> Option<&Node> {
        match self {
            CellOutput::Fragment(node) => Some(node),
            CellOutput::PassThrough(_) => None,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, CellOutput::PassThrough(_))
    }
}

impl Serialize for CellOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellOutput::Fragment(node) => {
                let mut state = serializer.serialize_struct("CellOutput", 3)?;
                state.serialize_field("kind", "fragment")?;
                state.serialize_field("fragment", node)?;
                state.serialize_field("html", &node.to_html())?;
                state.end()
            }
            CellOutput::PassThrough(value) => {
                let mut state = serializer.serialize_struct("CellOutput", 2)?;
                state.serialize_field("kind", "passthrough")?;
                state.serialize_field("value", value)?;
                state.end()
            }
        }
    }
}
