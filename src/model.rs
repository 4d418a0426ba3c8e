use serde::{Deserialize, Serialize};

/// One detected menu line item. `price` is absent when no price token was
/// found on the line; `category` is the most recent header seen above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDish {
    pub name: String,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// Structured output of one extraction run.
///
/// `menu_restrictions` is document-global: tags are detected against the
/// whole recovered text, not per dish, and each tag appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMenu {
    pub dishes: Vec<ParsedDish>,
    pub menu_restrictions: Vec<String>,
}

impl ExtractedMenu {
    pub fn empty() -> Self {
        Self::default()
    }
}
