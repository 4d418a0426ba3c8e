use serde::{Deserialize, Serialize};

/// Which parsing strategy produced the dish list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStrategy {
    Primary,
    Fallback,
    None,
}

/// Per-extraction diagnostics written next to the menu output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub recovery_ok: bool,
    pub recovered_chars: usize,
    pub strategy: ParseStrategy,
    pub dish_count: usize,
    pub priced_dish_count: usize,
    pub category_count: usize,
    pub restriction_tags: Vec<String>,
    pub warnings: Vec<String>,
}
