use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub global: Global,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub recovery: Recovery,
    #[serde(default)]
    pub restrictions: Restrictions,
    #[serde(default)]
    pub parser: Parser,
    #[serde(default)]
    pub fallback: Fallback,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub debug: Debug,
    #[serde(default)]
    pub security: Security,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Global {
    pub print_summary: bool,
}
impl Default for Global {
    fn default() -> Self {
        Self {
            print_summary: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    pub out_dir: String,
}
impl Default for Paths {
    fn default() -> Self {
        Self {
            out_dir: "out".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    pub max_input_file_bytes: u64,
}
impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_file_bytes: 50 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recovery {
    pub normalize_newlines: bool,
    /// NFKC-normalize recovered text. Off by default: the parsing
    /// heuristics were tuned against raw extractor output.
    pub normalize_unicode: bool,
}
impl Default for Recovery {
    fn default() -> Self {
        Self {
            normalize_newlines: true,
            normalize_unicode: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restrictions {
    pub tags: Vec<TagPatterns>,
}

/// One dietary tag with its alternative keyword patterns. Patterns are
/// compiled case-insensitive and matched against the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagPatterns {
    pub tag: String,
    pub patterns: Vec<String>,
}

impl Default for Restrictions {
    fn default() -> Self {
        Self {
            tags: vec![
                TagPatterns {
                    tag: "vegetarian".into(),
                    patterns: vec!["vegetari[ao]n[ao]?s?".into()],
                },
                TagPatterns {
                    tag: "vegan".into(),
                    patterns: vec!["vegan[ao]?s?".into()],
                },
                TagPatterns {
                    tag: "gluten-free".into(),
                    patterns: vec!["sin gluten".into(), "gluten[-\\s]free".into()],
                },
                TagPatterns {
                    tag: "lactose-free".into(),
                    patterns: vec!["sin lactosa".into(), "lactose[-\\s]free".into()],
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parser {
    /// Price token: digits, a decimal separator, exactly two digits,
    /// then whitespace or a currency symbol. Group 1 is the numeral.
    pub price_pattern: String,
    pub header_max_chars: usize,
}
impl Default for Parser {
    fn default() -> Self {
        Self {
            price_pattern: "(\\d+[.,]\\d{2})[\\s€$]".into(),
            header_max_chars: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fallback {
    pub min_line_chars: usize,
    /// Lines fully matched by this pattern carry no dish name.
    pub skip_pattern: String,
}
impl Default for Fallback {
    fn default() -> Self {
        Self {
            min_line_chars: 3,
            skip_pattern: "^[\\d\\s,.;:!?]+$".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub write_menu_json: bool,
    pub write_report_json: bool,
    pub write_index_json: bool,
    pub menu_filename: String,
    pub report_filename: String,
    pub records_filename: String,
}
impl Default for Output {
    fn default() -> Self {
        Self {
            write_menu_json: true,
            write_report_json: true,
            write_index_json: true,
            menu_filename: "menu.json".into(),
            report_filename: "report.json".into(),
            records_filename: "records.json".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: true,
            file_path: "".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debug {
    pub dump_effective_config: bool,
}
impl Default for Debug {
    fn default() -> Self {
        Self {
            dump_effective_config: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    pub reject_url_inputs: bool,
}
impl Default for Security {
    fn default() -> Self {
        Self {
            reject_url_inputs: true,
        }
    }
}
