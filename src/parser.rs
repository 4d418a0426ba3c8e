use crate::{config::Config, model::ParsedDish};
use anyhow::{Context, Result};
use regex::Regex;
use tracing::trace;

/// Primary dish-line parser. Walks the recovered text line by line,
/// carrying the most recent category header, and emits a dish for every
/// line with a recognizable price token.
pub struct DishLineParser {
    price_re: Regex,
    dish_re: Regex,
    header_max_chars: usize,
}

impl DishLineParser {
    pub fn new(cfg: &Config) -> Result<Self> {
        let price_re = Regex::new(&cfg.parser.price_pattern)
            .with_context(|| format!("price pattern: {}", cfg.parser.price_pattern))?;
        // Lazy prefix keeps the name up to the first price token on the line.
        let dish_re = Regex::new(&format!("(.*?){}", cfg.parser.price_pattern))
            .with_context(|| "dish pattern")?;
        anyhow::ensure!(
            dish_re.captures_len() >= 3,
            "price pattern must capture the numeral in a group: {}",
            cfg.parser.price_pattern
        );
        Ok(Self {
            price_re,
            dish_re,
            header_max_chars: cfg.parser.header_max_chars,
        })
    }

    pub fn parse(&self, text: &str) -> Vec<ParsedDish> {
        let mut dishes = Vec::new();
        let mut current_category: Option<String> = None;

        for raw in text.split('\n') {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            // Header test runs before the price test: a short priceless
            // line or an all-caps line becomes the running category. This
            // can swallow short unpriced dish names; kept for parity with
            // menus already in production.
            if is_all_upper(line)
                || (line.chars().count() < self.header_max_chars
                    && !self.price_re.is_match(line))
            {
                trace!(header = line, "category header");
                current_category = Some(line.to_string());
                continue;
            }

            if let Some(caps) = self.dish_re.captures(line) {
                let name = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
                let numeral = caps.get(2).map_or("", |m| m.as_str()).replace(',', ".");
                if let Ok(price) = numeral.parse::<f64>() {
                    dishes.push(ParsedDish {
                        name,
                        price: Some(price),
                        category: current_category.clone(),
                    });
                }
            }
            // Lines matching neither rule are dropped silently.
        }

        dishes
    }
}

/// Degraded strategy for menus whose layout defeats the price heuristic:
/// every substantial line becomes an unpriced, uncategorized dish.
pub struct FallbackLineParser {
    skip_re: Regex,
    min_line_chars: usize,
}

impl FallbackLineParser {
    pub fn new(cfg: &Config) -> Result<Self> {
        let skip_re = Regex::new(&cfg.fallback.skip_pattern)
            .with_context(|| format!("fallback skip pattern: {}", cfg.fallback.skip_pattern))?;
        Ok(Self {
            skip_re,
            min_line_chars: cfg.fallback.min_line_chars,
        })
    }

    pub fn parse(&self, text: &str) -> Vec<ParsedDish> {
        let mut dishes = Vec::new();
        for raw in text.split('\n') {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if line.chars().count() < self.min_line_chars || self.skip_re.is_match(line) {
                continue;
            }
            dishes.push(ParsedDish {
                name: line.to_string(),
                price: None,
                category: None,
            });
        }
        dishes
    }
}

/// True when the line has at least one cased character and none of its
/// cased characters are lowercase (Python `str.isupper` semantics, which
/// the header heuristic was written against).
fn is_all_upper(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
