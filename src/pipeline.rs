use crate::{
    config::Config,
    model::ExtractedMenu,
    parser::{DishLineParser, FallbackLineParser},
    recover,
    report::{ExtractionReport, ParseStrategy},
    restrictions::RestrictionTagger,
};
use anyhow::Result;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

pub struct ExtractOutput {
    pub menu: ExtractedMenu,
    pub report: ExtractionReport,
}

/// One extraction runs to completion per uploaded file: recover, tag,
/// parse, fall back if the primary pass found nothing. No retries, no
/// shared state between invocations.
pub struct Extractor {
    cfg: Config,
    tagger: RestrictionTagger,
    primary: DishLineParser,
    fallback: FallbackLineParser,
}

impl Extractor {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self {
            cfg: cfg.clone(),
            tagger: RestrictionTagger::new(cfg)?,
            primary: DishLineParser::new(cfg)?,
            fallback: FallbackLineParser::new(cfg)?,
        })
    }

    /// Never fails: a PDF that text recovery cannot read degrades to an
    /// empty menu so the upload caller can still record the file.
    pub fn extract(&self, bytes: &[u8]) -> ExtractOutput {
        let text = match recover::recover_text(&self.cfg, bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!("text recovery failed; storing menu without dishes: {err}");
                return ExtractOutput {
                    menu: ExtractedMenu::empty(),
                    report: ExtractionReport {
                        recovery_ok: false,
                        recovered_chars: 0,
                        strategy: ParseStrategy::None,
                        dish_count: 0,
                        priced_dish_count: 0,
                        category_count: 0,
                        restriction_tags: Vec::new(),
                        warnings: vec![err.to_string()],
                    },
                };
            }
        };

        self.extract_from_text(&text)
    }

    /// Parse already-recovered text. Split out so the heuristics are
    /// testable without building PDFs.
    pub fn extract_from_text(&self, text: &str) -> ExtractOutput {
        let menu_restrictions = self.tagger.detect(text);
        debug!(?menu_restrictions, "restriction tags");

        let mut warnings = Vec::new();
        let mut strategy = ParseStrategy::Primary;
        let mut dishes = self.primary.parse(text);

        if dishes.is_empty() {
            dishes = self.fallback.parse(text);
            strategy = if dishes.is_empty() {
                ParseStrategy::None
            } else {
                warnings.push("no priced dish lines; used fallback line splitter".to_string());
                ParseStrategy::Fallback
            };
        }

        let priced_dish_count = dishes.iter().filter(|d| d.price.is_some()).count();
        let category_count = dishes
            .iter()
            .filter_map(|d| d.category.as_deref())
            .collect::<BTreeSet<_>>()
            .len();

        info!(
            dish_count = dishes.len(),
            priced_dish_count,
            tags = menu_restrictions.len(),
            ?strategy,
            "extraction finished"
        );

        ExtractOutput {
            report: ExtractionReport {
                recovery_ok: true,
                recovered_chars: text.chars().count(),
                strategy,
                dish_count: dishes.len(),
                priced_dish_count,
                category_count,
                restriction_tags: menu_restrictions.clone(),
                warnings,
            },
            menu: ExtractedMenu {
                dishes,
                menu_restrictions,
            },
        }
    }
}
