use crate::config::Config;
use anyhow::{Context, Result};
use regex::RegexBuilder;

/// Detects dietary tags against the whole recovered document. Tags and
/// their keyword patterns come from `[restrictions]` in the config, so a
/// new tag is a configuration change rather than a code change.
pub struct RestrictionTagger {
    tags: Vec<CompiledTag>,
}

struct CompiledTag {
    tag: String,
    patterns: Vec<regex::Regex>,
}

impl RestrictionTagger {
    pub fn new(cfg: &Config) -> Result<Self> {
        let mut tags = Vec::with_capacity(cfg.restrictions.tags.len());
        for entry in &cfg.restrictions.tags {
            let mut patterns = Vec::with_capacity(entry.patterns.len());
            for p in &entry.patterns {
                let re = RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("restriction pattern for {:?}: {p}", entry.tag))?;
                patterns.push(re);
            }
            tags.push(CompiledTag {
                tag: entry.tag.clone(),
                patterns,
            });
        }
        Ok(Self { tags })
    }

    /// Each configured tag is tested independently; a tag is emitted at
    /// most once, in declared order, regardless of match count.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let mut found = Vec::new();
        for tag in &self.tags {
            if tag.patterns.iter().any(|re| re.is_match(text))
                && !found.contains(&tag.tag)
            {
                found.push(tag.tag.clone());
            }
        }
        found
    }
}
