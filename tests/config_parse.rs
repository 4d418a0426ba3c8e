use cuchara::config::Config;

#[test]
fn parse_example_config() {
    let raw = include_str!("../cuchara.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.restrictions.tags.len(), 4);
    assert_eq!(cfg.parser.header_max_chars, 30);
    assert!(!cfg.paths.out_dir.is_empty());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: Config = toml::from_str("").expect("parse TOML");
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.fallback.min_line_chars, 3);
    assert_eq!(
        cfg.restrictions.tags.iter().map(|t| t.tag.as_str()).collect::<Vec<_>>(),
        vec!["vegetarian", "vegan", "gluten-free", "lactose-free"]
    );
}
