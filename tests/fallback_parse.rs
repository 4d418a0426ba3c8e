use cuchara::{config::Config, pipeline::Extractor, report::ParseStrategy};
use regex::Regex;

#[test]
fn fallback_runs_when_no_price_lines_exist() {
    let cfg = Config::default();
    let extractor = Extractor::new(&cfg).unwrap();

    let out = extractor.extract_from_text(
        "Nuestra carta\nPan con tomate\nCalamares a la romana\n12\n!!\n...",
    );
    assert_eq!(out.report.strategy, ParseStrategy::Fallback);

    let names: Vec<&str> = out.menu.dishes.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Nuestra carta", "Pan con tomate", "Calamares a la romana"]
    );
    for dish in &out.menu.dishes {
        assert_eq!(dish.price, None);
        assert_eq!(dish.category, None);
    }
}

#[test]
fn fallback_output_obeys_skip_rules() {
    let cfg = Config::default();
    let extractor = Extractor::new(&cfg).unwrap();
    let skip = Regex::new(&cfg.fallback.skip_pattern).unwrap();

    let out = extractor.extract_from_text("ab\n1,2;3\nEnsalada mixta\n   \n:!?");
    assert_eq!(out.report.strategy, ParseStrategy::Fallback);
    for dish in &out.menu.dishes {
        assert!(dish.name.chars().count() >= cfg.fallback.min_line_chars);
        assert!(!skip.is_match(&dish.name));
    }
    assert_eq!(out.menu.dishes.len(), 1);
    assert_eq!(out.menu.dishes[0].name, "Ensalada mixta");
}

#[test]
fn fallback_does_not_run_when_primary_found_dishes() {
    let cfg = Config::default();
    let extractor = Extractor::new(&cfg).unwrap();

    let out = extractor.extract_from_text("Sopa 5,00€\nlinea sin precio que seria un plato");
    assert_eq!(out.report.strategy, ParseStrategy::Primary);
    assert_eq!(out.menu.dishes.len(), 1);
    assert_eq!(out.menu.dishes[0].name, "Sopa");
}

#[test]
fn unparsable_text_yields_no_dishes_and_no_error() {
    let cfg = Config::default();
    let extractor = Extractor::new(&cfg).unwrap();

    let out = extractor.extract_from_text("..\n1 2 3\n;;");
    assert_eq!(out.report.strategy, ParseStrategy::None);
    assert!(out.menu.dishes.is_empty());
}
