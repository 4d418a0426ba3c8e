use cuchara::{config::Config, pipeline::Extractor, report::ParseStrategy};

#[test]
fn corrupt_pdf_degrades_to_empty_menu() {
    let cfg = Config::default();
    let extractor = Extractor::new(&cfg).unwrap();

    let out = extractor.extract(b"definitely not a pdf container");
    assert!(out.menu.dishes.is_empty());
    assert!(out.menu.menu_restrictions.is_empty());
    assert!(!out.report.recovery_ok);
    assert_eq!(out.report.strategy, ParseStrategy::None);
    assert!(!out.report.warnings.is_empty());
}

#[test]
fn empty_text_yields_empty_menu() {
    let cfg = Config::default();
    let extractor = Extractor::new(&cfg).unwrap();

    let out = extractor.extract_from_text("");
    assert!(out.menu.dishes.is_empty());
    assert!(out.menu.menu_restrictions.is_empty());
    assert_eq!(out.report.strategy, ParseStrategy::None);
    assert_eq!(out.report.dish_count, 0);
}

#[test]
fn tags_and_dishes_come_from_one_pass() {
    let cfg = Config::default();
    let extractor = Extractor::new(&cfg).unwrap();

    let out = extractor.extract_from_text(
        "MENU VEGETARIANO\nLasaña de verduras 9,50€\nTarta sin gluten 4,00€",
    );
    assert_eq!(out.report.strategy, ParseStrategy::Primary);
    assert_eq!(out.menu.dishes.len(), 2);
    assert_eq!(
        out.menu.dishes[0].category.as_deref(),
        Some("MENU VEGETARIANO")
    );
    assert_eq!(
        out.menu.menu_restrictions,
        vec!["vegetarian".to_string(), "gluten-free".to_string()]
    );
    assert_eq!(out.report.dish_count, 2);
    assert_eq!(out.report.priced_dish_count, 2);
    assert_eq!(out.report.category_count, 1);
}

#[test]
fn restriction_tags_are_document_global() {
    let cfg = Config::default();
    let extractor = Extractor::new(&cfg).unwrap();

    // The tag set reflects the whole document even when the keyword is on
    // a line that never becomes a dish.
    let out = extractor.extract_from_text("opciones veganas disponibles\nPaella 11,00€");
    assert_eq!(out.menu.dishes.len(), 1);
    assert_eq!(out.menu.menu_restrictions, vec!["vegan".to_string()]);
}
