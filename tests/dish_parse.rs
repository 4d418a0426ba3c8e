use cuchara::{config::Config, parser::DishLineParser};

#[test]
fn comma_price_is_normalized() {
    let cfg = Config::default();
    let parser = DishLineParser::new(&cfg).unwrap();

    let dishes = parser.parse("Sopa de tomate 8,50€");
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name, "Sopa de tomate");
    assert_eq!(dishes[0].price, Some(8.50));
    assert_eq!(dishes[0].category, None);
}

#[test]
fn categories_propagate_until_next_header() {
    let cfg = Config::default();
    let parser = DishLineParser::new(&cfg).unwrap();

    let dishes = parser.parse("ENTRANTES\nSopa 5,00€\nPOSTRES\nFlan 3,50€");
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].name, "Sopa");
    assert_eq!(dishes[0].price, Some(5.00));
    assert_eq!(dishes[0].category.as_deref(), Some("ENTRANTES"));
    assert_eq!(dishes[1].name, "Flan");
    assert_eq!(dishes[1].price, Some(3.50));
    assert_eq!(dishes[1].category.as_deref(), Some("POSTRES"));
}

#[test]
fn all_caps_line_with_price_is_still_a_header() {
    let cfg = Config::default();
    let parser = DishLineParser::new(&cfg).unwrap();

    // Header test runs before the price test.
    let dishes = parser.parse("MENU DEL DIA 15,00€\nPaella mixta 12,00€");
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name, "Paella mixta");
    assert_eq!(dishes[0].category.as_deref(), Some("MENU DEL DIA 15,00€"));
}

#[test]
fn price_needs_trailing_whitespace_or_currency() {
    let cfg = Config::default();
    let parser = DishLineParser::new(&cfg).unwrap();

    // A bare trailing "4.50" does not terminate the price token, so the
    // short priceless line falls into the header rule instead.
    let dishes = parser.parse("Tarta casera 4.50\nCafe con leche 1,20 €");
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name, "Cafe con leche");
    assert_eq!(dishes[0].price, Some(1.20));
    assert_eq!(dishes[0].category.as_deref(), Some("Tarta casera 4.50"));
}

#[test]
fn dollar_and_internal_whitespace_terminate_prices() {
    let cfg = Config::default();
    let parser = DishLineParser::new(&cfg).unwrap();

    let dishes = parser.parse("Cheeseburger deluxe 9.99$\nMenu completo 10,00 euros");
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].price, Some(9.99));
    assert_eq!(dishes[1].name, "Menu completo");
    assert_eq!(dishes[1].price, Some(10.00));
}

#[test]
fn name_is_everything_before_the_first_price() {
    let cfg = Config::default();
    let parser = DishLineParser::new(&cfg).unwrap();

    let dishes = parser.parse("Menu 2 platos con postre incluido 10,00€");
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name, "Menu 2 platos con postre incluido");
    assert_eq!(dishes[0].price, Some(10.00));
}

#[test]
fn long_priceless_lines_are_dropped() {
    let cfg = Config::default();
    let parser = DishLineParser::new(&cfg).unwrap();

    // Mixed case, over 30 chars, no price: neither header nor dish.
    let dishes = parser.parse(
        "Consulte a nuestro personal sobre los alergenos\nCroquetas caseras 6,00€",
    );
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name, "Croquetas caseras");
    assert_eq!(dishes[0].category, None);
}

#[test]
fn leading_price_gives_empty_name() {
    let cfg = Config::default();
    let parser = DishLineParser::new(&cfg).unwrap();

    let dishes = parser.parse("12,50€ menu del dia completo");
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name, "");
    assert_eq!(dishes[0].price, Some(12.50));
}
