//! Boundary records for the upload workflow: the document-store shapes a
//! persisted menu and its dishes take, and the flat documents pushed to
//! the search index. The store and index clients themselves live outside
//! this crate; these types pin the contract they are fed.

use crate::model::{ExtractedMenu, ParsedDish};
use crate::util::now_rfc3339;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuType {
    Daily,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Restaurant,
    Dish,
    Menu,
}

impl DocKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocKind::Restaurant => "restaurant",
            DocKind::Dish => "dish",
            DocKind::Menu => "menu",
        }
    }
}

/// Search-index document id scheme: `"{type}_{entity_id}"`.
pub fn doc_id(kind: DocKind, entity_id: &str) -> String {
    format!("{}_{}", kind.as_str(), entity_id)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRecord {
    pub restaurant_id: String,
    pub menu_type: MenuType,
    pub date: Option<String>,
    pub pdf_url: String,
    pub dishes: Vec<String>,
    pub price: Option<f64>,
    pub menu_restrictions: Vec<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl MenuRecord {
    pub fn new(
        restaurant_id: &str,
        menu_type: MenuType,
        date: Option<String>,
        pdf_url: &str,
        price: Option<f64>,
        extracted: &ExtractedMenu,
    ) -> Self {
        let now = now_rfc3339();
        Self {
            restaurant_id: restaurant_id.to_string(),
            menu_type,
            date,
            pdf_url: pdf_url.to_string(),
            dishes: Vec::new(),
            price,
            menu_restrictions: extracted.menu_restrictions.clone(),
            active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishRecord {
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub restrictions: Vec<String>,
    pub ingredients: Vec<String>,
    pub is_promoted: bool,
    pub promotion_level: u8,
    pub active: bool,
    pub avg_rating: f64,
    pub rating_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl DishRecord {
    /// Extracted dishes carry the menu-level restriction set; the store
    /// keeps a per-dish copy because downstream filters read it there.
    pub fn from_parsed(
        restaurant_id: &str,
        dish: &ParsedDish,
        menu_restrictions: &[String],
    ) -> Self {
        let now = now_rfc3339();
        Self {
            restaurant_id: restaurant_id.to_string(),
            name: dish.name.clone(),
            description: String::new(),
            price: dish.price,
            category: dish.category.clone(),
            restrictions: menu_restrictions.to_vec(),
            ingredients: Vec::new(),
            is_promoted: false,
            promotion_level: 0,
            active: true,
            avg_rating: 0.0,
            rating_count: 0,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Flat document pushed to the search index. Absent fields are skipped
/// rather than serialized as null to match the index schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDoc {
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub restaurant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_type: Option<MenuType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub restrictions: Vec<String>,
    pub is_promoted: bool,
    pub promotion_level: u8,
}

pub fn dish_doc(dish_id: &str, dish: &DishRecord) -> SearchDoc {
    SearchDoc {
        id: doc_id(DocKind::Dish, dish_id),
        doc_type: DocKind::Dish.as_str().to_string(),
        restaurant_id: dish.restaurant_id.clone(),
        dish_id: Some(dish_id.to_string()),
        menu_id: None,
        name: Some(dish.name.clone()),
        description: dish.description.clone(),
        category: dish.category.clone(),
        price: dish.price,
        menu_type: None,
        date: None,
        restrictions: dish.restrictions.clone(),
        is_promoted: dish.is_promoted,
        promotion_level: dish.promotion_level,
    }
}

pub fn menu_doc(menu_id: &str, menu: &MenuRecord, dishes: &[DishRecord]) -> SearchDoc {
    let description = dishes
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    SearchDoc {
        id: doc_id(DocKind::Menu, menu_id),
        doc_type: DocKind::Menu.as_str().to_string(),
        restaurant_id: menu.restaurant_id.clone(),
        dish_id: None,
        menu_id: Some(menu_id.to_string()),
        name: None,
        description,
        category: None,
        price: menu.price,
        menu_type: Some(menu.menu_type),
        date: menu.date.clone(),
        restrictions: menu.menu_restrictions.clone(),
        is_promoted: false,
        promotion_level: 0,
    }
}
