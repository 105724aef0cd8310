use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Main,
    Side,
    Snacks,
}

impl Category {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "main" => Some(Category::Main),
            "side" => Some(Category::Side),
            "snacks" => Some(Category::Snacks),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Side => "side",
            Category::Snacks => "snacks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record as returned by the sheet endpoint. Rows are hand-entered, so
/// every field is lenient: anything missing or of the wrong shape is
/// defaulted during normalization rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDish {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dish {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub category: Category,
}

/// Body of the POST for a new dish; mirrors what the sheet expects.
#[derive(Debug, Clone, Serialize)]
pub struct NewDish {
    pub title: String,
    pub ingredients: Vec<String>,
}

// Normalize one raw record. Returns None for rows without a usable title
// (the sheet produces blank trailing rows); everything else is defaulted:
// malformed ingredients -> empty list, unknown category -> main, missing
// id -> generated.
pub fn normalize(raw: RawDish) -> Option<Dish> {
    let title = raw.title.as_deref().map(str::trim).filter(|t| !t.is_empty())?.to_string();

    let id = match raw.id {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    let ingredients = match raw.ingredients {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let category = raw.category.as_deref().and_then(Category::parse).unwrap_or_default();

    Some(Dish { id, title, ingredients, category })
}

// Envelope row types

#[derive(Serialize)]
pub struct DishRow {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub category: Category,
}

impl From<&Dish> for DishRow {
    fn from(d: &Dish) -> Self {
        DishRow {
            id: d.id.clone(),
            title: d.title.clone(),
            ingredients: d.ingredients.clone(),
            category: d.category,
        }
    }
}

#[derive(Serialize)]
pub struct DishList {
    pub total: usize,
    pub dishes: Vec<DishRow>,
}

#[derive(Serialize)]
pub struct DishAddPlan {
    pub action: &'static str,
    pub title: String,
    pub ingredients: Vec<String>,
}

#[derive(Serialize)]
pub struct DishAddResult {
    pub submitted: bool,
    pub title: String,
}
