//! Recipe data model.
//!
//! The canonical field table drives the validation engine; the typed structs
//! are for callers working with records that already passed validation.

use serde::{Deserialize, Serialize};

/// One entry in a recipe's ingredient list.
///
/// The engine only constrains `item_id` and `count`; extra fields on an
/// ingredient entry are permitted and ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item_id: u32,
    pub count: i64,
}

/// A crafting recipe: the item it produces, what goes into it, and the
/// disciplines and rating gating it.
///
/// Field declaration order is the canonical record order. Optional fields
/// are omitted from serialized output rather than emitted as null, so a
/// serialized `Recipe` always passes the key-order check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub output_item_id: u32,
    pub output_item_count: f64,
    pub ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<i32>,
    pub disciplines: Vec<String>,
}

/// A recognized recipe field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeKey {
    pub name: &'static str,
    pub required: bool,
}

/// The seven recognized fields, in the order they must appear on a record.
pub const RECIPE_KEYS: &[RecipeKey] = &[
    RecipeKey {
        name: "id",
        required: false,
    },
    RecipeKey {
        name: "name",
        required: true,
    },
    RecipeKey {
        name: "output_item_id",
        required: true,
    },
    RecipeKey {
        name: "output_item_count",
        required: true,
    },
    RecipeKey {
        name: "ingredients",
        required: true,
    },
    RecipeKey {
        name: "min_rating",
        required: false,
    },
    RecipeKey {
        name: "disciplines",
        required: true,
    },
];

/// Names of all recognized fields, in canonical order.
pub fn allowed_keys() -> impl Iterator<Item = &'static str> {
    RECIPE_KEYS.iter().map(|key| key.name)
}

/// Names of the required fields, in canonical order.
pub fn required_keys() -> impl Iterator<Item = &'static str> {
    RECIPE_KEYS.iter().filter(|key| key.required).map(|key| key.name)
}
