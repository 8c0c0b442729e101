//! Shopping-list aggregation.
//!
//! Folds the ingredient lines of every planned meal into one entry per
//! ingredient. Quantities are scaled by each meal's serving multiplier and
//! then merged pairwise with [`combine`](crate::combine::combine).

use std::collections::HashMap;

use ingredient_density::normalize_ingredient_name;
use serde::{Deserialize, Serialize};

use crate::combine::combine;
use crate::scaling::scale;

fn default_multiplier() -> f64 {
    1.0
}

/// One ingredient line from a planned meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedIngredient {
    pub name: String,
    /// Raw quantity text as stored on the recipe.
    #[serde(default)]
    pub quantity: String,
    /// Serving multiplier of the meal this line belongs to.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

impl PlannedIngredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            multiplier,
        }
    }
}

/// A merged shopping-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Display name, as first seen.
    pub name: String,
    /// Normalized grouping key.
    pub key: String,
    /// Combined quantity text.
    pub quantity: String,
    /// Number of planned lines merged into this entry.
    pub sources: usize,
}

/// Build a shopping list from planned ingredient lines.
///
/// Lines are grouped by normalized name (case, accents and spacing ignored).
/// Entries keep the order in which each ingredient first appears. Lines with
/// a blank name are skipped.
pub fn build_shopping_list<I>(items: I) -> Vec<ShoppingItem>
where
    I: IntoIterator<Item = PlannedIngredient>,
{
    let mut list: Vec<ShoppingItem> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for planned in items {
        let key = normalize_ingredient_name(&planned.name);
        if key.is_empty() {
            tracing::trace!(quantity = %planned.quantity, "skipping line without a name");
            continue;
        }

        let scaled = scale(&planned.quantity, planned.multiplier);

        match index_by_key.get(&key) {
            Some(&idx) => {
                let entry = &mut list[idx];
                entry.quantity = combine(&entry.quantity, &scaled, &entry.key);
                entry.sources += 1;
            }
            None => {
                index_by_key.insert(key.clone(), list.len());
                list.push(ShoppingItem {
                    name: planned.name.trim().to_string(),
                    key,
                    quantity: scaled,
                    sources: 1,
                });
            }
        }
    }

    list
}
