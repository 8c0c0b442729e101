//! Shopping-list command: reads planned ingredients from disk and merges them.

use alacena_core::{build_shopping_list, PlannedIngredient, ShoppingItem};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load planned ingredients from a JSON file.
pub fn load_plan(path: &Path) -> Result<Vec<PlannedIngredient>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let plan: Vec<PlannedIngredient> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(plan)
}

/// Build a shopping list from a JSON plan file.
pub fn build_from_file(path: &Path) -> Result<Vec<ShoppingItem>> {
    let plan = load_plan(path)?;
    let lines = plan.len();
    let items = build_shopping_list(plan);
    tracing::info!(lines, items = items.len(), "built shopping list");
    Ok(items)
}
