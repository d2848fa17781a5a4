//! Data models
//!
//! Rust structs representing the inventory and recipe records supplied by the
//! document store.

mod inventory_item;
mod recipe;

pub use inventory_item::InventoryItem;
pub use recipe::{IngredientRequirement, Recipe};
