// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display label (e.g., "Science", "Art").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Category id to label. Serialized as a JSON object with the ids as string keys.
pub type CategoryMap = BTreeMap<i64, String>;

/// Builds the `{id: type}` mapping served by the category endpoints.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}
