//! SeaORM Entity for the artwork catalog
//!
//! Catalog rows are created by admin catalog management and mutated on
//! restock or price update. Live price changes never touch historical
//! orders, which carry their own price snapshots.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artworks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: String,
    /// Unit price in the storefront base currency, always >= 0
    pub price: Decimal,
    pub image_url: Option<String>,
    pub available: bool,
    pub stock_quantity: i32,
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
