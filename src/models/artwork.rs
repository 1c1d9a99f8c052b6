//! Request/response shapes for the catalog endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::artworks;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub rating: f64,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub available: bool,
    pub stock_quantity: i32,
    pub rating: f64,
}

impl From<artworks::Model> for ArtworkResponse {
    fn from(artwork: artworks::Model) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title,
            description: artwork.description,
            category: artwork.category,
            price: artwork.price,
            image_url: artwork.image_url,
            available: artwork.available,
            stock_quantity: artwork.stock_quantity,
            rating: artwork.rating,
        }
    }
}
