//! Catalog management for artworks.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{artworks, prelude::*};
use crate::error::ApiError;
use crate::models::artwork::{ArtworkRequest, ArtworkResponse};

pub async fn list_artworks(db: &DatabaseConnection) -> Result<Vec<ArtworkResponse>, ApiError> {
    let artworks = Artworks::find().all(db).await?;
    Ok(artworks.into_iter().map(ArtworkResponse::from).collect())
}

pub async fn list_by_category(
    db: &DatabaseConnection,
    category: &str,
) -> Result<Vec<ArtworkResponse>, ApiError> {
    let artworks = Artworks::find()
        .filter(artworks::Column::Category.eq(category))
        .filter(artworks::Column::Available.eq(true))
        .all(db)
        .await?;
    Ok(artworks.into_iter().map(ArtworkResponse::from).collect())
}

pub async fn get_artwork(db: &DatabaseConnection, id: i32) -> Result<ArtworkResponse, ApiError> {
    let artwork = find_artwork(db, id).await?;
    Ok(artwork.into())
}

pub async fn create_artwork(
    db: &DatabaseConnection,
    request: ArtworkRequest,
) -> Result<ArtworkResponse, ApiError> {
    validate(&request)?;

    let artwork = artworks::ActiveModel {
        title: Set(request.title),
        description: Set(request.description),
        category: Set(request.category),
        price: Set(request.price),
        image_url: Set(request.image_url),
        available: Set(request.available),
        stock_quantity: Set(request.stock_quantity),
        rating: Set(request.rating),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(artwork.into())
}

pub async fn update_artwork(
    db: &DatabaseConnection,
    id: i32,
    request: ArtworkRequest,
) -> Result<ArtworkResponse, ApiError> {
    validate(&request)?;

    let artwork = find_artwork(db, id).await?;
    let mut active: artworks::ActiveModel = artwork.into();
    active.title = Set(request.title);
    active.description = Set(request.description);
    active.category = Set(request.category);
    active.price = Set(request.price);
    active.image_url = Set(request.image_url);
    active.available = Set(request.available);
    active.stock_quantity = Set(request.stock_quantity);
    active.rating = Set(request.rating);

    let updated = active.update(db).await?;
    Ok(updated.into())
}

pub async fn delete_artwork(db: &DatabaseConnection, id: i32) -> Result<(), ApiError> {
    let artwork = find_artwork(db, id).await?;
    Artworks::delete_by_id(artwork.id).exec(db).await?;
    Ok(())
}

async fn find_artwork(db: &DatabaseConnection, id: i32) -> Result<artworks::Model, ApiError> {
    Artworks::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artwork not found with ID: {id}")))
}

fn validate(request: &ArtworkRequest) -> Result<(), ApiError> {
    if request.price < rust_decimal::Decimal::ZERO {
        return Err(ApiError::Validation(
            "Artwork price must not be negative".to_string(),
        ));
    }
    if request.stock_quantity < 0 {
        return Err(ApiError::Validation(
            "Artwork stock quantity must not be negative".to_string(),
        ));
    }
    Ok(())
}
