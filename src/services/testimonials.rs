//! Testimonial submission and moderation.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::*, testimonials};
use crate::error::ApiError;
use crate::models::testimonial::{TestimonialRequest, TestimonialResponse};

pub async fn list_approved(db: &DatabaseConnection) -> Result<Vec<TestimonialResponse>, ApiError> {
    let rows = Testimonials::find()
        .filter(testimonials::Column::Approved.eq(true))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(TestimonialResponse::from).collect())
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<TestimonialResponse>, ApiError> {
    let rows = Testimonials::find().all(db).await?;
    Ok(rows.into_iter().map(TestimonialResponse::from).collect())
}

/// New testimonials always start unapproved.
pub async fn create_testimonial(
    db: &DatabaseConnection,
    request: TestimonialRequest,
) -> Result<TestimonialResponse, ApiError> {
    if !(1..=5).contains(&request.rating) {
        return Err(ApiError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    let testimonial = testimonials::ActiveModel {
        name: Set(request.name),
        email: Set(request.email),
        rating: Set(request.rating),
        text: Set(request.text),
        approved: Set(false),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(testimonial.into())
}

pub async fn approve_testimonial(
    db: &DatabaseConnection,
    id: i32,
) -> Result<TestimonialResponse, ApiError> {
    let testimonial = find_testimonial(db, id).await?;
    let mut active: testimonials::ActiveModel = testimonial.into();
    active.approved = Set(true);
    let updated = active.update(db).await?;
    Ok(updated.into())
}

pub async fn delete_testimonial(db: &DatabaseConnection, id: i32) -> Result<(), ApiError> {
    let testimonial = find_testimonial(db, id).await?;
    Testimonials::delete_by_id(testimonial.id).exec(db).await?;
    Ok(())
}

async fn find_testimonial(
    db: &DatabaseConnection,
    id: i32,
) -> Result<testimonials::Model, ApiError> {
    Testimonials::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Testimonial not found with ID: {id}")))
}
