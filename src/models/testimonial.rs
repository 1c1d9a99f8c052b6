//! Request/response shapes for the testimonial endpoints.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::testimonials;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialRequest {
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub text: String,
    pub approved: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl From<testimonials::Model> for TestimonialResponse {
    fn from(t: testimonials::Model) -> Self {
        Self {
            id: t.id,
            name: t.name,
            email: t.email,
            rating: t.rating,
            text: t.text,
            approved: t.approved,
            created_at: t.created_at,
        }
    }
}
