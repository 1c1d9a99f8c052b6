//! Request/response shapes for the commission/contact endpoint.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::contact_requests::{self, RequestStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestBody {
    pub name: String,
    pub email: String,
    pub art_type: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub art_type: String,
    pub message: String,
    pub status: RequestStatus,
    pub created_at: DateTimeWithTimeZone,
}

impl From<contact_requests::Model> for ContactResponse {
    fn from(r: contact_requests::Model) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            art_type: r.art_type,
            message: r.message,
            status: r.status,
            created_at: r.created_at,
        }
    }
}
