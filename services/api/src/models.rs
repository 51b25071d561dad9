//! API models for request and response payloads
//!
//! Request payloads that mirror the original wire format use camelCase
//! field names. Each handler owns its payload shape; there is no shared
//! schema across handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod dashboard;

/// Request for user login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response describing the caller's active session
#[derive(Serialize)]
pub struct SessionInfo {
    pub user_id: Uuid,
    pub full_name: String,
    pub role: String,
    pub expires_at: DateTime<Utc>,
}

/// Request for recording a complaint; missing fields default to empty
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Request for creating a main sector in the catalog
#[derive(Deserialize)]
pub struct CreateMainSectorRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Response for catalog main-sector operations
#[derive(Serialize)]
pub struct MainSectorResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// Request for updating a sector's display fields
#[derive(Deserialize)]
pub struct UpdateSectorRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request for creating a user account
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Response for user operations; never carries the password hash
#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update of the branding record; omitted fields are untouched
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandingRequest {
    pub site_title: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
}

/// Current branding settings
#[derive(Serialize, Default)]
pub struct BrandingResponse {
    pub site_title: String,
    pub logo_url: String,
    pub primary_color: String,
}

/// Request for recording an evaluation success story
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoryRequest {
    pub title: Option<String>,
    pub province: Option<String>,
    pub sector: Option<String>,
    pub year: Option<i32>,
    pub summary: Option<String>,
}

/// Response for success-story operations
#[derive(Serialize)]
pub struct StoryResponse {
    pub id: Uuid,
    pub title: String,
    pub province: String,
    pub sector: String,
    pub year: Option<i32>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// Request for registering a monitoring enumerator
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnumeratorRequest {
    pub full_name: Option<String>,
    pub province: Option<String>,
    pub phone: Option<String>,
}

/// Response for enumerator operations
#[derive(Serialize)]
pub struct EnumeratorResponse {
    pub id: Uuid,
    pub full_name: String,
    pub province: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_payload_uses_camel_case_field_names() {
        let payload: CreateComplaintRequest = serde_json::from_str(
            r#"{"fullName":"Test User","email":"test@example.com","message":"This is a test complaint."}"#,
        )
        .expect("expected payload to deserialize");

        assert_eq!(payload.full_name.as_deref(), Some("Test User"));
        assert_eq!(payload.email.as_deref(), Some("test@example.com"));
        assert_eq!(payload.message.as_deref(), Some("This is a test complaint."));
    }

    #[test]
    fn complaint_payload_fields_are_optional() {
        let payload: CreateComplaintRequest =
            serde_json::from_str("{}").expect("expected empty payload to deserialize");

        assert!(payload.full_name.is_none());
        assert!(payload.email.is_none());
        assert!(payload.message.is_none());
    }
}
