//! Models for the dashboard aggregation endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::BrandingResponse;

/// Optional filters accepted by every v2 reporting endpoint
///
/// Filters are passed through verbatim to the aggregation queries; each
/// query applies the ones that are meaningful for its records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub year: Option<i32>,
    pub province: Option<String>,
    pub sector: Option<String>,
}

/// Record counts shown on the authenticated dashboard
#[derive(Serialize)]
pub struct DashboardCounts {
    pub projects: i64,
    pub complaints: i64,
    pub success_stories: i64,
    pub enumerators: i64,
    pub main_sectors: i64,
    pub reporting_years: Vec<i32>,
}

/// Aggregate state for the authenticated dashboard
#[derive(Serialize)]
pub struct DashboardState {
    #[serde(flatten)]
    pub counts: DashboardCounts,
    pub branding: BrandingResponse,
}

/// Portfolio-wide statistics for the public overview
#[derive(Serialize)]
pub struct OverviewStats {
    pub total_projects: i64,
    pub total_budget: f64,
    pub provinces_covered: i64,
    pub sectors_covered: i64,
    pub success_stories: i64,
    pub complaints: i64,
}

/// One project row in the public reporting surface
#[derive(Serialize)]
pub struct ProjectSummary {
    pub id: Uuid,
    pub name: String,
    pub province: String,
    pub sector: String,
    pub year: i32,
    pub budget: f64,
    pub status: String,
}

/// Per-sector project breakdown
#[derive(Serialize)]
pub struct SectorBreakdown {
    pub sector: String,
    pub projects: i64,
    pub budget: f64,
}

/// Enumerator counts for the monitoring view
#[derive(Serialize)]
pub struct MonitoringStats {
    pub enumerators_total: i64,
    pub by_province: Vec<ProvinceCount>,
}

/// Enumerator count for one province
#[derive(Serialize)]
pub struct ProvinceCount {
    pub province: String,
    pub enumerators: i64,
}

/// Success-story totals for the evaluation view
#[derive(Serialize)]
pub struct EvaluationStats {
    pub stories_total: i64,
    pub stories: Vec<crate::models::StoryResponse>,
}

/// Complaint totals for the accountability view
#[derive(Serialize)]
pub struct AccountabilityStats {
    pub complaints_total: i64,
    pub recent: Vec<ComplaintSummary>,
}

/// One complaint row in the accountability view
#[derive(Serialize)]
pub struct ComplaintSummary {
    pub id: Uuid,
    pub full_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// One knowledge product in the knowledge view
#[derive(Serialize)]
pub struct KnowledgeProduct {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub year: i32,
    pub province: String,
    pub sector: String,
}

/// Distinct filter values offered to reporting clients
#[derive(Serialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub provinces: Vec<String>,
    pub sectors: Vec<String>,
}
