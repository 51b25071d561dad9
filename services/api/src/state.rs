//! Application state shared across handlers

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::repositories::{
    BrandingRepository, ComplaintRepository, EnumeratorRepository, ReportingYearRepository,
    SectorRepository, StoryRepository, UserRepository, dashboard::DashboardRepository,
};
use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub sessions: SessionStore,
    pub users: UserRepository,
    pub sectors: SectorRepository,
    pub complaints: ComplaintRepository,
    pub reporting_years: ReportingYearRepository,
    pub stories: StoryRepository,
    pub enumerators: EnumeratorRepository,
    pub branding: BrandingRepository,
    pub dashboard: DashboardRepository,
}

impl AppState {
    /// Build the full application state over one connection pool
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        let sessions = SessionStore::new(pool.clone(), config.session_ttl_seconds);

        Self {
            config,
            sessions,
            users: UserRepository::new(pool.clone()),
            sectors: SectorRepository::new(pool.clone()),
            complaints: ComplaintRepository::new(pool.clone()),
            reporting_years: ReportingYearRepository::new(pool.clone()),
            stories: StoryRepository::new(pool.clone()),
            enumerators: EnumeratorRepository::new(pool.clone()),
            branding: BrandingRepository::new(pool.clone()),
            dashboard: DashboardRepository::new(pool),
        }
    }
}
