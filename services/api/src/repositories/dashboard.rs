//! Aggregation repository backing the dashboard and reporting endpoints
//!
//! Every aggregate is computed with sequentially awaited queries; the
//! optional year/province/sector filters are applied in SQL where they
//! are meaningful for the records involved.

use sqlx::{PgPool, Row};

use crate::models::StoryResponse;
use crate::models::dashboard::{
    AccountabilityStats, ComplaintSummary, DashboardCounts, DashboardQuery, EvaluationStats,
    FilterOptions, KnowledgeProduct, MonitoringStats, OverviewStats, ProjectSummary,
    ProvinceCount, SectorBreakdown,
};
use crate::repositories::RepoError;

/// Dashboard aggregation repository
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new dashboard repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record counts for the authenticated dashboard
    pub async fn counts(&self) -> Result<DashboardCounts, RepoError> {
        let projects = self.count_table("projects").await?;
        let complaints = self.count_table("complaints").await?;
        let success_stories = self.count_table("success_stories").await?;
        let enumerators = self.count_table("enumerators").await?;
        let main_sectors = self.count_table("main_sectors").await?;

        let rows = sqlx::query(
            r#"
            SELECT year
            FROM reporting_years
            ORDER BY year DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let reporting_years = rows.into_iter().map(|row| row.get("year")).collect();

        Ok(DashboardCounts {
            projects,
            complaints,
            success_stories,
            enumerators,
            main_sectors,
            reporting_years,
        })
    }

    async fn count_table(&self, table: &str) -> Result<i64, RepoError> {
        // Table names come from the fixed list above, never from callers.
        let row = sqlx::query(&format!("SELECT COUNT(*) AS total FROM {table}"))
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("total"))
    }

    /// Portfolio-wide overview statistics
    pub async fn overview(&self, filters: &DashboardQuery) -> Result<OverviewStats, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total_projects,
                   COALESCE(SUM(budget), 0)::float8 AS total_budget,
                   COUNT(DISTINCT province) AS provinces_covered,
                   COUNT(DISTINCT sector) AS sectors_covered
            FROM projects
            WHERE ($1::int4 IS NULL OR year = $1)
              AND ($2::text IS NULL OR province = $2)
              AND ($3::text IS NULL OR sector = $3)
            "#,
        )
        .bind(filters.year)
        .bind(filters.province.as_deref())
        .bind(filters.sector.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let stories = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM success_stories
            WHERE ($1::int4 IS NULL OR year = $1)
              AND ($2::text IS NULL OR province = $2)
              AND ($3::text IS NULL OR sector = $3)
            "#,
        )
        .bind(filters.year)
        .bind(filters.province.as_deref())
        .bind(filters.sector.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let complaints = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM complaints
            WHERE ($1::int4 IS NULL OR EXTRACT(YEAR FROM created_at)::int4 = $1)
            "#,
        )
        .bind(filters.year)
        .fetch_one(&self.pool)
        .await?;

        Ok(OverviewStats {
            total_projects: row.get("total_projects"),
            total_budget: row.get("total_budget"),
            provinces_covered: row.get("provinces_covered"),
            sectors_covered: row.get("sectors_covered"),
            success_stories: stories.get("total"),
            complaints: complaints.get("total"),
        })
    }

    /// Filtered project rows
    pub async fn projects(
        &self,
        filters: &DashboardQuery,
    ) -> Result<Vec<ProjectSummary>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, province, sector, year, budget::float8 AS budget, status
            FROM projects
            WHERE ($1::int4 IS NULL OR year = $1)
              AND ($2::text IS NULL OR province = $2)
              AND ($3::text IS NULL OR sector = $3)
            ORDER BY year DESC, name
            "#,
        )
        .bind(filters.year)
        .bind(filters.province.as_deref())
        .bind(filters.sector.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ProjectSummary {
                id: row.get("id"),
                name: row.get("name"),
                province: row.get("province"),
                sector: row.get("sector"),
                year: row.get("year"),
                budget: row.get("budget"),
                status: row.get("status"),
            })
            .collect())
    }

    /// Per-sector project breakdown
    pub async fn sectors(
        &self,
        filters: &DashboardQuery,
    ) -> Result<Vec<SectorBreakdown>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT sector,
                   COUNT(*) AS projects,
                   COALESCE(SUM(budget), 0)::float8 AS budget
            FROM projects
            WHERE ($1::int4 IS NULL OR year = $1)
              AND ($2::text IS NULL OR province = $2)
            GROUP BY sector
            ORDER BY sector
            "#,
        )
        .bind(filters.year)
        .bind(filters.province.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| SectorBreakdown {
                sector: row.get("sector"),
                projects: row.get("projects"),
                budget: row.get("budget"),
            })
            .collect())
    }

    /// Enumerator totals for the monitoring view
    pub async fn monitoring(
        &self,
        filters: &DashboardQuery,
    ) -> Result<MonitoringStats, RepoError> {
        let total = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM enumerators
            WHERE ($1::text IS NULL OR province = $1)
            "#,
        )
        .bind(filters.province.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query(
            r#"
            SELECT province, COUNT(*) AS enumerators
            FROM enumerators
            WHERE ($1::text IS NULL OR province = $1)
            GROUP BY province
            ORDER BY province
            "#,
        )
        .bind(filters.province.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(MonitoringStats {
            enumerators_total: total.get("total"),
            by_province: rows
                .into_iter()
                .map(|row| ProvinceCount {
                    province: row.get("province"),
                    enumerators: row.get("enumerators"),
                })
                .collect(),
        })
    }

    /// Success-story totals for the evaluation view
    pub async fn evaluation(
        &self,
        filters: &DashboardQuery,
    ) -> Result<EvaluationStats, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, province, sector, year, summary, created_at
            FROM success_stories
            WHERE ($1::int4 IS NULL OR year = $1)
              AND ($2::text IS NULL OR province = $2)
              AND ($3::text IS NULL OR sector = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filters.year)
        .bind(filters.province.as_deref())
        .bind(filters.sector.as_deref())
        .fetch_all(&self.pool)
        .await?;

        let stories: Vec<StoryResponse> = rows
            .into_iter()
            .map(|row| StoryResponse {
                id: row.get("id"),
                title: row.get("title"),
                province: row.get("province"),
                sector: row.get("sector"),
                year: row.get("year"),
                summary: row.get("summary"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(EvaluationStats {
            stories_total: stories.len() as i64,
            stories,
        })
    }

    /// Complaint totals for the accountability view
    pub async fn accountability(
        &self,
        filters: &DashboardQuery,
    ) -> Result<AccountabilityStats, RepoError> {
        let total = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM complaints
            WHERE ($1::int4 IS NULL OR EXTRACT(YEAR FROM created_at)::int4 = $1)
            "#,
        )
        .bind(filters.year)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query(
            r#"
            SELECT id, full_name, message, created_at
            FROM complaints
            WHERE ($1::int4 IS NULL OR EXTRACT(YEAR FROM created_at)::int4 = $1)
            ORDER BY created_at DESC
            LIMIT 10
            "#,
        )
        .bind(filters.year)
        .fetch_all(&self.pool)
        .await?;

        Ok(AccountabilityStats {
            complaints_total: total.get("total"),
            recent: rows
                .into_iter()
                .map(|row| ComplaintSummary {
                    id: row.get("id"),
                    full_name: row.get("full_name"),
                    message: row.get("message"),
                    created_at: row.get("created_at"),
                })
                .collect(),
        })
    }

    /// Filtered knowledge products
    pub async fn knowledge(
        &self,
        filters: &DashboardQuery,
    ) -> Result<Vec<KnowledgeProduct>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, category, year, province, sector
            FROM knowledge_products
            WHERE ($1::int4 IS NULL OR year = $1)
              AND ($2::text IS NULL OR province = $2)
              AND ($3::text IS NULL OR sector = $3)
            ORDER BY year DESC, title
            "#,
        )
        .bind(filters.year)
        .bind(filters.province.as_deref())
        .bind(filters.sector.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| KnowledgeProduct {
                id: row.get("id"),
                title: row.get("title"),
                category: row.get("category"),
                year: row.get("year"),
                province: row.get("province"),
                sector: row.get("sector"),
            })
            .collect())
    }

    /// Distinct filter values offered to reporting clients
    pub async fn filter_options(&self) -> Result<FilterOptions, RepoError> {
        let years = sqlx::query(
            r#"
            SELECT year
            FROM reporting_years
            ORDER BY year DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let provinces = sqlx::query(
            r#"
            SELECT DISTINCT province
            FROM projects
            ORDER BY province
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let sectors = sqlx::query(
            r#"
            SELECT name
            FROM main_sectors
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(FilterOptions {
            years: years.into_iter().map(|row| row.get("year")).collect(),
            provinces: provinces
                .into_iter()
                .map(|row| row.get("province"))
                .collect(),
            sectors: sectors.into_iter().map(|row| row.get("name")).collect(),
        })
    }
}
