//! Repositories for database operations
//!
//! Each repository is a thin typed boundary over the relational store.
//! Failures carry an explicit kind: unique-constraint violations are
//! tagged `Duplicate` at the point they surface from the database, so no
//! caller ever has to inspect message text to classify an error.

use chrono::Utc;
use sqlx::{PgPool, Row};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    BrandingResponse, EnumeratorResponse, MainSectorResponse, StoryResponse, UserResponse,
};

pub mod dashboard;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepoError {
    /// Unique-constraint violation, tagged with the conflicting column
    #[error("duplicate {0}")]
    Duplicate(&'static str),

    /// Any other database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Classify a sqlx error, tagging Postgres unique violations (23505)
fn duplicate_on(err: sqlx::Error, column: &'static str) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            RepoError::Duplicate(column)
        }
        _ => RepoError::Database(err),
    }
}

/// Credentials needed to authenticate a user
pub struct UserCredentials {
    pub id: Uuid,
    pub password_hash: String,
}

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a pre-hashed password
    pub async fn create(
        &self,
        full_name: &str,
        email: &str,
        role: &str,
        password_hash: &str,
    ) -> Result<UserResponse, RepoError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, full_name, email, role, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, full_name, email, role, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(email)
        .bind(role)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| duplicate_on(e, "email"))?;

        Ok(UserResponse {
            id: row.get("id"),
            full_name: row.get("full_name"),
            email: row.get("email"),
            role: row.get("role"),
            created_at: row.get("created_at"),
        })
    }

    /// Delete a user by ID; deleting an unknown ID is a no-op
    pub async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Look up login credentials by email
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT id, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| UserCredentials {
            id: row.get("id"),
            password_hash: row.get("password_hash"),
        }))
    }
}

/// Sector repository covering the catalog and per-sector updates
#[derive(Clone)]
pub struct SectorRepository {
    pool: PgPool,
}

impl SectorRepository {
    /// Create a new sector repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a main sector to the catalog; sector names are unique
    pub async fn create_main_sector(
        &self,
        name: &str,
        description: &str,
    ) -> Result<MainSectorResponse, RepoError> {
        let row = sqlx::query(
            r#"
            INSERT INTO main_sectors (id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, description
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| duplicate_on(e, "name"))?;

        Ok(MainSectorResponse {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
        })
    }

    /// Update a sector's display fields; omitted fields keep their value
    pub async fn update_sector(
        &self,
        sector_key: &str,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            UPDATE sectors
            SET name = COALESCE($2::text, name),
                description = COALESCE($3::text, description)
            WHERE sector_key = $1
            "#,
        )
        .bind(sector_key)
        .bind(name)
        .bind(description)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Complaint repository for the accountability channel
#[derive(Clone)]
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    /// Create a new complaint repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a complaint
    pub async fn create(
        &self,
        full_name: &str,
        email: &str,
        message: &str,
    ) -> Result<Uuid, RepoError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO complaints (id, full_name, email, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(email)
        .bind(message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Delete a complaint by ID; deleting an unknown ID is a no-op
    pub async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            DELETE FROM complaints
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Reporting-year repository
#[derive(Clone)]
pub struct ReportingYearRepository {
    pool: PgPool,
}

impl ReportingYearRepository {
    /// Create a new reporting-year repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a reporting year; years are unique
    pub async fn create(&self, year: i32) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO reporting_years (year)
            VALUES ($1)
            "#,
        )
        .bind(year)
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_on(e, "year"))?;

        Ok(())
    }

    /// Remove a reporting year; removing an unknown year is a no-op
    pub async fn delete(&self, year: i32) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            DELETE FROM reporting_years
            WHERE year = $1
            "#,
        )
        .bind(year)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Success-story repository for evaluation data entry
#[derive(Clone)]
pub struct StoryRepository {
    pool: PgPool,
}

impl StoryRepository {
    /// Create a new story repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a success story
    pub async fn create(
        &self,
        title: &str,
        province: &str,
        sector: &str,
        year: Option<i32>,
        summary: &str,
    ) -> Result<StoryResponse, RepoError> {
        let row = sqlx::query(
            r#"
            INSERT INTO success_stories (id, title, province, sector, year, summary, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, province, sector, year, summary, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(province)
        .bind(sector)
        .bind(year)
        .bind(summary)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(StoryResponse {
            id: row.get("id"),
            title: row.get("title"),
            province: row.get("province"),
            sector: row.get("sector"),
            year: row.get("year"),
            summary: row.get("summary"),
            created_at: row.get("created_at"),
        })
    }
}

/// Enumerator repository for monitoring data entry
#[derive(Clone)]
pub struct EnumeratorRepository {
    pool: PgPool,
}

impl EnumeratorRepository {
    /// Create a new enumerator repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register an enumerator
    pub async fn create(
        &self,
        full_name: &str,
        province: &str,
        phone: &str,
    ) -> Result<EnumeratorResponse, RepoError> {
        let row = sqlx::query(
            r#"
            INSERT INTO enumerators (id, full_name, province, phone, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, province, phone, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(province)
        .bind(phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(EnumeratorResponse {
            id: row.get("id"),
            full_name: row.get("full_name"),
            province: row.get("province"),
            phone: row.get("phone"),
            created_at: row.get("created_at"),
        })
    }
}

/// Branding repository for the single site-branding record
#[derive(Clone)]
pub struct BrandingRepository {
    pool: PgPool,
}

impl BrandingRepository {
    /// Create a new branding repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Partially update the branding record; omitted fields are untouched
    pub async fn update(
        &self,
        site_title: Option<String>,
        logo_url: Option<String>,
        primary_color: Option<String>,
    ) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            UPDATE branding
            SET site_title = COALESCE($1::text, site_title),
                logo_url = COALESCE($2::text, logo_url),
                primary_color = COALESCE($3::text, primary_color),
                updated_at = $4
            WHERE id = 1
            "#,
        )
        .bind(site_title)
        .bind(logo_url)
        .bind(primary_color)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch the branding record, defaulting when none has been saved yet
    pub async fn get(&self) -> Result<BrandingResponse, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT site_title, logo_url, primary_color
            FROM branding
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .map(|row| BrandingResponse {
                site_title: row.get("site_title"),
                logo_url: row.get("logo_url"),
                primary_color: row.get("primary_color"),
            })
            .unwrap_or_default())
    }
}
