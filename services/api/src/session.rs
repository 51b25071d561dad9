//! Session management backed by PostgreSQL
//!
//! Sessions bind an opaque, cryptographically random token to a user and
//! an absolute expiry. A session is valid only while `now < expires_at`;
//! expired or unknown tokens resolve to no session. Sessions are created
//! on login, destroyed on logout or expiry, and never mutated in place.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::repositories::RepoError;

/// An authenticated session resolved from a request's cookie
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub full_name: String,
    pub role: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session has passed its expiry
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Session store persisting session records in PostgreSQL
#[derive(Clone)]
pub struct SessionStore {
    pool: PgPool,
    ttl_seconds: i64,
}

impl SessionStore {
    /// Create a new session store with a fixed session lifetime
    pub fn new(pool: PgPool, ttl_seconds: i64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Mint and persist a new session for a user
    pub async fn create(&self, user_id: Uuid) -> Result<Session, RepoError> {
        let token = mint_token();
        let expires_at = Utc::now() + Duration::seconds(self.ttl_seconds);

        sqlx::query(
            r#"
            INSERT INTO sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&token)
        .bind(user_id)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        let user = sqlx::query(
            r#"
            SELECT full_name, role
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Session {
            token,
            user_id,
            full_name: user.get("full_name"),
            role: user.get("role"),
            expires_at,
        })
    }

    /// Resolve a token to an active session
    ///
    /// Expiry is enforced in SQL, so an expired record behaves exactly
    /// like an unknown one.
    pub async fn lookup(&self, token: &str) -> Result<Option<Session>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT s.token, s.user_id, s.expires_at, u.full_name, u.role
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1 AND s.expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Session {
            token: row.get("token"),
            user_id: row.get("user_id"),
            full_name: row.get("full_name"),
            role: row.get("role"),
            expires_at: row.get("expires_at"),
        }))
    }

    /// Destroy a session; deleting an unknown token is a no-op
    pub async fn delete(&self, token: &str) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Mint an unguessable session token: 32 bytes from the OS RNG, hex-encoded
pub fn mint_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);

    let mut token = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        token.push_str(&format!("{byte:02x}"));
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_tokens_are_64_hex_chars() {
        let token = mint_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn minted_tokens_are_distinct() {
        assert_ne!(mint_token(), mint_token());
    }

    #[test]
    fn session_expiry_is_exclusive_of_the_deadline() {
        let now = Utc::now();
        let session = Session {
            token: mint_token(),
            user_id: Uuid::new_v4(),
            full_name: "Test User".to_string(),
            role: "admin".to_string(),
            expires_at: now,
        };

        assert!(session.is_expired(now));
        assert!(session.is_expired(now + Duration::seconds(1)));
        assert!(!session.is_expired(now - Duration::seconds(1)));
    }
}
