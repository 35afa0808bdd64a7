//! PostgreSQL implementation of the vote store.
//!
//! Provides a PostgreSQL backend for the `VoteStore` trait with connection
//! pooling and upsert semantics.
//!
//! ## Key Features
//!
//! - Connection pooling with `sqlx::PgPool`
//! - Upsert support with `ON CONFLICT DO UPDATE`, so a new vote overwrites
//!   the previous one for the same `(record_id, user_id)` pair
//! - Runtime-bound queries, so the crate builds without a live database
//!
//! ## Database Tables
//!
//! - `user_votes`: one row per `(record_id, user_id)` pair
use crate::{VoteStore, VoteStoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use vote_widget_shared::types::{RecordId, UserId, VoteChoice, VoteRecord, VoteSubmission};

/// PostgreSQL implementation of the vote store.
///
/// Holds a `sqlx::PgPool` and maps the `user_votes` table to `VoteRecord`
/// values. Vote choices are persisted as smallint codes.
pub struct PostgresVoteStore {
    pool: sqlx::PgPool,
}

impl PostgresVoteStore {
    /// Creates a new PostgreSQL vote store instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool
    ///
    /// # Returns
    ///
    /// A `Result` holding the ready-to-use store, or a `VoteStoreError` if
    /// initialization fails.
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, VoteStoreError> {
        Ok(Self { pool })
    }

    /// Creates the `user_votes` table if it does not exist yet.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `VoteStoreError` if the schema
    /// statement fails.
    pub async fn ensure_schema(&self) -> Result<(), VoteStoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_votes (
                record_id   TEXT        NOT NULL,
                user_id     TEXT        NOT NULL,
                object_kind TEXT        NOT NULL,
                vote_choice SMALLINT    NOT NULL,
                voted_at    TIMESTAMPTZ NOT NULL,
                PRIMARY KEY (record_id, user_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl VoteStore for PostgresVoteStore {
    /// Reads the stored vote for a `(record, user)` pair.
    ///
    /// A missing row decodes to `Ok(None)`; an unknown choice code surfaces
    /// as `VoteStoreError::InvalidVoteChoice`.
    ///
    /// # Arguments
    ///
    /// * `record_id` - Identifier of the record being voted on.
    /// * `user_id` - Identifier of the voting user.
    ///
    /// # Returns
    ///
    /// A `Result` holding the stored `VoteRecord` if one exists.
    async fn get_vote(
        &self,
        record_id: &RecordId,
        user_id: &UserId,
    ) -> Result<Option<VoteRecord>, VoteStoreError> {
        let row = sqlx::query(
            r#"
            SELECT vote_choice, voted_at
            FROM user_votes
            WHERE record_id = $1 AND user_id = $2
            "#,
        )
        .bind(record_id.as_str())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let code: i16 = row.try_get("vote_choice")?;
        let voted_at: DateTime<Utc> = row.try_get("voted_at")?;
        let choice =
            VoteChoice::try_from(code).map_err(VoteStoreError::InvalidVoteChoice)?;

        Ok(Some(VoteRecord {
            record_id: record_id.clone(),
            user_id: user_id.clone(),
            choice,
            voted_at,
        }))
    }

    /// Records a vote using an upsert on `(record_id, user_id)`.
    ///
    /// A conflicting row is overwritten with the new choice and timestamp,
    /// which realizes the one-row-per-pair invariant regardless of the
    /// `had_prior_vote` hint carried by the submission.
    ///
    /// # Arguments
    ///
    /// * `submission` - The vote write payload.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `VoteStoreError` if the write fails.
    async fn record_vote(&self, submission: &VoteSubmission) -> Result<(), VoteStoreError> {
        sqlx::query(
            r#"
            INSERT INTO user_votes (record_id, user_id, object_kind, vote_choice, voted_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (record_id, user_id)
            DO UPDATE SET
                vote_choice = EXCLUDED.vote_choice,
                voted_at = EXCLUDED.voted_at
            "#,
        )
        .bind(submission.record_id.as_str())
        .bind(submission.user_id.as_str())
        .bind(submission.object_kind.as_str())
        .bind(submission.choice.as_code())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
