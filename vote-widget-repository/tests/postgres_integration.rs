//! Integration tests for the PostgreSQL vote store implementation.
//!
//! These tests require a real PostgreSQL database and use SQLx test macros
//! to ensure proper test isolation and cleanup.
//!
//! Run with: `cargo test --test postgres_integration`

use chrono::Utc;
use sqlx::Row;
use vote_widget_repository::{PostgresVoteStore, VoteStore, VoteStoreError};
use vote_widget_shared::types::{VoteChoice, VoteSubmission};

/// Creates a test vote submission with default identifiers.
fn make_submission(choice: VoteChoice, had_prior_vote: bool) -> VoteSubmission {
    VoteSubmission {
        record_id: "rec1".to_string(),
        user_id: "u1".to_string(),
        object_kind: "Answer__c".to_string(),
        choice,
        had_prior_vote,
    }
}

async fn make_store(pool: sqlx::PgPool) -> PostgresVoteStore {
    let store = PostgresVoteStore::new(pool).await.unwrap();
    store.ensure_schema().await.unwrap();
    store
}

#[sqlx::test]
async fn test_record_then_get_round_trip(pool: sqlx::PgPool) {
    let store = make_store(pool).await;

    store
        .record_vote(&make_submission(VoteChoice::Upvote, false))
        .await
        .unwrap();

    let record = store
        .get_vote(&"rec1".to_string(), &"u1".to_string())
        .await
        .unwrap()
        .expect("vote should be stored");

    assert_eq!(record.record_id, "rec1");
    assert_eq!(record.user_id, "u1");
    assert_eq!(record.choice, VoteChoice::Upvote);
}

#[sqlx::test]
async fn test_second_vote_overwrites_first(pool: sqlx::PgPool) {
    let store = make_store(pool.clone()).await;

    store
        .record_vote(&make_submission(VoteChoice::Upvote, false))
        .await
        .unwrap();
    store
        .record_vote(&make_submission(VoteChoice::Downvote, true))
        .await
        .unwrap();

    let record = store
        .get_vote(&"rec1".to_string(), &"u1".to_string())
        .await
        .unwrap()
        .expect("vote should be stored");
    assert_eq!(record.choice, VoteChoice::Downvote);

    // Overwrite, not duplicate: exactly one row for the pair.
    let rows = sqlx::query("SELECT vote_choice FROM user_votes")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].get::<i16, _>("vote_choice"),
        VoteChoice::Downvote.as_code()
    );
}

#[sqlx::test]
async fn test_votes_for_other_pairs_are_kept_apart(pool: sqlx::PgPool) {
    let store = make_store(pool).await;

    store
        .record_vote(&make_submission(VoteChoice::Upvote, false))
        .await
        .unwrap();
    store
        .record_vote(&VoteSubmission {
            user_id: "u2".to_string(),
            ..make_submission(VoteChoice::Downvote, false)
        })
        .await
        .unwrap();

    let u1_record = store
        .get_vote(&"rec1".to_string(), &"u1".to_string())
        .await
        .unwrap()
        .unwrap();
    let u2_record = store
        .get_vote(&"rec1".to_string(), &"u2".to_string())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(u1_record.choice, VoteChoice::Upvote);
    assert_eq!(u2_record.choice, VoteChoice::Downvote);
}

#[sqlx::test]
async fn test_get_vote_absent_returns_none(pool: sqlx::PgPool) {
    let store = make_store(pool).await;

    let record = store
        .get_vote(&"rec1".to_string(), &"u1".to_string())
        .await
        .unwrap();

    assert!(record.is_none());
}

#[sqlx::test]
async fn test_unknown_choice_code_surfaces_invalid_vote_choice(pool: sqlx::PgPool) {
    let store = make_store(pool.clone()).await;

    sqlx::query(
        r#"
        INSERT INTO user_votes (record_id, user_id, object_kind, vote_choice, voted_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind("rec1")
    .bind("u1")
    .bind("Answer__c")
    .bind(7i16)
    .bind(Utc::now())
    .execute(&pool)
    .await
    .unwrap();

    let result = store.get_vote(&"rec1".to_string(), &"u1".to_string()).await;

    assert!(matches!(result, Err(VoteStoreError::InvalidVoteChoice(7))));
}

#[sqlx::test]
async fn test_ensure_schema_is_idempotent(pool: sqlx::PgPool) {
    let store = make_store(pool).await;
    store.ensure_schema().await.unwrap();

    store
        .record_vote(&make_submission(VoteChoice::Upvote, false))
        .await
        .unwrap();
    let record = store
        .get_vote(&"rec1".to_string(), &"u1".to_string())
        .await
        .unwrap();
    assert!(record.is_some());
}
