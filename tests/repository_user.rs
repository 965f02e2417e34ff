//! Repository tests against a real PostgreSQL instance.
//!
//! `#[sqlx::test]` creates a scratch database per test and applies
//! `migrations/`. Run with `DATABASE_URL` set:
//!
//! ```bash
//! cargo test --test repository_user -- --ignored
//! ```

use sqlx::PgPool;
use std::sync::Arc;
use user_cache_service::domain::entities::NewUser;
use user_cache_service::domain::repositories::UserRepository;
use user_cache_service::infrastructure::persistence::PgUserRepository;

fn new_user(first_name: &str, last_name: &str, age: i32) -> NewUser {
    NewUser {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age,
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_returns_generated_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let first = repo.create(new_user("Ada", "Lovelace", 36)).await.unwrap();
    let second = repo.create(new_user("Alan", "Turing", 41)).await.unwrap();

    assert!(first.id > 0);
    assert_ne!(first.id, second.id);
    assert_eq!(first.first_name, "Ada");
    assert_eq!(second.age, 41);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let created = repo.create(new_user("Ada", "Lovelace", 36)).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = repo.find_by_id(999_999).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_reports_rows_affected(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let created = repo.create(new_user("Ada", "Lovelace", 36)).await.unwrap();

    let affected = repo
        .update(created.id, new_user("Ada", "King", 37))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let updated = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(updated.last_name, "King");
    assert_eq!(updated.age, 37);

    let affected = repo
        .update(999_999, new_user("No", "Body", 1))
        .await
        .unwrap();
    assert_eq!(affected, 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let created = repo.create(new_user("Ada", "Lovelace", 36)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_is_ordered_by_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    assert!(repo.list().await.unwrap().is_empty());

    let a = repo.create(new_user("Ada", "Lovelace", 36)).await.unwrap();
    let b = repo.create(new_user("Alan", "Turing", 41)).await.unwrap();

    let users = repo.list().await.unwrap();
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
