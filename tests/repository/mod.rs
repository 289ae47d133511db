//! Repository Tests
//!
//! Id assignment checks shared by every `BookRepository` implementation.
//! The PostgreSQL run is ignored by default; set `TEST_DATABASE_URL` and
//! pass `--ignored` to include it. It truncates the `books` table.

use book_manager::domain::{Book, BookDetails, BookRepository, Genre};
use book_manager::infrastructure::database;
use book_manager::infrastructure::repositories::{InMemoryBookRepository, PgBookRepository};
use pretty_assertions::assert_eq;
use sqlx::PgPool;

fn details(title: &str) -> BookDetails {
    BookDetails {
        title: title.to_string(),
        description: format!("This is the description for {title}"),
        author: "Person".to_string(),
        genre: Genre::Mystery,
    }
}

/// Explicit ids push later assignments past them, and neither updates nor
/// deletes cause an assigned id to be handed out again.
async fn assert_ids_never_reused<R: BookRepository>(repo: &R) {
    let explicit = repo
        .save(&Book::from_details(10, details("Explicit")))
        .await
        .unwrap();
    assert_eq!(explicit.id, 10);

    let a = repo.insert(&details("A")).await.unwrap();
    let b = repo.insert(&details("B")).await.unwrap();
    let c = repo.insert(&details("C")).await.unwrap();
    assert!(explicit.id < a.id && a.id < b.id && b.id < c.id);

    assert!(repo.delete_by_id(c.id).await.unwrap());

    let mut revised = a.clone();
    revised.title = "A revised".to_string();
    assert_eq!(repo.save(&revised).await.unwrap(), revised);

    let d = repo.insert(&details("D")).await.unwrap();
    assert!(d.id > c.id, "deleted id {} was reassigned as {}", c.id, d.id);

    // Saving below the highest assigned id leaves assignment untouched.
    repo.save(&Book::from_details(2, details("Low")))
        .await
        .unwrap();
    let e = repo.insert(&details("E")).await.unwrap();
    assert!(e.id > d.id);

    let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, explicit.id, a.id, b.id, d.id, e.id]);
    assert_eq!(repo.find_by_id(a.id).await.unwrap(), Some(revised));
}

#[tokio::test]
async fn test_in_memory_ids_never_reused() {
    assert_ids_never_reused(&InMemoryBookRepository::new()).await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_postgres_ids_never_reused() {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let pool = PgPool::connect(&url).await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    sqlx::query("TRUNCATE books RESTART IDENTITY")
        .execute(&pool)
        .await
        .unwrap();

    assert_ids_never_reused(&PgBookRepository::new(pool)).await;
}
