//! Store tests against a real Postgres database (DATABASE_URL)

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use guestbook_server::{
    config::CommentsConfig,
    models::{CreateComment, VisitOutcome},
    repository::{Repository, VisitorStore},
    services::Services,
};

async fn repository() -> Repository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    Repository::new(pool)
}

/// Identifier no other test run will reuse
fn fresh_client() -> String {
    format!("test-{}", Uuid::new_v4().simple())
}

/// Visit rows stored for the given identifiers on `date`
async fn visit_rows(repository: &Repository, clients: &[String], date: NaiveDate) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM visitor_ips WHERE ip_address = ANY($1) AND visit_date = $2")
        .bind(clients)
        .bind(date)
        .fetch_one(&repository.pool)
        .await
        .unwrap()
}

// The global counter is shared with every other test touching this database,
// so exact assertions are made on the per-client visit rows and outcomes.

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore]
async fn test_concurrent_increments_for_one_client_count_once() {
    let repository = repository().await;
    let services = Services::new(repository.clone(), CommentsConfig::default());
    let client = fresh_client();
    let today = Utc::now().date_naive();

    let before = repository.visitors.current_count().await.unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let visitors = services.visitors.clone();
            let client = client.clone();
            tokio::spawn(async move { visitors.record_visit(&client, today).await })
        })
        .collect();

    let mut responses = Vec::new();
    for handle in handles {
        responses.push(handle.await.unwrap().unwrap());
    }

    assert_eq!(visit_rows(&repository, &[client.clone()], today).await, 1);
    assert!(responses.iter().all(|&count| count > before));

    // A second burst straight at the store sees only duplicates
    let store: Arc<dyn VisitorStore> = Arc::new(repository.visitors.clone());
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            let client = client.clone();
            tokio::spawn(async move { store.record_visit(&client, today).await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), VisitOutcome::AlreadyCounted);
    }
    assert_eq!(visit_rows(&repository, &[client.clone()], today).await, 1);

    // Another day is a separate visit
    let tomorrow = today.succ_opt().unwrap();
    assert_eq!(
        repository.visitors.record_visit(&client, tomorrow).await.unwrap(),
        VisitOutcome::Counted
    );
    assert_eq!(
        repository.visitors.record_visit(&client, tomorrow).await.unwrap(),
        VisitOutcome::AlreadyCounted
    );
    assert_eq!(visit_rows(&repository, &[client], tomorrow).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore]
async fn test_concurrent_distinct_clients_are_all_counted() {
    let repository = repository().await;
    let clients: Vec<String> = (0..16).map(|_| fresh_client()).collect();
    let today = Utc::now().date_naive();

    let before = repository.visitors.current_count().await.unwrap();

    let handles: Vec<_> = clients
        .iter()
        .cloned()
        .map(|client| {
            let visitors = repository.visitors.clone();
            tokio::spawn(async move { visitors.record_visit(&client, today).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), VisitOutcome::Counted);
    }

    assert_eq!(visit_rows(&repository, &clients, today).await, clients.len() as i64);

    // Other tests only ever add to the counter, so a lost update shows up as a
    // shortfall here
    let after = repository.visitors.current_count().await.unwrap();
    assert!(after - before >= clients.len() as i64);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_leaves_counter_untouched() {
    let repository = repository().await;
    let client = fresh_client();
    let date = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();

    assert_eq!(
        repository.visitors.record_visit(&client, date).await.unwrap(),
        VisitOutcome::Counted
    );
    assert_eq!(
        repository.visitors.record_visit(&client, date).await.unwrap(),
        VisitOutcome::AlreadyCounted
    );
}

#[tokio::test]
#[ignore]
async fn test_comments_listed_newest_first() {
    let repository = repository().await;
    let services = Services::new(repository, CommentsConfig::default());
    let tag = Uuid::new_v4().simple().to_string();

    for n in 1..=3 {
        services
            .comments
            .create(CreateComment::new(format!("t{n}-{tag}"), "hello"))
            .await
            .unwrap();
    }

    let names: Vec<_> = services
        .comments
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .filter(|name| name.ends_with(&tag))
        .collect();

    assert_eq!(
        names,
        [format!("t3-{tag}"), format!("t2-{tag}"), format!("t1-{tag}")]
    );
}
