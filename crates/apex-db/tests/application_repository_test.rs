//! Integration tests for the Application repository and database probe
//! using in-memory SurrealDB.

use apex_core::models::application::{CreateApplication, NewApplication};
use apex_core::repository::{ApplicationRepository, DatabaseProbe};
use apex_db::repository::{SurrealApplicationRepository, SurrealDatabaseProbe};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up an empty in-memory DB.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    db
}

fn new_application(brand_name: &str) -> NewApplication {
    NewApplication::new(CreateApplication {
        brand_name: brand_name.into(),
        ..Default::default()
    })
    .unwrap()
}

// -----------------------------------------------------------------------
// Application repository
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_list_application() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db);

    let input = NewApplication::new(CreateApplication {
        brand_name: "Acme".into(),
        website: Some("https://acme.test".into()),
        instagram: Some("@acme".into()),
        monthly_revenue: Some("$10k-$50k".into()),
        biggest_struggle: Some("Ads".into()),
    })
    .unwrap();
    let created_at = input.created_at;

    let id = repo.create(input).await.unwrap();
    assert!(!id.is_empty());

    let apps = repo.list(20).await.unwrap();
    assert_eq!(apps.len(), 1);

    let app = &apps[0];
    assert_eq!(app.id, id);
    assert_eq!(app.brand_name, "Acme");
    assert_eq!(app.website.as_deref(), Some("https://acme.test"));
    assert_eq!(app.instagram.as_deref(), Some("@acme"));
    assert_eq!(app.monthly_revenue.as_deref(), Some("$10k-$50k"));
    assert_eq!(app.biggest_struggle.as_deref(), Some("Ads"));
    assert_eq!(app.created_at, Some(created_at));
    assert_eq!(app.updated_at, Some(created_at));
}

#[tokio::test]
async fn absent_optional_fields_read_back_as_none() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db);

    repo.create(new_application("Bare")).await.unwrap();

    let apps = repo.list(1).await.unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].website, None);
    assert_eq!(apps[0].instagram, None);
    assert_eq!(apps[0].monthly_revenue, None);
    assert_eq!(apps[0].biggest_struggle, None);
}

#[tokio::test]
async fn identifiers_are_unique() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db);

    let first = repo.create(new_application("One")).await.unwrap();
    let second = repo.create(new_application("One")).await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn list_respects_limit() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db);

    for i in 0..5 {
        repo.create(new_application(&format!("Brand {i}")))
            .await
            .unwrap();
    }

    assert_eq!(repo.list(3).await.unwrap().len(), 3);
    assert_eq!(repo.list(5).await.unwrap().len(), 5);
    assert_eq!(repo.list(50).await.unwrap().len(), 5);
    assert!(repo.list(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_applications_in_insertion_order() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db);

    let mut ids = Vec::new();
    for i in 0..4 {
        ids.push(
            repo.create(new_application(&format!("Brand {i}")))
                .await
                .unwrap(),
        );
    }

    let listed: Vec<String> = repo
        .list(10)
        .await
        .unwrap()
        .into_iter()
        .map(|app| app.id)
        .collect();
    assert_eq!(listed, ids);

    let first_two: Vec<String> = repo
        .list(2)
        .await
        .unwrap()
        .into_iter()
        .map(|app| app.id)
        .collect();
    assert_eq!(first_two, ids[..2].to_vec());
}

#[tokio::test]
async fn repeated_list_without_writes_is_stable() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db);

    for name in ["A", "B", "C"] {
        repo.create(new_application(name)).await.unwrap();
    }

    let first = repo.list(2).await.unwrap();
    let second = repo.list(2).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn list_clamps_limit_to_signed_range() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db);

    repo.create(new_application("Acme")).await.unwrap();

    assert_eq!(repo.list(u64::MAX).await.unwrap().len(), 1);
    assert_eq!(repo.list(i64::MAX as u64 + 1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_renders_foreign_record_keys_as_text() {
    let db = setup().await;
    db.query("CREATE application:42 SET brand_name = 'Numeric'")
        .await
        .unwrap()
        .check()
        .unwrap();
    db.query("CREATE application:ext SET brand_name = 'External'")
        .await
        .unwrap()
        .check()
        .unwrap();
    let repo = SurrealApplicationRepository::new(db);

    let apps = repo.list(10).await.unwrap();
    assert_eq!(apps.len(), 2);

    let numeric = apps.iter().find(|a| a.brand_name == "Numeric").unwrap();
    assert_eq!(numeric.id, "42");
    assert_eq!(numeric.created_at, None);

    let external = apps.iter().find(|a| a.brand_name == "External").unwrap();
    assert_eq!(external.id, "ext");
    assert_eq!(external.updated_at, None);
}

#[tokio::test]
async fn list_on_empty_database_returns_nothing() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db);

    assert!(repo.list(20).await.unwrap().is_empty());
}

// -----------------------------------------------------------------------
// Database probe
// -----------------------------------------------------------------------

#[tokio::test]
async fn probe_reports_no_collections_on_empty_database() {
    let db = setup().await;
    let probe = SurrealDatabaseProbe::new(db);

    assert!(probe.collections().await.unwrap().is_empty());
}

#[tokio::test]
async fn probe_lists_application_collection_after_insert() {
    let db = setup().await;
    let repo = SurrealApplicationRepository::new(db.clone());
    let probe = SurrealDatabaseProbe::new(db);

    repo.create(new_application("Acme")).await.unwrap();

    let collections = probe.collections().await.unwrap();
    assert_eq!(collections, vec!["application".to_string()]);
}
