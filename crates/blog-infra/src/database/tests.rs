use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRecord, BlogRepository};

use crate::database::entity::blog;
use crate::database::postgres_repo::PostgresBlogRepository;

fn model(id: i64, title: &str) -> blog::Model {
    let now = Utc::now();
    blog::Model {
        id,
        title: title.to_owned(),
        content: format!("{title} content"),
        created_date: now.into(),
        last_modified_date: now.into(),
    }
}

#[tokio::test]
async fn test_find_blog_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(1, "Test Blog")]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let result: Option<BlogRecord> = repo.find_by_id(1).await.unwrap();

    let record = result.expect("blog should be found");
    assert_eq!(record.id, Some(1));
    assert_eq!(record.title, "Test Blog");
    assert_eq!(record.content, "Test Blog content");
}

#[tokio::test]
async fn test_find_blog_by_id_absent() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog::Model>::new()])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let result: Option<BlogRecord> = repo.find_by_id(7).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_blogs() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(1, "TitleA"), model(2, "TitleB")]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let records = repo.find_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, Some(1));
    assert_eq!(records[0].title, "TitleA");
    assert_eq!(records[1].id, Some(2));
    assert_eq!(records[1].title, "TitleB");
}

#[tokio::test]
async fn test_insert_returns_generated_id() {
    let inserted = model(5, "New");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![inserted.clone()]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let record = BlogRecord::new("New".to_owned(), "New content".to_owned(), Utc::now());
    let saved = repo.save(record).await.unwrap();

    assert_eq!(saved.id, Some(5));
    assert_eq!(saved.title, "New");
    assert_eq!(
        saved.created_date,
        chrono::DateTime::<Utc>::from(inserted.created_date)
    );
}

#[tokio::test]
async fn test_update_of_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog::Model>::new()])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let now = Utc::now();
    let record = BlogRecord {
        id: Some(99),
        title: "Title".to_owned(),
        content: "Content".to_owned(),
        created_date: now - Duration::minutes(5),
        last_modified_date: now,
    };

    assert!(matches!(repo.save(record).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_blog() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let repo: &dyn BlogRepository = &repo;

    repo.delete(1).await.unwrap();
    assert!(matches!(repo.delete(1).await, Err(RepoError::NotFound)));
}

#[test]
fn test_update_active_model_leaves_created_date_unchanged() {
    use sea_orm::ActiveValue;

    let now = Utc::now();
    let record = BlogRecord {
        id: Some(3),
        title: "Title".to_owned(),
        content: "Content".to_owned(),
        created_date: now,
        last_modified_date: now,
    };

    let active: blog::ActiveModel = record.into();
    assert!(matches!(active.id, ActiveValue::Unchanged(3)));
    assert!(matches!(active.created_date, ActiveValue::Unchanged(_)));
    assert!(matches!(active.title, ActiveValue::Set(_)));

    let insert: blog::ActiveModel =
        BlogRecord::new("T".to_owned(), "C".to_owned(), now).into();
    assert!(matches!(insert.id, ActiveValue::NotSet));
}

#[test]
fn test_title_column_is_bounded() {
    use sea_orm::sea_query::StringLen;
    use sea_orm::{ColumnTrait, ColumnType};

    let title = blog::Column::Title.def();
    assert_eq!(
        *title.get_column_type(),
        ColumnType::String(StringLen::N(100))
    );

    let content = blog::Column::Content.def();
    assert_eq!(*content.get_column_type(), ColumnType::Text);
}
