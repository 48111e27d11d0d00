use anyhow::Result;

use super::setup_test_db;
use crate::errors::ModelError;
use crate::user;

fn alice() -> user::Model {
    user::Model {
        username: "alice".into(),
        name: Some("Alice Doe".into()),
        email: Some("alice@example.com".into()),
        password: "wonderland".into(),
        phone: Some("+1-555-0100".into()),
    }
}

#[tokio::test]
async fn test_create_and_lookup() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(!user::exists(&db, "alice").await?);

    let created = user::create(&db, alice()).await?;
    assert_eq!(created, alice());

    assert!(user::exists(&db, "alice").await?);
    let found = user::find_by_username(&db, "alice").await?.expect("user present");
    assert_eq!(found.email.as_deref(), Some("alice@example.com"));
    assert!(user::find_by_username(&db, "bob").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_username_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, alice()).await?;
    let err = user::create(&db, alice()).await.unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_blank_username_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let mut u = alice();
    u.username = "   ".into();
    let err = user::create(&db, u).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn test_find_by_email_and_password() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, alice()).await?;

    let hit = user::find_by_email_and_password(&db, "alice@example.com", "wonderland").await?;
    assert_eq!(hit.map(|u| u.username), Some("alice".to_string()));

    assert!(user::find_by_email_and_password(&db, "alice@example.com", "nope").await?.is_none());
    assert!(user::find_by_email_and_password(&db, "bob@example.com", "wonderland").await?.is_none());
    Ok(())
}
