use anyhow::Result;

use super::setup_test_db;
use crate::car::{self, CarData};
use crate::errors::ModelError;

fn sample(model: &str, rate: f64, available: bool, car_type: &str) -> CarData {
    CarData {
        model: model.to_string(),
        company: "Acme Motors".to_string(),
        daily_rate: rate,
        image_url: Some(format!("https://img.example.com/{model}.jpg")),
        available,
        car_type: Some(car_type.to_string()),
    }
}

#[tokio::test]
async fn test_car_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create
    let created = car::create(&db, sample("Civic", 45.0, true, "Sedan")).await?;
    assert!(created.id > 0);
    assert_eq!(created.model, "Civic");

    // Read
    let found = car::find_by_id(&db, created.id).await?.expect("car present");
    assert_eq!(found, created);

    // Replace
    let mut changed = sample("Civic Hybrid", 52.5, false, "Sedan");
    changed.image_url = None;
    let replaced = car::replace(&db, created.id, changed).await?;
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.model, "Civic Hybrid");
    assert_eq!(replaced.image_url, None);
    assert!(!replaced.available);

    // Delete
    assert!(car::delete(&db, created.id).await?);
    assert!(car::find_by_id(&db, created.id).await?.is_none());
    assert!(!car::delete(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_replace_missing_car_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let err = car::replace(&db, 4242, sample("Ghost", 1.0, true, "SUV")).await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_finders() -> Result<()> {
    let db = setup_test_db().await?;
    let a = car::create(&db, sample("Corolla", 40.0, true, "Sedan")).await?;
    let b = car::create(&db, sample("RAV4", 70.0, false, "SUV")).await?;
    let c = car::create(&db, sample("Model 3", 100.0, true, "Electric")).await?;

    let all = car::find_all(&db).await?;
    assert_eq!(all.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a.id, b.id, c.id]);

    let available = car::find_available(&db).await?;
    assert_eq!(available.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a.id, c.id]);

    let suvs = car::find_by_type(&db, "SUV").await?;
    assert_eq!(suvs.len(), 1);
    assert_eq!(suvs[0].id, b.id);
    assert!(car::find_by_type(&db, "Minivan").await?.is_empty());

    // Bounds are inclusive
    let mid = car::find_by_daily_rate_between(&db, 40.0, 70.0).await?;
    assert_eq!(mid.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a.id, b.id]);

    let inverted = car::find_by_daily_rate_between(&db, 90.0, 10.0).await?;
    assert!(inverted.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_car_json_shape() -> Result<()> {
    let db = setup_test_db().await?;
    let created = car::create(&db, sample("Golf", 38.0, true, "Compact")).await?;
    let v = serde_json::to_value(&created)?;
    assert_eq!(v["dailyRate"], 38.0);
    assert_eq!(v["type"], "Compact");
    assert_eq!(v["imageUrl"], "https://img.example.com/Golf.jpg");
    assert!(v.get("car_type").is_none());
    Ok(())
}
