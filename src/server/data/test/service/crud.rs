use super::*;
use entity::prelude::Service;
use entity::service::ServiceType;

/// Tests the type filter of the directory listing.
///
/// Expected: only entries of the requested type; None returns everything
#[tokio::test]
async fn filters_listing_by_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Service).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::service::ServiceFactory::new(db)
        .service_type(ServiceType::Veterinaire)
        .build()
        .await?;
    factory::service::ServiceFactory::new(db)
        .service_type(ServiceType::Toiletteur)
        .build()
        .await?;

    let repo = ServiceRepository::new(db);

    let vets = repo.list(Some(ServiceType::Veterinaire)).await?;
    assert_eq!(vets.len(), 1);
    assert_eq!(vets[0].service_type, ServiceType::Veterinaire);

    let all = repo.list(None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests update and delete on a directory entry.
///
/// Expected: Ok(Some)/Ok(true) when the entry exists, Ok(None)/Ok(false)
/// otherwise
#[tokio::test]
async fn updates_and_deletes_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Service).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::service::create_service(db).await?;
    let repo = ServiceRepository::new(db);

    let updated = repo
        .update(
            service.id,
            UpdateServiceDto {
                phone: Some("+212 5 22 33 44 55".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.phone, Some("+212 5 22 33 44 55".to_string()));
    assert_eq!(updated.name, service.name);

    assert!(repo.delete(service.id).await?);
    assert!(repo.get_by_id(service.id).await?.is_none());

    assert!(repo
        .update(
            999999,
            UpdateServiceDto {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?
        .is_none());
    assert!(!repo.delete(999999).await?);

    Ok(())
}
