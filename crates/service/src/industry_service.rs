use models::industry::{self, Entity as IndustryEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::ServiceError;

/// List all industries. Order is not part of the contract.
pub async fn list_industries(db: &DatabaseConnection) -> Result<Vec<industry::Model>, ServiceError> {
    IndustryEntity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create an industry. Duplicate names surface as conflicts, a dangling
/// parent id as a validation error (the FK rejects it).
pub async fn create_industry(
    db: &DatabaseConnection,
    name: &str,
    parent_id: Option<Uuid>,
    description: Option<&str>,
) -> Result<industry::Model, ServiceError> {
    let created = industry::create(db, name, parent_id, description).await?;
    Ok(created)
}

/// Partial update. `None` means "leave untouched"; `Some(None)` clears a
/// nullable field.
pub async fn update_industry(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    parent_id: Option<Option<Uuid>>,
    description: Option<Option<String>>,
) -> Result<industry::Model, ServiceError> {
    let current = IndustryEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("industry"));
    };
    let mut am: industry::ActiveModel = existing.into();
    if let Some(n) = name {
        industry::validate_name(n)?;
        am.name = Set(n.to_string());
    }
    if let Some(p) = parent_id {
        am.parent_id = Set(p);
    }
    if let Some(d) = description {
        am.description = Set(d);
    }
    let updated = am.update(db).await.map_err(ServiceError::from_db_err)?;
    Ok(updated)
}

/// Delete an industry; returns true if a row was removed. Sub-industries and
/// companies keep their rows with the reference nulled; junction rows cascade.
pub async fn delete_industry(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = IndustryEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// Derived child index over `parent_id`.
pub async fn sub_industries(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Vec<industry::Model>, ServiceError> {
    let children = industry::sub_industries(db, id).await?;
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn industry_crud_and_hierarchy() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let name = format!("svc_industry_{}", Uuid::new_v4());
        let parent = create_industry(&db, &name, None, Some("broad sector")).await?;
        assert_eq!(parent.name, name);
        assert_eq!(parent.description.as_deref(), Some("broad sector"));

        let child_name = format!("svc_industry_{}", Uuid::new_v4());
        let child = create_industry(&db, &child_name, Some(parent.id), None).await?;
        assert_eq!(child.parent_id, Some(parent.id));

        let children = sub_industries(&db, parent.id).await?;
        assert!(children.iter().any(|c| c.id == child.id));

        let all = list_industries(&db).await?;
        assert!(all.iter().any(|i| i.id == parent.id));

        // cleanup
        assert!(delete_industry(&db, child.id).await?);
        assert!(delete_industry(&db, parent.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let name = format!("svc_industry_{}", Uuid::new_v4());
        let a = create_industry(&db, &name, None, None).await?;
        let dup = create_industry(&db, &name, None, None).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        // the failed create must not leave a second row behind
        let count = list_industries(&db)
            .await?
            .into_iter()
            .filter(|i| i.name == name)
            .count();
        assert_eq!(count, 1);

        delete_industry(&db, a.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_distinguishes_absent_from_null() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let name = format!("svc_industry_{}", Uuid::new_v4());
        let made = create_industry(&db, &name, None, Some("keep me")).await?;

        // absent description: untouched
        let renamed = format!("svc_industry_{}", Uuid::new_v4());
        let updated = update_industry(&db, made.id, Some(&renamed), None, None).await?;
        assert_eq!(updated.name, renamed);
        assert_eq!(updated.description.as_deref(), Some("keep me"));

        // explicit null: cleared
        let cleared = update_industry(&db, made.id, None, None, Some(None)).await?;
        assert_eq!(cleared.description, None);
        assert_eq!(cleared.name, renamed);

        delete_industry(&db, made.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn deleting_parent_detaches_children() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let parent =
            create_industry(&db, &format!("svc_industry_{}", Uuid::new_v4()), None, None).await?;
        let child = create_industry(
            &db,
            &format!("svc_industry_{}", Uuid::new_v4()),
            Some(parent.id),
            None,
        )
        .await?;

        assert!(delete_industry(&db, parent.id).await?);

        let reloaded = models::industry::Entity::find_by_id(child.id)
            .one(&db)
            .await?
            .expect("child survives parent deletion");
        assert_eq!(reloaded.parent_id, None);

        delete_industry(&db, child.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_industry_is_not_found() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let missing = update_industry(&db, Uuid::new_v4(), Some("nope"), None, None).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
