use models::macro_indicator::{self, Entity as MacroEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::ServiceError;

pub async fn list_macro_indicators(
    db: &DatabaseConnection,
) -> Result<Vec<macro_indicator::Model>, ServiceError> {
    MacroEntity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_macro_indicator(
    db: &DatabaseConnection,
    indicator_name: &str,
    category: Option<&str>,
) -> Result<macro_indicator::Model, ServiceError> {
    let created = macro_indicator::create(db, indicator_name, category).await?;
    Ok(created)
}

/// Full replacement (PUT semantics): every recognized field is written, so an
/// omitted category resets to null. This deliberately differs from the
/// partial-merge contract of industries and companies.
pub async fn replace_macro_indicator(
    db: &DatabaseConnection,
    id: Uuid,
    indicator_name: &str,
    category: Option<&str>,
) -> Result<macro_indicator::Model, ServiceError> {
    macro_indicator::validate_indicator_name(indicator_name)?;
    let current = MacroEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("macro indicator"));
    };
    let mut am: macro_indicator::ActiveModel = existing.into();
    am.indicator_name = Set(indicator_name.to_string());
    am.category = Set(category.map(|s| s.to_string()));
    let updated = am.update(db).await.map_err(ServiceError::from_db_err)?;
    Ok(updated)
}

pub async fn delete_macro_indicator(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<bool, ServiceError> {
    let res = MacroEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn macro_indicator_crud() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let name = format!("svc_macro_{}", Uuid::new_v4());
        let made = create_macro_indicator(&db, &name, Some("inflation")).await?;
        assert_eq!(made.category.as_deref(), Some("inflation"));

        let all = list_macro_indicators(&db).await?;
        assert!(all.iter().any(|m| m.id == made.id));

        assert!(delete_macro_indicator(&db, made.id).await?);
        assert!(!delete_macro_indicator(&db, made.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn replace_resets_omitted_category() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let name = format!("svc_macro_{}", Uuid::new_v4());
        let made = create_macro_indicator(&db, &name, Some("rates")).await?;

        // full replacement without a category clears it
        let renamed = format!("svc_macro_{}", Uuid::new_v4());
        let replaced = replace_macro_indicator(&db, made.id, &renamed, None).await?;
        assert_eq!(replaced.indicator_name, renamed);
        assert_eq!(replaced.category, None);

        delete_macro_indicator(&db, made.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn replace_of_missing_indicator_is_not_found() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let missing = replace_macro_indicator(&db, Uuid::new_v4(), "GDP", None).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
