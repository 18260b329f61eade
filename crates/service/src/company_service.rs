use models::company::{self, Entity as CompanyEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::errors::ServiceError;

pub const DEFAULT_LIST_LIMIT: u64 = 100;

/// Create a company. Duplicate tickers surface as conflicts, a dangling
/// industry id as a validation error.
pub async fn create_company(
    db: &DatabaseConnection,
    ticker: &str,
    company_name: &str,
    base_industry_id: Option<Uuid>,
) -> Result<company::Model, ServiceError> {
    let created = company::create(db, ticker, company_name, base_industry_id).await?;
    Ok(created)
}

/// Windowed listing in creation order (id breaks timestamp ties so the order
/// is stable across pages). No total count is computed.
pub async fn list_companies(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<company::Model>, ServiceError> {
    CompanyEntity::find()
        .order_by_asc(company::Column::CreatedAt)
        .order_by_asc(company::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn get_company(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<company::Model>, ServiceError> {
    CompanyEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Partial update. `None` leaves a field untouched; `Some(None)` clears the
/// nullable industry link.
pub async fn update_company(
    db: &DatabaseConnection,
    id: Uuid,
    ticker: Option<&str>,
    company_name: Option<&str>,
    base_industry_id: Option<Option<Uuid>>,
) -> Result<company::Model, ServiceError> {
    let current = CompanyEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("company"));
    };
    let mut am: company::ActiveModel = existing.into();
    if let Some(t) = ticker {
        company::validate_ticker(t)?;
        am.ticker = Set(t.to_string());
    }
    if let Some(n) = company_name {
        company::validate_company_name(n)?;
        am.company_name = Set(n.to_string());
    }
    if let Some(b) = base_industry_id {
        am.base_industry_id = Set(b);
    }
    let updated = am.update(db).await.map_err(ServiceError::from_db_err)?;
    Ok(updated)
}

/// Delete a company; returns true if deleted. News junction rows cascade.
pub async fn delete_company(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = CompanyEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
