use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ModelError, industry};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ticker: String,
    pub company_name: String,
    pub base_industry_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    BaseIndustry,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::BaseIndustry => Entity::belongs_to(industry::Entity)
                .from(Column::BaseIndustryId)
                .to(industry::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_ticker(ticker: &str) -> Result<(), ModelError> {
    if ticker.trim().is_empty() {
        return Err(ModelError::Validation("ticker required".into()));
    }
    if ticker.len() > 20 {
        return Err(ModelError::Validation("ticker too long (max 20)".into()));
    }
    Ok(())
}

pub fn validate_company_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("company_name required".into()));
    }
    if name.len() > 255 {
        return Err(ModelError::Validation("company_name too long (max 255)".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    ticker: &str,
    company_name: &str,
    base_industry_id: Option<Uuid>,
) -> Result<Model, ModelError> {
    validate_ticker(ticker)?;
    validate_company_name(company_name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        ticker: Set(ticker.to_string()),
        company_name: Set(company_name.to_string()),
        base_industry_id: Set(base_industry_id),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(ModelError::from_db_err)
}
