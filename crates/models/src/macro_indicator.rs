use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "macro_indicators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub indicator_name: String,
    // Legacy column name kept from the first schema revision
    #[sea_orm(column_name = "indicator_category")]
    pub category: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_indicator_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("indicator_name required".into()));
    }
    if name.len() > 100 {
        return Err(ModelError::Validation("indicator_name too long (max 100)".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    indicator_name: &str,
    category: Option<&str>,
) -> Result<Model, ModelError> {
    validate_indicator_name(indicator_name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        indicator_name: Set(indicator_name.to_string()),
        category: Set(category.map(|s| s.to_string())),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(ModelError::from_db_err)
}
