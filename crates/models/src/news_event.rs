use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{company, industry, macro_indicator, news_company, news_industry, news_macro};

pub const SENTIMENT_MIN: i32 = -5;
pub const SENTIMENT_MAX: i32 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news_events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_date: Date,
    pub title: String,
    pub summary: Option<String>,
    pub source_url: Option<String>,
    pub sentiment_score: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("news relations go through the junction entities")
    }
}

impl Related<industry::Entity> for Entity {
    fn to() -> RelationDef {
        news_industry::Relation::Industry.def()
    }
    fn via() -> Option<RelationDef> {
        Some(news_industry::Relation::News.def().rev())
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef {
        news_company::Relation::Company.def()
    }
    fn via() -> Option<RelationDef> {
        Some(news_company::Relation::News.def().rev())
    }
}

impl Related<macro_indicator::Entity> for Entity {
    fn to() -> RelationDef {
        news_macro::Relation::Macro.def()
    }
    fn via() -> Option<RelationDef> {
        Some(news_macro::Relation::News.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    Ok(())
}

pub fn validate_sentiment_score(score: Option<i32>) -> Result<(), ModelError> {
    if let Some(s) = score {
        if !(SENTIMENT_MIN..=SENTIMENT_MAX).contains(&s) {
            return Err(ModelError::Validation(format!(
                "sentiment_score must be between {SENTIMENT_MIN} and {SENTIMENT_MAX}"
            )));
        }
    }
    Ok(())
}

/// Insert the scalar part of a news event. Tag sets are attached separately
/// by the service layer inside the same transaction.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    title: &str,
    summary: Option<&str>,
    event_date: Option<Date>,
    source_url: Option<&str>,
    sentiment_score: Option<i32>,
) -> Result<Model, ModelError> {
    validate_title(title)?;
    validate_sentiment_score(sentiment_score)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        event_date: Set(event_date.unwrap_or_else(|| Utc::now().date_naive())),
        title: Set(title.to_string()),
        summary: Set(summary.map(|s| s.to_string())),
        source_url: Set(source_url.map(|s| s.to_string())),
        sentiment_score: Set(sentiment_score),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(ModelError::from_db_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_bounds_inclusive() {
        assert!(validate_sentiment_score(Some(-5)).is_ok());
        assert!(validate_sentiment_score(Some(5)).is_ok());
        assert!(validate_sentiment_score(None).is_ok());
    }

    #[test]
    fn sentiment_out_of_range_rejected() {
        assert!(validate_sentiment_score(Some(6)).is_err());
        assert!(validate_sentiment_score(Some(-6)).is_err());
    }

    #[test]
    fn title_must_be_present() {
        assert!(validate_title("").is_err());
        assert!(validate_title("Fed raises rates").is_ok());
    }
}
