use chrono::NaiveDate;
use models::{company, industry, macro_indicator, news_company, news_event, news_industry, news_macro};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// A news event together with its three fully expanded tag sets.
#[derive(Debug, Serialize)]
pub struct NewsWithTags {
    #[serde(flatten)]
    pub event: news_event::Model,
    pub industries: Vec<industry::Model>,
    pub companies: Vec<company::Model>,
    pub macros: Vec<macro_indicator::Model>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNewsEvent {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<i32>,
    #[serde(default)]
    pub industry_ids: Vec<Uuid>,
    #[serde(default)]
    pub company_ids: Vec<Uuid>,
    #[serde(default)]
    pub macro_ids: Vec<Uuid>,
}

/// Create a news event and attach its tag sets in one transaction.
///
/// Requested ids are resolved against their tables; ids that match nothing
/// are silently dropped, so the stored tag set is the intersection of the
/// request and the existing records.
pub async fn create_news_event(
    db: &DatabaseConnection,
    input: NewNewsEvent,
) -> Result<NewsWithTags, ServiceError> {
    // reject bad input before anything is written
    news_event::validate_title(&input.title)?;
    news_event::validate_sentiment_score(input.sentiment_score)?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let event = news_event::create(
        &txn,
        &input.title,
        input.summary.as_deref(),
        input.event_date,
        input.source_url.as_deref(),
        input.sentiment_score,
    )
    .await?;

    let industries = if input.industry_ids.is_empty() {
        Vec::new()
    } else {
        industry::Entity::find()
            .filter(industry::Column::Id.is_in(input.industry_ids.iter().copied()))
            .all(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
    };
    let companies = if input.company_ids.is_empty() {
        Vec::new()
    } else {
        company::Entity::find()
            .filter(company::Column::Id.is_in(input.company_ids.iter().copied()))
            .all(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
    };
    let macros = if input.macro_ids.is_empty() {
        Vec::new()
    } else {
        macro_indicator::Entity::find()
            .filter(macro_indicator::Column::Id.is_in(input.macro_ids.iter().copied()))
            .all(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
    };

    if !industries.is_empty() {
        news_industry::Entity::insert_many(industries.iter().map(|i| news_industry::ActiveModel {
            news_id: Set(event.id),
            industry_id: Set(i.id),
        }))
        .exec(&txn)
        .await
        .map_err(ServiceError::from_db_err)?;
    }
    if !companies.is_empty() {
        news_company::Entity::insert_many(companies.iter().map(|c| news_company::ActiveModel {
            news_id: Set(event.id),
            company_id: Set(c.id),
        }))
        .exec(&txn)
        .await
        .map_err(ServiceError::from_db_err)?;
    }
    if !macros.is_empty() {
        news_macro::Entity::insert_many(macros.iter().map(|m| news_macro::ActiveModel {
            news_id: Set(event.id),
            macro_id: Set(m.id),
        }))
        .exec(&txn)
        .await
        .map_err(ServiceError::from_db_err)?;
    }

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    tracing::info!(
        id = %event.id,
        industries = industries.len(),
        companies = companies.len(),
        macros = macros.len(),
        "news event created with resolved tag sets"
    );
    Ok(NewsWithTags { event, industries, companies, macros })
}

/// List all news events with their tag sets eagerly loaded.
/// One query per relation for the whole batch, not per event.
pub async fn list_news_events(db: &DatabaseConnection) -> Result<Vec<NewsWithTags>, ServiceError> {
    let events = news_event::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let industries = events
        .load_many_to_many(industry::Entity, news_industry::Entity, db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let companies = events
        .load_many_to_many(company::Entity, news_company::Entity, db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let macros = events
        .load_many_to_many(macro_indicator::Entity, news_macro::Entity, db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let out = events
        .into_iter()
        .zip(industries)
        .zip(companies)
        .zip(macros)
        .map(|(((event, industries), companies), macros)| NewsWithTags {
            event,
            industries,
            companies,
            macros,
        })
        .collect();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{company_service, industry_service, test_support};

    fn ticker() -> String {
        format!("T{}", &Uuid::new_v4().simple().to_string()[..12]).to_uppercase()
    }

    #[tokio::test]
    async fn out_of_range_sentiment_writes_nothing() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let title = format!("svc_news_{}", Uuid::new_v4());
        let res = create_news_event(
            &db,
            NewNewsEvent {
                title: title.clone(),
                sentiment_score: Some(6),
                ..NewNewsEvent::default()
            },
        )
        .await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        let leftover = news_event::Entity::find()
            .filter(news_event::Column::Title.eq(title))
            .one(&db)
            .await?;
        assert!(leftover.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_tag_ids_are_dropped() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let ind = industry_service::create_industry(
            &db,
            &format!("svc_industry_{}", Uuid::new_v4()),
            None,
            None,
        )
        .await?;

        let made = create_news_event(
            &db,
            NewNewsEvent {
                title: format!("svc_news_{}", Uuid::new_v4()),
                industry_ids: vec![ind.id, Uuid::new_v4()],
                ..NewNewsEvent::default()
            },
        )
        .await?;

        assert_eq!(made.industries.len(), 1);
        assert_eq!(made.industries[0].id, ind.id);

        news_event::Entity::delete_by_id(made.event.id).exec(&db).await?;
        industry_service::delete_industry(&db, ind.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn tag_sets_round_trip_through_listing() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let ind_a = industry_service::create_industry(
            &db,
            &format!("svc_industry_{}", Uuid::new_v4()),
            None,
            None,
        )
        .await?;
        let ind_b = industry_service::create_industry(
            &db,
            &format!("svc_industry_{}", Uuid::new_v4()),
            None,
            None,
        )
        .await?;
        let comp = company_service::create_company(&db, &ticker(), "Tagged Co", None).await?;

        let made = create_news_event(
            &db,
            NewNewsEvent {
                title: format!("svc_news_{}", Uuid::new_v4()),
                summary: Some("two industries, one company".into()),
                sentiment_score: Some(-3),
                industry_ids: vec![ind_a.id, ind_b.id],
                company_ids: vec![comp.id],
                ..NewNewsEvent::default()
            },
        )
        .await?;

        let listed = list_news_events(&db).await?;
        let found = listed
            .iter()
            .find(|n| n.event.id == made.event.id)
            .expect("created event is listed");

        let mut expected = vec![ind_a.id, ind_b.id];
        expected.sort();
        let mut got: Vec<Uuid> = found.industries.iter().map(|i| i.id).collect();
        got.sort();
        assert_eq!(got, expected);

        let company_ids: Vec<Uuid> = found.companies.iter().map(|c| c.id).collect();
        assert_eq!(company_ids, vec![comp.id]);
        assert!(found.macros.is_empty());
        assert_eq!(found.event.sentiment_score, Some(-3));

        news_event::Entity::delete_by_id(made.event.id).exec(&db).await?;
        company_service::delete_company(&db, comp.id).await?;
        industry_service::delete_industry(&db, ind_a.id).await?;
        industry_service::delete_industry(&db, ind_b.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn event_date_defaults_to_today() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let made = create_news_event(
            &db,
            NewNewsEvent {
                title: format!("svc_news_{}", Uuid::new_v4()),
                ..NewNewsEvent::default()
            },
        )
        .await?;
        assert_eq!(made.event.event_date, chrono::Utc::now().date_naive());

        news_event::Entity::delete_by_id(made.event.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_tagged_company_cascades_to_junction_rows() -> Result<(), anyhow::Error> {
        let db = match test_support::get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let comp = company_service::create_company(&db, &ticker(), "Ephemeral Co", None).await?;
        let made = create_news_event(
            &db,
            NewNewsEvent {
                title: format!("svc_news_{}", Uuid::new_v4()),
                company_ids: vec![comp.id],
                ..NewNewsEvent::default()
            },
        )
        .await?;
        assert_eq!(made.companies.len(), 1);

        company_service::delete_company(&db, comp.id).await?;

        let listed = list_news_events(&db).await?;
        let found = listed
            .iter()
            .find(|n| n.event.id == made.event.id)
            .expect("event still listed");
        assert!(found.companies.is_empty());

        news_event::Entity::delete_by_id(made.event.id).exec(&db).await?;
        Ok(())
    }
}
