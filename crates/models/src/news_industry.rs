//! Junction row linking a news event to an industry.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{industry, news_event};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news_industries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub news_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub industry_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    News,
    Industry,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::News => Entity::belongs_to(news_event::Entity)
                .from(Column::NewsId)
                .to(news_event::Column::Id)
                .into(),
            Relation::Industry => Entity::belongs_to(industry::Entity)
                .from(Column::IndustryId)
                .to(industry::Column::Id)
                .into(),
        }
    }
}

impl Related<news_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::News.def()
    }
}

impl Related<industry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Industry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
