//! Junction row linking a news event to a macro indicator.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{macro_indicator, news_event};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news_macro")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub news_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub macro_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    News,
    Macro,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::News => Entity::belongs_to(news_event::Entity)
                .from(Column::NewsId)
                .to(news_event::Column::Id)
                .into(),
            Relation::Macro => Entity::belongs_to(macro_indicator::Entity)
                .from(Column::MacroId)
                .to(macro_indicator::Column::Id)
                .into(),
        }
    }
}

impl Related<news_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::News.def()
    }
}

impl Related<macro_indicator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Macro.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
