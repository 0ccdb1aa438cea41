use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subdivision of a tournament holding its registered teams and matches.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tournament_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub group_id: i64,
    pub name: String,
    pub tournament_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::TournamentId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Tournament,
    #[sea_orm(has_many = "super::group_detail::Entity")]
    GroupDetail,
    #[sea_orm(has_many = "super::soccer_match::Entity")]
    SoccerMatch,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::group_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupDetail.def()
    }
}

impl Related<super::soccer_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoccerMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
