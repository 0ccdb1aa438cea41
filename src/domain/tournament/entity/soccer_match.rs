use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A scheduled match between two teams of the same group.
///
/// `local_team_id` and `visitor_team_id` must differ; the service layer
/// rejects equal teams before any write reaches the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "soccer_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub match_id: i64,
    pub date: DateTime,
    pub group_id: i64,
    pub local_team_id: i64,
    pub visitor_team_id: i64,
    pub local_goals: Option<i32>,
    pub visitor_goals: Option<i32>,
    pub is_closed: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::GroupId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Group,
    #[sea_orm(
        belongs_to = "crate::domain::team::entity::team::Entity",
        from = "Column::LocalTeamId",
        to = "crate::domain::team::entity::team::Column::TeamId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    LocalTeam,
    #[sea_orm(
        belongs_to = "crate::domain::team::entity::team::Entity",
        from = "Column::VisitorTeamId",
        to = "crate::domain::team::entity::team::Column::TeamId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    VisitorTeam,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
