use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub team_id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub logo_path: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::tournament::entity::group_detail::Entity")]
    GroupDetail,
}

impl Related<crate::domain::tournament::entity::group_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
