use sea_orm::entity::prelude::*;

/// Join row linking a user to a liked person. The ids are plain columns:
/// nothing enforces that the referenced user or person exists, and the same
/// pair may be stored more than once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub people_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
