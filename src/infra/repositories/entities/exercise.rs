//! Exercise database entity for SeaORM.
//!
//! `user_id` is a plain column: ownership is checked when an exercise is
//! added, not enforced by a foreign key.

use sea_orm::entity::prelude::*;

use crate::domain::Exercise;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Exercise {
    fn from(model: Model) -> Self {
        Exercise {
            id: model.id,
            user_id: model.user_id,
            description: model.description,
            duration: model.duration,
            date: model.date,
        }
    }
}
