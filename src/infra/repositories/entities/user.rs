//! SeaORM entity for the `users` table.

use sea_orm::entity::prelude::*;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    #[sea_orm(unique)]
    pub full_name: String,
    /// Plain reference, no FK constraint: role deletion stays permissive
    pub role_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<(Model, super::role::Model)> for User {
    fn from((user, role): (Model, super::role::Model)) -> Self {
        User {
            id: user.id,
            username: user.username,
            password: user.password,
            full_name: user.full_name,
            role: role.into(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
