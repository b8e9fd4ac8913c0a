use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "idea")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub session_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date_created: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brainstorm_session::Entity",
        from = "Column::SessionId",
        to = "super::brainstorm_session::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BrainstormSession,
}

impl Related<super::brainstorm_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BrainstormSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
