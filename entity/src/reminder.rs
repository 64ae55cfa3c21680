use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reminder")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub health_event_id: i32,
    pub remind_at: DateTimeUtc,
    pub sent: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::health_event::Entity",
        from = "Column::HealthEventId",
        to = "super::health_event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HealthEvent,
}

impl Related<super::health_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
