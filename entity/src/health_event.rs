use sea_orm::entity::prelude::*;

/// Category of a care event. Values match the wire/database strings the
/// product has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum HealthEventType {
    #[sea_orm(string_value = "VACCIN")]
    Vaccin,
    #[sea_orm(string_value = "TRAITEMENT")]
    Traitement,
    #[sea_orm(string_value = "CONSULTATION")]
    Consultation,
    #[sea_orm(string_value = "TOILETTAGE")]
    Toilettage,
    #[sea_orm(string_value = "AUTRE")]
    Autre,
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "health_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pet_id: i32,
    #[sea_orm(column_name = "type")]
    pub event_type: HealthEventType,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pet::Entity",
        from = "Column::PetId",
        to = "super::pet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Pet,
    #[sea_orm(has_many = "super::reminder::Entity")]
    Reminder,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl Related<super::reminder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reminder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
