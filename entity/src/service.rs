use sea_orm::entity::prelude::*;

/// Kind of directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ServiceType {
    #[sea_orm(string_value = "VETERINAIRE")]
    Veterinaire,
    #[sea_orm(string_value = "TOILETTEUR")]
    Toiletteur,
    #[sea_orm(string_value = "AUTRE")]
    Autre,
}

/// Standalone directory entry for a nearby service; admin-managed and not
/// owned by any user.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub service_type: ServiceType,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
