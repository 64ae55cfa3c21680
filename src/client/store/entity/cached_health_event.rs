use sea_orm::entity::prelude::*;

/// Local health event category.
///
/// Coarser than the server's five categories: consultations map onto
/// appointments and grooming joins the other-care bucket. The remapping
/// lives in `client::sync` as a pair of exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LocalEventKind {
    #[sea_orm(string_value = "VACCINATION")]
    Vaccination,
    #[sea_orm(string_value = "TREATMENT")]
    Treatment,
    #[sea_orm(string_value = "APPOINTMENT")]
    Appointment,
    #[sea_orm(string_value = "OTHER_CARE")]
    OtherCare,
}

/// Progress of a care event as tracked locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum CareStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "DONE")]
    Done,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cached_health_event")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pet_id: String,
    pub kind: LocalEventKind,
    pub title: String,
    pub description: Option<String>,
    pub starts_ms: i64,
    pub ends_ms: Option<i64>,
    pub status: CareStatus,
    pub created_ms: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
