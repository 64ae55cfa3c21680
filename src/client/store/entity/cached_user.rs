use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cached_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub photo_url: Option<String>,
    pub created_ms: i64,
    pub active: bool,
    /// Server account id this row mirrors, if it has ever been synced.
    pub server_id: Option<String>,
    /// True for rows created offline that have never reached the server.
    /// Currently informational only; there is no push queue.
    pub pending_sync: bool,
    pub modified_ms: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
