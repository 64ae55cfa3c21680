use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::service::{CreateServiceDto, UpdateServiceDto};

/// Directory entries are not owned by anyone; reads are public and writes
/// are gated at the controller by the admin permission.
pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists directory entries, newest first, optionally filtered by type.
    pub async fn list(
        &self,
        service_type: Option<entity::service::ServiceType>,
    ) -> Result<Vec<entity::service::Model>, DbErr> {
        let mut query = entity::prelude::Service::find();

        if let Some(service_type) = service_type {
            query = query.filter(entity::service::Column::ServiceType.eq(service_type));
        }

        query
            .order_by_desc(entity::service::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::service::Model>, DbErr> {
        entity::prelude::Service::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, dto: CreateServiceDto) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            service_type: ActiveValue::Set(dto.kind.into()),
            name: ActiveValue::Set(dto.name),
            address: ActiveValue::Set(dto.address),
            phone: ActiveValue::Set(dto.phone),
            hours: ActiveValue::Set(dto.hours),
            lat: ActiveValue::Set(dto.lat),
            lng: ActiveValue::Set(dto.lng),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to a directory entry.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated entry
    /// - `Ok(None)` - No entry with that id
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateServiceDto,
    ) -> Result<Option<entity::service::Model>, DbErr> {
        let mut update = entity::prelude::Service::update_many()
            .filter(entity::service::Column::Id.eq(id));
        let mut changed = false;

        if let Some(kind) = dto.kind {
            let service_type: entity::service::ServiceType = kind.into();
            update = update.col_expr(
                entity::service::Column::ServiceType,
                Expr::value(service_type),
            );
            changed = true;
        }
        if let Some(name) = dto.name {
            update = update.col_expr(entity::service::Column::Name, Expr::value(name));
            changed = true;
        }
        if let Some(address) = dto.address {
            update = update.col_expr(entity::service::Column::Address, Expr::value(address));
            changed = true;
        }
        if let Some(phone) = dto.phone {
            update = update.col_expr(entity::service::Column::Phone, Expr::value(phone));
            changed = true;
        }
        if let Some(hours) = dto.hours {
            update = update.col_expr(entity::service::Column::Hours, Expr::value(hours));
            changed = true;
        }
        if let Some(lat) = dto.lat {
            update = update.col_expr(entity::service::Column::Lat, Expr::value(lat));
            changed = true;
        }
        if let Some(lng) = dto.lng {
            update = update.col_expr(entity::service::Column::Lng, Expr::value(lng));
            changed = true;
        }

        if changed {
            let result = update.exec(self.db).await?;
            if result.rows_affected == 0 {
                return Ok(None);
            }
        }

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Service::delete_many()
            .filter(entity::service::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
