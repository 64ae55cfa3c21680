use entity::service::ServiceType;

use crate::model::service::{ServiceDto, ServiceKind};

impl From<ServiceType> for ServiceKind {
    fn from(kind: ServiceType) -> Self {
        match kind {
            ServiceType::Veterinaire => ServiceKind::Veterinaire,
            ServiceType::Toiletteur => ServiceKind::Toiletteur,
            ServiceType::Autre => ServiceKind::Autre,
        }
    }
}

impl From<ServiceKind> for ServiceType {
    fn from(kind: ServiceKind) -> Self {
        match kind {
            ServiceKind::Veterinaire => ServiceType::Veterinaire,
            ServiceKind::Toiletteur => ServiceType::Toiletteur,
            ServiceKind::Autre => ServiceType::Autre,
        }
    }
}

impl From<entity::service::Model> for ServiceDto {
    fn from(service: entity::service::Model) -> Self {
        Self {
            id: service.id,
            kind: service.service_type.into(),
            name: service.name,
            address: service.address,
            phone: service.phone,
            hours: service.hours,
            lat: service.lat,
            lng: service.lng,
            created_at: service.created_at,
        }
    }
}
