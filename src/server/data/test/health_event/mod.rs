mod create;
mod delete;
mod ownership;
mod update;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::model::health_event::UpdateHealthEventDto;
use crate::server::data::health_event::HealthEventRepository;
