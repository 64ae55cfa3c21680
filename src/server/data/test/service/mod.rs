mod crud;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::model::service::UpdateServiceDto;
use crate::server::data::service::ServiceRepository;
