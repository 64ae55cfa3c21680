mod create;
mod delete;
mod update;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::model::reminder::UpdateReminderDto;
use crate::server::data::reminder::ReminderRepository;
