mod crud;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::model::agenda::{CreateAgendaEventDto, UpdateAgendaEventDto};
use crate::server::data::agenda_event::AgendaEventRepository;
