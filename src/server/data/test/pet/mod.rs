mod create;
mod delete;
mod get_by_id;
mod update;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::model::pet::{CreatePetDto, UpdatePetDto};
use crate::server::data::pet::PetRepository;
