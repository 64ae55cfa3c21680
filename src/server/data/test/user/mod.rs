mod create;
mod update_profile;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::user::UserRepository;
use crate::server::model::user::{CreateUserParams, UpdateProfileParams};
