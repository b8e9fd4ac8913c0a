use crate::server::{
    data::{BrainstormSessionRepository, SessionRepository},
    model::{brainstorm_session::CreateBrainstormSessionParam, idea::Idea},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod get_by_id;
mod list;
mod update;
