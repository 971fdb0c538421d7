mod dto;
pub mod handlers;
mod memory;
pub mod password;
mod repo;
mod repo_types;

#[cfg(test)]
mod contract;

pub use dto::{PublicUser, SaveUserRequest};
pub use memory::InMemoryUserRepository;
pub use repo::{PostgresUserRepository, RepoError, RepoResult, UserRepository};
pub use repo_types::{User, UserId, UserRow};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
