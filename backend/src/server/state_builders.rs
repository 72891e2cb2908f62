//! Builders wiring repositories, adapters and services into [`HttpState`].

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use backend::domain::ports::{TodoRepository, UserRepository};
use backend::domain::{AuthenticationService, TodoService, UserDirectory};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::memory::InMemoryStore;
use backend::outbound::persistence::{DieselTodoRepository, DieselUserRepository};
use backend::outbound::security::{BcryptPasswordHasher, JwtTokenService};

use super::ServerConfig;

fn http_state_for<U, T>(
    users: Arc<U>,
    todos: Arc<T>,
    config: &ServerConfig,
) -> web::Data<HttpState>
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    let hasher = Arc::new(BcryptPasswordHasher::with_cost(config.bcrypt_cost));
    let tokens = Arc::new(JwtTokenService::new(&config.jwt_secret, config.token_ttl));
    let auth = Arc::new(AuthenticationService::new(users.clone(), hasher, tokens));
    let todo_service = Arc::new(TodoService::new(todos, config.ownership));

    web::Data::new(HttpState::new(HttpStatePorts {
        auth: auth.clone(),
        identity: auth,
        todos: todo_service.clone(),
        todos_query: todo_service,
        users: Arc::new(UserDirectory::new(users)),
    }))
}

/// Build HTTP state backed by PostgreSQL when a pool is configured, otherwise
/// by a fresh in-memory store.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    match &config.db_pool {
        Some(pool) => http_state_for(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselTodoRepository::new(pool.clone())),
            config,
        ),
        None => {
            info!("no database configured; data is kept in memory");
            let store = Arc::new(InMemoryStore::new());
            http_state_for(store.clone(), store, config)
        }
    }
}
