//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{
    MockAuthCommand, MockIdentityResolver, MockTodosCommand, MockTodosQuery, MockUsersQuery,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mocked ports for a handler test. Ports left as `None` get a mock with no
/// expectations, so any call to them fails the test.
#[derive(Default)]
pub struct TestPorts {
    pub auth: Option<MockAuthCommand>,
    pub identity: Option<MockIdentityResolver>,
    pub todos: Option<MockTodosCommand>,
    pub todos_query: Option<MockTodosQuery>,
    pub users: Option<MockUsersQuery>,
}

/// Build [`HttpState`] from mocked ports.
pub fn state_with(ports: TestPorts) -> HttpState {
    HttpState::new(HttpStatePorts {
        auth: Arc::new(ports.auth.unwrap_or_default()),
        identity: Arc::new(ports.identity.unwrap_or_default()),
        todos: Arc::new(ports.todos.unwrap_or_default()),
        todos_query: Arc::new(ports.todos_query.unwrap_or_default()),
        users: Arc::new(ports.users.unwrap_or_default()),
    })
}

/// Identity resolver that maps every token to `user_id`.
pub fn identity_for(user_id: i32) -> MockIdentityResolver {
    let mut identity = MockIdentityResolver::new();
    identity
        .expect_resolve()
        .returning(move |_| Ok(crate::domain::UserId::new(user_id)));
    identity
}
